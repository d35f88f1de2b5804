use crate::warn;

/// A command body sent as JSON.
///
/// Decoding never fails: an empty or malformed body, as well as missing
/// fields, fall back to the zero value of the request.
pub(crate) trait JSONBodyHTTPRequestType:
    for<'de> serde::Deserialize<'de> + Default + std::fmt::Debug
{
    /// `str` object representing the specific endpoint.
    fn endpoint() -> &'static str;

    fn decode(body: &[u8]) -> Self {
        if body.is_empty() {
            warn!("Empty body on {}, using defaults", Self::endpoint());
            return Self::default();
        }
        serde_json::from_slice::<Self>(body).unwrap_or_else(|e| {
            warn!("Malformed body on {}: {e}, using defaults", Self::endpoint());
            Self::default()
        })
    }
}
