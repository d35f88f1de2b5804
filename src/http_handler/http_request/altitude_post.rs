use super::request_common::JSONBodyHTTPRequestType;

/// Request type for the /altitude endpoint.
#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct AltitudeRequest {
    /// The new altitude in meters.
    altitude: f64,
}

impl AltitudeRequest {
    pub(crate) fn altitude(&self) -> f64 { self.altitude }
}

impl JSONBodyHTTPRequestType for AltitudeRequest {
    fn endpoint() -> &'static str { "/altitude" }
}
