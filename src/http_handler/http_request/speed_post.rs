use super::request_common::JSONBodyHTTPRequestType;

/// Request type for the /speed endpoint.
#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct SpeedRequest {
    speed: f64,
}

impl SpeedRequest {
    pub(crate) fn speed(&self) -> f64 { self.speed }
}

impl JSONBodyHTTPRequestType for SpeedRequest {
    fn endpoint() -> &'static str { "/speed" }
}
