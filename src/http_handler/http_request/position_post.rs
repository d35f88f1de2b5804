use super::request_common::JSONBodyHTTPRequestType;
use crate::flight_control::common::vec2d::Vec2D;

/// Request type for the /position endpoint.
#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct PositionRequest {
    /// The new position as `[x, y]`.
    position: Vec2D<f64>,
}

impl PositionRequest {
    pub(crate) fn position(&self) -> Vec2D<f64> { self.position }
}

impl JSONBodyHTTPRequestType for PositionRequest {
    fn endpoint() -> &'static str { "/position" }
}
