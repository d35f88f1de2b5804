use super::request_common::JSONBodyHTTPRequestType;
use crate::flight_control::SensorReading;

impl JSONBodyHTTPRequestType for SensorReading {
    fn endpoint() -> &'static str { "/sensor" }
}
