use super::request_common::JSONBodyHTTPRequestType;

/// Request type for the /battery/consume endpoint.
#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct BatteryConsumeRequest {
    /// Charge to subtract. Negative values recharge.
    amount: f64,
}

impl BatteryConsumeRequest {
    pub(crate) fn amount(&self) -> f64 { self.amount }
}

impl JSONBodyHTTPRequestType for BatteryConsumeRequest {
    fn endpoint() -> &'static str { "/battery/consume" }
}
