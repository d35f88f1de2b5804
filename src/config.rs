use crate::flight_control::FlightController;
use crate::warn;
use std::env;

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct SentinelConfig {
    /// Socket address the HTTP server binds to.
    bind_addr: String,
    /// Number of alerts kept for `GET /alerts`.
    alert_history: usize,
}

impl SentinelConfig {
    const BIND_ADDR_VAR: &'static str = "UAV_BIND_ADDR";
    const ALERT_HISTORY_VAR: &'static str = "UAV_ALERT_HISTORY";
    const DEFAULT_BIND_ADDR: &'static str = "127.0.0.1:5000";

    pub fn from_env() -> Self {
        let bind_addr_var = env::var(Self::BIND_ADDR_VAR);
        let bind_addr = bind_addr_var.as_ref().map_or(Self::DEFAULT_BIND_ADDR, |v| v.as_str());
        let alert_history = match env::var(Self::ALERT_HISTORY_VAR) {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(
                    "Ignoring {}={raw}, using {}",
                    Self::ALERT_HISTORY_VAR,
                    FlightController::DEFAULT_ALERT_HISTORY
                );
                FlightController::DEFAULT_ALERT_HISTORY
            }),
            Err(_) => FlightController::DEFAULT_ALERT_HISTORY,
        };
        Self::new(bind_addr, alert_history)
    }

    pub fn new(bind_addr: &str, alert_history: usize) -> Self {
        Self { bind_addr: String::from(bind_addr), alert_history }
    }

    pub fn bind_addr(&self) -> &str { self.bind_addr.as_str() }
    pub fn alert_history(&self) -> usize { self.alert_history }
}
