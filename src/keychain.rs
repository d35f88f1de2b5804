use crate::config::SentinelConfig;
use crate::flight_control::{FlightController, VehicleState};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// Shared handles handed to every HTTP handler.
///
/// The flight controller sits behind a single lock: every mutating command
/// holds the write guard for its whole read-modify-write sequence.
#[derive(Clone)]
pub struct Keychain {
    /// The flight controller owning the vehicle state.
    f_cont: Arc<RwLock<FlightController>>,
    /// Cancelled once the server should stop accepting requests.
    shutdown: CancellationToken,
}

impl Keychain {
    /// Builds the vehicle state and its controller from the given configuration.
    pub fn new(config: &SentinelConfig) -> Self {
        let f_cont = FlightController::new(VehicleState::new(), config.alert_history());
        Self { f_cont: Arc::new(RwLock::new(f_cont)), shutdown: CancellationToken::new() }
    }

    /// Provides a cloned reference to the flight controller.
    pub fn f_cont(&self) -> Arc<RwLock<FlightController>> { Arc::clone(&self.f_cont) }

    /// Provides a clone of the shutdown token.
    pub fn shutdown(&self) -> CancellationToken { self.shutdown.clone() }
}
