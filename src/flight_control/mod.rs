//! Vehicle state and the safety reactions that act on it.
//!
//! [`FlightController`] is the only entry point used by the transport layer;
//! the reactors are stateless and operate on a borrowed [`VehicleState`].

mod alert_log;
mod battery_guardian;
pub(crate) mod common;
mod flight_controller;
mod obstacle_reactor;
mod status_reporter;
mod vehicle_state;
#[cfg(test)]
mod tests;

pub use battery_guardian::{BatteryGuardian, BatteryVerdict};
pub use flight_controller::{FlightController, FlightTimeEstimate, SensorOutcome};
pub use obstacle_reactor::{ObstacleReaction, ObstacleReactor, SensorReading};
pub use status_reporter::{Alert, AlertKind, StatusReporter, StatusSnapshot};
pub use vehicle_state::VehicleState;
