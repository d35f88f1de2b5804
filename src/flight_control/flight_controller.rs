use super::{
    alert_log::AlertLog,
    battery_guardian::{BatteryGuardian, BatteryVerdict},
    common::vec2d::Vec2D,
    obstacle_reactor::{ObstacleReaction, ObstacleReactor, SensorReading},
    status_reporter::{Alert, StatusReporter, StatusSnapshot},
    vehicle_state::VehicleState,
};
use crate::{event, warn};

/// Combined outcome of one sensor event.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct SensorOutcome {
    obstacle: ObstacleReaction,
    battery: BatteryVerdict,
}

impl SensorOutcome {
    pub fn obstacle(&self) -> &ObstacleReaction { &self.obstacle }
    pub fn battery(&self) -> &BatteryVerdict { &self.battery }

    /// All alerts of this event in the order they were raised.
    pub fn alerts(&self) -> Vec<&Alert> {
        let mut alerts = self.obstacle.alerts();
        alerts.extend(self.battery.alerts());
        alerts
    }
}

/// Remaining flight time, `None` while the vehicle is not moving.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FlightTimeEstimate {
    remaining_flight_time: Option<f64>,
    unbounded: bool,
}

impl FlightTimeEstimate {
    pub fn remaining_flight_time(&self) -> Option<f64> { self.remaining_flight_time }
    pub fn is_unbounded(&self) -> bool { self.unbounded }
}

/// Command façade for the vehicle.
///
/// Owns the [`VehicleState`] and runs the obstacle reactor and the battery
/// guardian on every sensor event. None of the operations fail; inputs are
/// expected to be decoded (and defaulted) by the caller.
#[derive(Debug)]
pub struct FlightController {
    state: VehicleState,
    alert_log: AlertLog,
}

impl FlightController {
    /// Number of alerts kept by default.
    pub const DEFAULT_ALERT_HISTORY: usize = 64;

    pub fn new(state: VehicleState, alert_history: usize) -> Self {
        Self { state, alert_log: AlertLog::new(alert_history) }
    }

    pub fn state(&self) -> &VehicleState { &self.state }

    pub fn status(&self) -> StatusSnapshot { StatusReporter::render_status(&self.state) }

    pub fn reposition(&mut self, position: Vec2D<f64>) -> StatusSnapshot {
        event!("Repositioning from {} to {position}", self.state.position());
        self.state.set_position(position);
        self.status()
    }

    pub fn re_altitude(&mut self, altitude: f64) -> StatusSnapshot {
        event!("Changing altitude from {} to {altitude}", self.state.altitude());
        self.state.set_altitude(altitude);
        self.status()
    }

    pub fn re_speed(&mut self, speed: f64) -> StatusSnapshot {
        event!("Changing speed from {} to {speed}", self.state.speed());
        if speed < 0.0 {
            warn!("Negative speed {speed} commanded, applying as-is");
        }
        self.state.set_speed(speed);
        self.status()
    }

    pub fn consume_battery(&mut self, amount: f64) -> StatusSnapshot {
        self.state.consume_battery(amount);
        event!("Battery drained by {amount}, now at {}", self.state.battery_level());
        self.status()
    }

    /// Feeds a proximity reading through both safety reactors.
    ///
    /// The battery check always runs, whatever the obstacle reactor decided.
    pub fn ingest_sensor_reading(&mut self, reading: SensorReading) -> SensorOutcome {
        event!("Sensor reading: obstacle at {}m", reading.distance());
        let obstacle = ObstacleReactor::handle(&mut self.state, reading);
        self.record_alerts(&obstacle.alerts());
        let battery = self.check_battery();
        SensorOutcome { obstacle, battery }
    }

    pub fn check_battery(&mut self) -> BatteryVerdict {
        let verdict = BatteryGuardian::check(&mut self.state);
        self.record_alerts(&verdict.alerts());
        verdict
    }

    pub fn flight_time(&self) -> FlightTimeEstimate {
        let estimate = self.state.estimate_remaining_flight_time();
        let unbounded = estimate.is_infinite();
        FlightTimeEstimate {
            remaining_flight_time: (!unbounded).then_some(estimate),
            unbounded,
        }
    }

    pub fn recent_alerts(&self) -> Vec<Alert> { self.alert_log.recent() }

    fn record_alerts(&mut self, alerts: &[&Alert]) {
        for alert in alerts {
            self.alert_log.record(alert);
        }
    }
}

impl Default for FlightController {
    fn default() -> Self { Self::new(VehicleState::new(), Self::DEFAULT_ALERT_HISTORY) }
}
