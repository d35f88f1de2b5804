use super::{
    common::vec2d::Vec2D,
    status_reporter::{Alert, AlertKind, StatusReporter, StatusSnapshot},
    vehicle_state::VehicleState,
};
use strum_macros::Display;

/// A single proximity measurement.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorReading {
    /// Distance to the nearest obstacle in meters.
    #[serde(default)]
    distance: f64,
}

impl SensorReading {
    pub fn new(distance: f64) -> Self { Self { distance } }
    pub fn distance(&self) -> f64 { self.distance }
}

/// What the [`ObstacleReactor`] did in response to a reading.
#[derive(serde::Serialize, Debug, Display, Clone, PartialEq)]
#[serde(tag = "reaction", rename_all = "snake_case")]
pub enum ObstacleReaction {
    /// Nothing within range.
    Clear,
    /// Course adjusted; `status` was rendered after the turn but before the move.
    Rerouted { alert: Alert, status: StatusSnapshot },
    /// Speed forced to zero, course kept.
    EmergencyStop { alert: Alert },
}

impl ObstacleReaction {
    pub fn alerts(&self) -> Vec<&Alert> {
        match self {
            ObstacleReaction::Clear => Vec::new(),
            ObstacleReaction::Rerouted { alert, .. } | ObstacleReaction::EmergencyStop { alert } => {
                vec![alert]
            }
        }
    }
}

/// Decides between rerouting and stopping based on obstacle distance.
pub struct ObstacleReactor;

impl ObstacleReactor {
    /// Readings strictly below this distance stop the vehicle.
    pub const STOP_DISTANCE: f64 = 5.0;
    /// Readings strictly below this distance (and not stopping) trigger a reroute.
    pub const AVOID_DISTANCE: f64 = 10.0;
    /// Heading change applied by a reroute, in degrees.
    pub const AVOID_TURN_DEG: f64 = 45.0;
    /// Displacement applied on both axes by a reroute.
    pub const AVOID_STEP: Vec2D<f64> = Vec2D::new(10.0, 10.0);

    pub fn handle(state: &mut VehicleState, reading: SensorReading) -> ObstacleReaction {
        let distance = reading.distance();
        // first matching band wins, the stop band shadows the avoid band
        if distance < Self::STOP_DISTANCE {
            let alert = StatusReporter::format_alert(
                AlertKind::TooClose,
                "Too close to obstacle, stopping!",
            );
            state.set_speed(0.0);
            ObstacleReaction::EmergencyStop { alert }
        } else if distance < Self::AVOID_DISTANCE {
            let alert = StatusReporter::format_alert(
                AlertKind::ObstacleDetected,
                format!("Obstacle detected at {distance} meters!"),
            );
            let status = Self::adjust_course(state);
            ObstacleReaction::Rerouted { alert, status }
        } else {
            ObstacleReaction::Clear
        }
    }

    /// Turns the vehicle and shifts it sideways.
    ///
    /// The returned snapshot carries the new heading but the position from
    /// before the shift; the position only changes after rendering.
    pub fn adjust_course(state: &mut VehicleState) -> StatusSnapshot {
        state.set_heading(state.heading() + Self::AVOID_TURN_DEG);
        let moved = state.position() + Self::AVOID_STEP;
        let status = StatusReporter::render_status(state);
        state.set_position(moved);
        status
    }
}
