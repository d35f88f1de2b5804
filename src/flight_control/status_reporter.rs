use super::{common::vec2d::Vec2D, vehicle_state::VehicleState};
use chrono::{DateTime, Utc};
use strum_macros::{Display, EnumIter};

/// Read-only copy of the vehicle attributes handed out to callers.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct StatusSnapshot {
    altitude: f64,
    speed: f64,
    position: Vec2D<f64>,
    battery_level: f64,
    heading: f64,
}

impl StatusSnapshot {
    pub fn altitude(&self) -> f64 { self.altitude }
    pub fn speed(&self) -> f64 { self.speed }
    pub fn position(&self) -> Vec2D<f64> { self.position }
    pub fn battery_level(&self) -> f64 { self.battery_level }
    pub fn heading(&self) -> f64 { self.heading }
}

/// The safety events that produce an [`Alert`].
#[derive(serde::Serialize, serde::Deserialize, Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    ObstacleDetected,
    TooClose,
    LowBattery,
    ReturnedToBase,
}

/// A textual safety notification. Not an error, alerts are returned as data.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Alert {
    kind: AlertKind,
    message: String,
    raised_at: DateTime<Utc>,
}

impl Alert {
    pub fn kind(&self) -> AlertKind { self.kind }
    pub fn message(&self) -> &str { &self.message }
    pub fn raised_at(&self) -> DateTime<Utc> { self.raised_at }
}

/// Projects [`VehicleState`] into the external response shapes.
pub struct StatusReporter;

impl StatusReporter {
    pub fn render_status(state: &VehicleState) -> StatusSnapshot {
        StatusSnapshot {
            altitude: state.altitude(),
            speed: state.speed(),
            position: state.position(),
            battery_level: state.battery_level(),
            heading: state.heading(),
        }
    }

    pub fn format_alert(kind: AlertKind, message: impl Into<String>) -> Alert {
        Alert { kind, message: message.into(), raised_at: Utc::now() }
    }
}
