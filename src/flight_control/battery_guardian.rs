use super::{
    common::vec2d::Vec2D,
    status_reporter::{Alert, AlertKind, StatusReporter, StatusSnapshot},
    vehicle_state::VehicleState,
};
use strum_macros::Display;

/// Result of a battery check.
#[derive(serde::Serialize, Debug, Display, Clone, PartialEq)]
#[serde(untagged)]
pub enum BatteryVerdict {
    /// Charge is sufficient, nothing happened.
    Nominal,
    /// Mission aborted. `alerts` holds the low battery alert followed by the
    /// arrival alert.
    ReturnedToBase { alerts: [Alert; 2], status: StatusSnapshot },
}

impl BatteryVerdict {
    pub fn alerts(&self) -> Vec<&Alert> {
        match self {
            BatteryVerdict::Nominal => Vec::new(),
            BatteryVerdict::ReturnedToBase { alerts, .. } => alerts.iter().collect(),
        }
    }

    pub fn is_nominal(&self) -> bool { matches!(self, BatteryVerdict::Nominal) }
}

/// Aborts the mission when the battery runs low.
pub struct BatteryGuardian;

impl BatteryGuardian {
    /// Battery levels strictly below this value force a return to base.
    pub const LOW_BATTERY_THRESHOLD: f64 = 20.0;

    pub fn check(state: &mut VehicleState) -> BatteryVerdict {
        if state.battery_level() < Self::LOW_BATTERY_THRESHOLD {
            let low = StatusReporter::format_alert(
                AlertKind::LowBattery,
                "Low battery! Returning to base.",
            );
            let (returned, status) = Self::return_to_base(state);
            BatteryVerdict::ReturnedToBase { alerts: [low, returned], status }
        } else {
            BatteryVerdict::Nominal
        }
    }

    /// Moves the vehicle home and grounds it. The battery level is left untouched.
    pub fn return_to_base(state: &mut VehicleState) -> (Alert, StatusSnapshot) {
        state.set_position(Vec2D::zero());
        state.set_altitude(0.0);
        state.set_speed(0.0);
        let alert = StatusReporter::format_alert(AlertKind::ReturnedToBase, "Vehicle returned to base");
        (alert, StatusReporter::render_status(state))
    }
}
