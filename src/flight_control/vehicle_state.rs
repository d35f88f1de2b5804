use super::common::vec2d::Vec2D;

/// Mutable flight attributes of the simulated vehicle.
///
/// Exactly one instance exists per process; it is owned by the
/// [`FlightController`](super::FlightController) and every other component
/// goes through the update methods below.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    /// Altitude in meters.
    altitude: f64,
    /// Horizontal position.
    position: Vec2D<f64>,
    /// Ground speed, forced back to zero by an emergency stop.
    speed: f64,
    /// Heading in degrees, always kept in `[0, 360)`.
    heading: f64,
    /// Remaining battery charge. Unbounded in both directions.
    battery_level: f64,
}

impl VehicleState {
    /// Full circle in degrees, headings are taken modulo this value.
    pub const FULL_CIRCLE_DEG: f64 = 360.0;
    /// Battery charge at startup.
    pub const INITIAL_BATTERY: f64 = 100.0;
    /// Battery drain per unit of speed used by the flight time estimate.
    const DRAIN_PER_SPEED: f64 = 0.1;

    pub fn new() -> Self {
        Self {
            altitude: 0.0,
            position: Vec2D::zero(),
            speed: 0.0,
            heading: 0.0,
            battery_level: Self::INITIAL_BATTERY,
        }
    }

    pub fn altitude(&self) -> f64 { self.altitude }
    pub fn position(&self) -> Vec2D<f64> { self.position }
    pub fn speed(&self) -> f64 { self.speed }
    pub fn heading(&self) -> f64 { self.heading }
    pub fn battery_level(&self) -> f64 { self.battery_level }

    pub fn set_heading(&mut self, heading: f64) {
        self.heading = heading.rem_euclid(Self::FULL_CIRCLE_DEG);
    }

    pub fn set_altitude(&mut self, altitude: f64) { self.altitude = altitude; }

    pub fn set_position(&mut self, position: Vec2D<f64>) { self.position = position; }

    pub fn set_speed(&mut self, speed: f64) { self.speed = speed; }

    /// Subtracts `amount` from the battery level. No floor is enforced.
    pub fn consume_battery(&mut self, amount: f64) { self.battery_level -= amount; }

    /// Estimates the remaining flight time from the current battery level and speed.
    ///
    /// # Returns
    /// `battery_level / (speed * 0.1)` while moving, `f64::INFINITY` otherwise.
    pub fn estimate_remaining_flight_time(&self) -> f64 {
        if self.speed > 0.0 {
            self.battery_level / (self.speed * Self::DRAIN_PER_SPEED)
        } else {
            f64::INFINITY
        }
    }
}

impl Default for VehicleState {
    fn default() -> Self { Self::new() }
}
