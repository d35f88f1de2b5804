use super::common::vec2d::Vec2D;
use super::{
    AlertKind, BatteryGuardian, BatteryVerdict, FlightController, ObstacleReaction,
    ObstacleReactor, SensorReading, StatusReporter, VehicleState,
};
use strum::IntoEnumIterator;

fn cruising_state() -> VehicleState {
    let mut state = VehicleState::new();
    state.set_speed(10.0);
    state
}

fn drained_state(level: f64) -> VehicleState {
    let mut state = VehicleState::new();
    state.consume_battery(VehicleState::INITIAL_BATTERY - level);
    state.set_position(Vec2D::new(42.0, -17.0));
    state.set_altitude(120.0);
    state.set_speed(8.0);
    state
}

#[test]
fn test_flight_time_formula() {
    let mut state = VehicleState::new();
    for (speed, drain) in [(10.0, 0.0), (3.5, 12.0), (0.25, 99.0), (120.0, 150.0)] {
        state.set_speed(speed);
        state.consume_battery(drain);
        let expected = state.battery_level() / (speed * 0.1);
        assert_eq!(state.estimate_remaining_flight_time(), expected);
    }
}

#[test]
fn test_flight_time_unbounded_when_stationary() {
    let mut state = VehicleState::new();
    assert_eq!(state.estimate_remaining_flight_time(), f64::INFINITY);
    state.set_speed(-3.0);
    assert_eq!(state.estimate_remaining_flight_time(), f64::INFINITY);
}

#[test]
fn test_heading_kept_in_range() {
    let mut state = VehicleState::new();
    state.set_heading(405.0);
    assert_eq!(state.heading(), 45.0);
    state.set_heading(-90.0);
    assert_eq!(state.heading(), 270.0);
    state.set_heading(360.0);
    assert_eq!(state.heading(), 0.0);
}

#[test]
fn test_battery_has_no_floor() {
    let mut state = VehicleState::new();
    state.consume_battery(130.0);
    assert_eq!(state.battery_level(), -30.0);
    state.consume_battery(-50.0);
    assert_eq!(state.battery_level(), 20.0);
}

#[test]
fn test_adjust_course_wraps_heading() {
    let mut state = VehicleState::new();
    for before in [0.0, 90.0, 300.0, 315.0, 350.0] {
        state.set_heading(before);
        ObstacleReactor::adjust_course(&mut state);
        assert_eq!(state.heading(), (before + 45.0) % 360.0);
    }
    state.set_heading(315.0);
    ObstacleReactor::adjust_course(&mut state);
    assert_eq!(state.heading(), 0.0);
}

#[test]
fn test_adjust_course_renders_before_move() {
    let mut state = VehicleState::new();
    state.set_position(Vec2D::new(3.0, -4.0));
    state.set_heading(10.0);
    let status = ObstacleReactor::adjust_course(&mut state);
    assert_eq!(status.position(), Vec2D::new(3.0, -4.0));
    assert_eq!(status.heading(), 55.0);
    assert_eq!(state.position(), Vec2D::new(13.0, 6.0));
}

#[test]
fn test_obstacle_too_close_stops() {
    let mut state = cruising_state();
    let reaction = ObstacleReactor::handle(&mut state, SensorReading::new(3.0));
    assert_eq!(state.speed(), 0.0);
    assert_eq!(state.heading(), 0.0);
    assert_eq!(state.position(), Vec2D::zero());
    match reaction {
        ObstacleReaction::EmergencyStop { alert } => assert_eq!(alert.kind(), AlertKind::TooClose),
        other => panic!("expected emergency stop, got {other}"),
    }
}

#[test]
fn test_obstacle_in_avoid_band_reroutes() {
    let mut state = cruising_state();
    let reaction = ObstacleReactor::handle(&mut state, SensorReading::new(7.0));
    assert_eq!(state.heading(), 45.0);
    assert_eq!(state.position(), Vec2D::new(10.0, 10.0));
    assert_eq!(state.speed(), 10.0);
    let alerts = reaction.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind(), AlertKind::ObstacleDetected);
    assert!(alerts[0].message().contains('7'));
}

#[test]
fn test_band_edges() {
    let mut state = cruising_state();
    let at_stop_edge = ObstacleReactor::handle(&mut state, SensorReading::new(5.0));
    assert!(matches!(at_stop_edge, ObstacleReaction::Rerouted { .. }));
    let at_avoid_edge = ObstacleReactor::handle(&mut state, SensorReading::new(10.0));
    assert_eq!(at_avoid_edge, ObstacleReaction::Clear);
}

#[test]
fn test_obstacle_far_away_is_ignored() {
    let mut state = cruising_state();
    let before = state.clone();
    let reaction = ObstacleReactor::handle(&mut state, SensorReading::new(15.0));
    assert_eq!(reaction, ObstacleReaction::Clear);
    assert!(reaction.alerts().is_empty());
    assert_eq!(state, before);
}

#[test]
fn test_low_battery_returns_to_base() {
    let mut state = drained_state(15.0);
    let verdict = BatteryGuardian::check(&mut state);
    assert_eq!(state.position(), Vec2D::zero());
    assert_eq!(state.altitude(), 0.0);
    assert_eq!(state.speed(), 0.0);
    assert_eq!(state.battery_level(), 15.0);
    let kinds: Vec<AlertKind> = verdict.alerts().iter().map(|a| a.kind()).collect();
    assert_eq!(kinds, vec![AlertKind::LowBattery, AlertKind::ReturnedToBase]);
    match verdict {
        BatteryVerdict::ReturnedToBase { status, .. } => {
            assert_eq!(status, StatusReporter::render_status(&state));
        }
        BatteryVerdict::Nominal => panic!("expected return to base"),
    }
}

#[test]
fn test_sufficient_battery_is_nominal() {
    let mut state = drained_state(50.0);
    let before = state.clone();
    let verdict = BatteryGuardian::check(&mut state);
    assert!(verdict.is_nominal());
    assert!(verdict.alerts().is_empty());
    assert_eq!(state, before);
}

#[test]
fn test_reposition_is_idempotent() {
    let mut f_cont = FlightController::default();
    let target = Vec2D::new(25.5, -8.0);
    let first = f_cont.reposition(target);
    let second = f_cont.reposition(target);
    assert_eq!(first, second);
    assert_eq!(first.position(), target);
}

#[test]
fn test_commands_return_fresh_status() {
    let mut f_cont = FlightController::default();
    assert_eq!(f_cont.re_altitude(150.0).altitude(), 150.0);
    let status = f_cont.re_speed(12.0);
    assert_eq!(status.speed(), 12.0);
    assert_eq!(status.altitude(), 150.0);
    assert_eq!(f_cont.consume_battery(30.0).battery_level(), 70.0);
    assert_eq!(f_cont.status(), StatusReporter::render_status(f_cont.state()));
}

#[test]
fn test_sensor_scenario_reroute() {
    let mut f_cont = FlightController::default();
    f_cont.re_speed(10.0);
    let outcome = f_cont.ingest_sensor_reading(SensorReading::new(7.0));
    let status = f_cont.status();
    assert_eq!(status.heading(), 45.0);
    assert_eq!(status.position(), Vec2D::new(10.0, 10.0));
    assert_eq!(status.speed(), 10.0);
    assert_eq!(status.altitude(), 0.0);
    assert_eq!(status.battery_level(), 100.0);
    let alerts = outcome.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].message().contains('7'));
    assert!(outcome.battery().is_nominal());
}

#[test]
fn test_sensor_runs_battery_check_after_stop() {
    let mut f_cont = FlightController::default();
    f_cont.reposition(Vec2D::new(50.0, 50.0));
    f_cont.re_altitude(30.0);
    f_cont.re_speed(6.0);
    f_cont.consume_battery(90.0);
    let outcome = f_cont.ingest_sensor_reading(SensorReading::new(2.0));
    assert!(matches!(outcome.obstacle(), ObstacleReaction::EmergencyStop { .. }));
    assert!(!outcome.battery().is_nominal());
    let kinds: Vec<AlertKind> = outcome.alerts().iter().map(|a| a.kind()).collect();
    assert_eq!(
        kinds,
        vec![AlertKind::TooClose, AlertKind::LowBattery, AlertKind::ReturnedToBase]
    );
    assert_eq!(f_cont.status().position(), Vec2D::zero());
    assert_eq!(f_cont.status().battery_level(), 10.0);
}

#[test]
fn test_alert_log_keeps_most_recent() {
    let mut f_cont = FlightController::new(VehicleState::new(), 2);
    f_cont.consume_battery(95.0);
    f_cont.ingest_sensor_reading(SensorReading::new(8.0));
    let recent = f_cont.recent_alerts();
    let kinds: Vec<AlertKind> = recent.iter().map(|a| a.kind()).collect();
    assert_eq!(kinds, vec![AlertKind::LowBattery, AlertKind::ReturnedToBase]);
}

#[test]
fn test_every_alert_kind_is_reachable() {
    let mut f_cont = FlightController::default();
    f_cont.ingest_sensor_reading(SensorReading::new(9.0));
    f_cont.ingest_sensor_reading(SensorReading::new(1.0));
    f_cont.consume_battery(85.0);
    f_cont.check_battery();
    let seen: Vec<AlertKind> = f_cont.recent_alerts().iter().map(|a| a.kind()).collect();
    for kind in AlertKind::iter() {
        assert!(seen.contains(&kind), "{kind} never raised");
    }
}

#[test]
fn test_flight_time_estimate() {
    let mut f_cont = FlightController::default();
    let idle = f_cont.flight_time();
    assert!(idle.is_unbounded());
    assert_eq!(idle.remaining_flight_time(), None);
    f_cont.re_speed(4.0);
    let moving = f_cont.flight_time();
    assert!(!moving.is_unbounded());
    assert_eq!(moving.remaining_flight_time(), Some(100.0 / (4.0 * 0.1)));
}
