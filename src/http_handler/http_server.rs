//! JSON over HTTP shell around the [`FlightController`](crate::flight_control::FlightController).
//!
//! - GET  /health          - Health check
//! - GET  /status          - Current status snapshot
//! - POST /position        - Reposition the vehicle
//! - POST /altitude        - Change altitude
//! - POST /speed           - Change speed
//! - GET  /battery         - Run the battery guardian (`null` when nominal)
//! - POST /battery/consume - Drain the battery
//! - POST /sensor          - Ingest a proximity reading
//! - GET  /flight-time     - Remaining flight time estimate
//! - GET  /alerts          - Recently raised alerts

use super::http_request::{
    altitude_post::AltitudeRequest, battery_consume_post::BatteryConsumeRequest,
    position_post::PositionRequest, request_common::JSONBodyHTTPRequestType,
    speed_post::SpeedRequest,
};
use super::http_response::{health::HealthResponse, response_common::ServerError};
use crate::flight_control::{
    Alert, BatteryVerdict, FlightTimeEstimate, SensorOutcome, SensorReading, StatusSnapshot,
};
use crate::keychain::Keychain;
use crate::{event, info};
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    routing::{get, post},
};
use std::net::SocketAddr;
use tokio::net::TcpListener;

async fn health_check() -> Json<HealthResponse> { Json(HealthResponse::healthy()) }

async fn get_status(State(k): State<Keychain>) -> Json<StatusSnapshot> {
    event!("GET /status");
    Json(k.f_cont().read().await.status())
}

async fn post_position(State(k): State<Keychain>, body: Bytes) -> Json<StatusSnapshot> {
    let req = PositionRequest::decode(&body);
    event!("POST /position {req:?}");
    Json(k.f_cont().write().await.reposition(req.position()))
}

async fn post_altitude(State(k): State<Keychain>, body: Bytes) -> Json<StatusSnapshot> {
    let req = AltitudeRequest::decode(&body);
    event!("POST /altitude {req:?}");
    Json(k.f_cont().write().await.re_altitude(req.altitude()))
}

async fn post_speed(State(k): State<Keychain>, body: Bytes) -> Json<StatusSnapshot> {
    let req = SpeedRequest::decode(&body);
    event!("POST /speed {req:?}");
    Json(k.f_cont().write().await.re_speed(req.speed()))
}

async fn get_battery(State(k): State<Keychain>) -> Json<BatteryVerdict> {
    event!("GET /battery");
    Json(k.f_cont().write().await.check_battery())
}

async fn post_battery_consume(State(k): State<Keychain>, body: Bytes) -> Json<StatusSnapshot> {
    let req = BatteryConsumeRequest::decode(&body);
    event!("POST /battery/consume {req:?}");
    Json(k.f_cont().write().await.consume_battery(req.amount()))
}

async fn post_sensor(State(k): State<Keychain>, body: Bytes) -> Json<SensorOutcome> {
    let reading = SensorReading::decode(&body);
    event!("POST /sensor {reading:?}");
    Json(k.f_cont().write().await.ingest_sensor_reading(reading))
}

async fn get_flight_time(State(k): State<Keychain>) -> Json<FlightTimeEstimate> {
    event!("GET /flight-time");
    Json(k.f_cont().read().await.flight_time())
}

async fn get_alerts(State(k): State<Keychain>) -> Json<Vec<Alert>> {
    event!("GET /alerts");
    Json(k.f_cont().read().await.recent_alerts())
}

/// Creates the router with all vehicle endpoints.
pub fn create_router(keychain: Keychain) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/status", get(get_status))
        .route("/position", post(post_position))
        .route("/altitude", post(post_altitude))
        .route("/speed", post(post_speed))
        .route("/battery", get(get_battery))
        .route("/battery/consume", post(post_battery_consume))
        .route("/sensor", post(post_sensor))
        .route("/flight-time", get(get_flight_time))
        .route("/alerts", get(get_alerts))
        .with_state(keychain)
}

/// Binds a listener on `addr`, which must be a literal socket address.
pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    let addr: SocketAddr = addr.parse()?;
    Ok(TcpListener::bind(addr).await?)
}

/// Serves requests until the keychain's shutdown token is cancelled.
pub async fn serve(keychain: Keychain, listener: TcpListener) -> Result<(), ServerError> {
    let shutdown = keychain.shutdown();
    let router = create_router(keychain);
    info!("HTTP server listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            info!("HTTP server shutting down");
        })
        .await?;
    Ok(())
}
