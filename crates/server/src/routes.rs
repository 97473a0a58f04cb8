use std::sync::Arc;

use api_types::{BusStatus, StopInfo, TrainStatus};
use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::get;
use chrono::NaiveDateTime;
use livetrack_transit::{Simulator, StaticScheduleProvider, TrainNumber};
use tower_http::cors::{Any, CorsLayer};

use crate::response::{ApiError, bus_status, stop_list, train_status};

/// Shared, read-only state: the timetables and where "now" comes from
pub struct AppState {
    pub simulator: Simulator<StaticScheduleProvider>,
    pub clock: fn() -> NaiveDateTime,
}

/// Current local wall-clock time
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/train/{train_no}", get(get_train))
        .route("/bus/{plate}", get(get_bus))
        .route("/bus/{plate}/route", get(get_bus_route))
        .route("/health", get(health))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

async fn get_train(
    State(state): State<Arc<AppState>>,
    Path(train_no): Path<String>,
) -> Result<Json<TrainStatus>, ApiError> {
    let number = TrainNumber::new(train_no);
    let estimate = state.simulator.estimate_train(&number, (state.clock)())?;
    Ok(Json(train_status(&number, &estimate)))
}

async fn get_bus(
    State(state): State<Arc<AppState>>,
    Path(plate): Path<String>,
) -> Result<Json<BusStatus>, ApiError> {
    let estimate = state.simulator.estimate_bus(&plate, (state.clock)())?;
    Ok(Json(bus_status(&estimate)))
}

async fn get_bus_route(
    State(state): State<Arc<AppState>>,
    Path(plate): Path<String>,
) -> Result<Json<Vec<StopInfo>>, ApiError> {
    let schedule = state.simulator.bus_stops(&plate)?;
    Ok(Json(stop_list(&schedule)))
}

async fn health() -> &'static str {
    "OK"
}
