//! Conversions from estimates to API bodies.

use api_types::{BusStatus, ErrorBody, Motion, StopInfo, TrainStatus};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use livetrack_transit::{
    EstimateState, PositionEstimate, Schedule, TrainNumber, TransitError, VehicleEstimate,
};
use tracing::error;

fn motion(position: &PositionEstimate) -> Motion {
    match &position.state {
        EstimateState::InTransit(leg) => Motion::InTransit {
            from: leg.from.to_string(),
            to: leg.to.to_string(),
            progress: leg.progress.percent(),
        },
        EstimateState::Idle => Motion::Idle {
            status: position.kind.idle_label().to_owned(),
        },
    }
}

pub fn train_status(number: &TrainNumber, estimate: &VehicleEstimate) -> TrainStatus {
    TrainStatus {
        train_no: number.to_string(),
        train_name: estimate.vehicle.name().to_owned(),
        motion: motion(&estimate.position),
        lat: estimate.position.lat(),
        lng: estimate.position.lng(),
    }
}

pub fn bus_status(estimate: &VehicleEstimate) -> BusStatus {
    let vehicle = &estimate.vehicle;
    BusStatus {
        bus_name: vehicle.name().to_owned(),
        number_plate: vehicle
            .number_plate()
            .map(ToString::to_string)
            .unwrap_or_default(),
        bus_type: vehicle.bus_type().map(ToOwned::to_owned),
        motion: motion(&estimate.position),
        lat: estimate.position.lat(),
        lng: estimate.position.lng(),
    }
}

pub fn stop_list(schedule: &Schedule) -> Vec<StopInfo> {
    schedule
        .waypoints()
        .iter()
        .map(|waypoint| StopInfo {
            name: waypoint.name.to_string(),
            lat: waypoint.lat(),
            lng: waypoint.lng(),
            time: waypoint.time_out.to_string(),
        })
        .collect()
}

/// Lookup failures rendered as `{"error": ...}` with a matching status code
#[derive(Debug)]
pub struct ApiError(pub TransitError);

impl From<TransitError> for ApiError {
    fn from(err: TransitError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            TransitError::TrainNotFound(_) => (StatusCode::NOT_FOUND, "Train not found"),
            TransitError::BusNotFound(_) => (StatusCode::NOT_FOUND, "Bus not found"),
            TransitError::InsufficientStops { .. } => {
                (StatusCode::BAD_REQUEST, "Not enough stops to simulate")
            }
            other => {
                error!("unexpected error while answering a query: {other}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
