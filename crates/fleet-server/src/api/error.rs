//! Translation of facade errors into HTTP responses.

use axum::{http::StatusCode, Json};
use fleet_core::FleetError;
use serde_json::Value;

pub type ApiError = (StatusCode, Json<Value>);

pub fn status_for(err: &FleetError) -> StatusCode {
    match err {
        FleetError::DroneNotFound(_)
        | FleetError::PilotNotFound(_)
        | FleetError::MaintenanceQueueEmpty => StatusCode::NOT_FOUND,
        FleetError::DuplicateDrone(_)
        | FleetError::DuplicatePilot(_)
        | FleetError::DroneInMaintenance(_)
        | FleetError::AlreadyInMaintenance(_)
        | FleetError::ReservationOverlap { .. } => StatusCode::CONFLICT,
        FleetError::Validation { .. } => StatusCode::BAD_REQUEST,
    }
}

pub fn fleet_error(err: FleetError) -> ApiError {
    let status = status_for(&err);
    let mut payload = serde_json::json!({ "error": err.to_string() });
    if let Some(field) = err.field() {
        payload["field"] = Value::String(field.to_string());
    }
    (status, Json(payload))
}

pub fn not_found(message: String) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": message })),
    )
}
