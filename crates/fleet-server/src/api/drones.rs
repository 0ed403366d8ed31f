//! Drone API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use fleet_core::{Drone, Reservation};

use crate::api::error::{fleet_error, not_found, ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DroneHoursRequest {
    pub flight_hours: f64,
}

/// Register a new drone.
/// POST /dron/drons/:drone_id/:name/:manufacturer/:model
pub async fn create_drone(
    State(state): State<Arc<AppState>>,
    Path((drone_id, name, manufacturer, model)): Path<(String, String, String, String)>,
) -> Result<(StatusCode, Json<Drone>), ApiError> {
    let drone = state
        .add_drone(&drone_id, &name, &manufacturer, &model)
        .map_err(fleet_error)?;
    Ok((StatusCode::CREATED, Json(drone)))
}

/// Drones ordered by flight hours, most flown first.
/// GET /dron/drons/ordered
pub async fn list_drones_ordered(State(state): State<Arc<AppState>>) -> Json<Vec<Drone>> {
    Json(state.drones_by_flight_hours())
}

pub async fn get_drone(
    State(state): State<Arc<AppState>>,
    Path(drone_id): Path<String>,
) -> Result<Json<Drone>, ApiError> {
    state
        .get_drone(&drone_id)
        .map(Json)
        .ok_or_else(|| not_found(format!("drone {} not found", drone_id)))
}

/// PUT /dron/drons/:drone_id/hours
pub async fn set_drone_hours(
    State(state): State<Arc<AppState>>,
    Path(drone_id): Path<String>,
    Json(req): Json<DroneHoursRequest>,
) -> Result<Json<Drone>, ApiError> {
    state
        .set_drone_flight_hours(&drone_id, req.flight_hours)
        .map(Json)
        .map_err(fleet_error)
}

/// Flight plans assigned to a drone.
/// GET /dron/drons/:drone_id/reservations
pub async fn list_drone_reservations(
    State(state): State<Arc<AppState>>,
    Path(drone_id): Path<String>,
) -> Json<Vec<Reservation>> {
    Json(state.reservations_for_drone(&drone_id))
}
