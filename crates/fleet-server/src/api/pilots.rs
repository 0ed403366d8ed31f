//! Pilot API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use fleet_core::{Pilot, Reservation};

use crate::api::error::{fleet_error, not_found, ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PilotHoursRequest {
    pub flight_hours: u32,
}

/// POST /dron/pilots/:pilot_id/:name/:surname
pub async fn create_pilot(
    State(state): State<Arc<AppState>>,
    Path((pilot_id, name, surname)): Path<(String, String, String)>,
) -> Result<(StatusCode, Json<Pilot>), ApiError> {
    let pilot = state
        .add_pilot(&pilot_id, &name, &surname)
        .map_err(fleet_error)?;
    Ok((StatusCode::CREATED, Json(pilot)))
}

/// GET /dron/pilots/ordered
pub async fn list_pilots_ordered(State(state): State<Arc<AppState>>) -> Json<Vec<Pilot>> {
    Json(state.pilots_by_flight_hours())
}

pub async fn get_pilot(
    State(state): State<Arc<AppState>>,
    Path(pilot_id): Path<String>,
) -> Result<Json<Pilot>, ApiError> {
    state
        .get_pilot(&pilot_id)
        .map(Json)
        .ok_or_else(|| not_found(format!("pilot {} not found", pilot_id)))
}

pub async fn set_pilot_hours(
    State(state): State<Arc<AppState>>,
    Path(pilot_id): Path<String>,
    Json(req): Json<PilotHoursRequest>,
) -> Result<Json<Pilot>, ApiError> {
    state
        .set_pilot_flight_hours(&pilot_id, req.flight_hours)
        .map(Json)
        .map_err(fleet_error)
}

/// Reservations assigned to a pilot.
/// GET /dron/pilots/:pilot_id/reservations
pub async fn list_pilot_reservations(
    State(state): State<Arc<AppState>>,
    Path(pilot_id): Path<String>,
) -> Json<Vec<Reservation>> {
    Json(state.reservations_for_pilot(&pilot_id))
}
