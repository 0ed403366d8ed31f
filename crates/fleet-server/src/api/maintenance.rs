//! Maintenance warehouse endpoints.
//!
//! Drones are repaired in the order they were stored.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use fleet_core::Drone;

use crate::api::error::{fleet_error, ApiError};
use crate::state::AppState;

/// Store a drone in the warehouse.
/// POST /dron/drons/:drone_id/maintenance
pub async fn store_drone(
    State(state): State<Arc<AppState>>,
    Path(drone_id): Path<String>,
) -> Result<(StatusCode, Json<Drone>), ApiError> {
    let drone = state.store_in_maintenance(&drone_id).map_err(fleet_error)?;
    Ok((StatusCode::ACCEPTED, Json(drone)))
}

/// Repair the drone nearest the warehouse door.
/// POST /dron/maintenance/repair
pub async fn repair_next(State(state): State<Arc<AppState>>) -> Result<Json<Drone>, ApiError> {
    state.repair_next().map(Json).map_err(fleet_error)
}

/// GET /dron/maintenance
pub async fn list_queue(State(state): State<Arc<AppState>>) -> Json<Vec<Drone>> {
    Json(state.maintenance_queue())
}
