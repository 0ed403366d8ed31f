//! Flight plan reservation endpoints.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use fleet_core::{Reservation, ReservationRequest};

use crate::api::error::{fleet_error, ApiError};
use crate::state::AppState;

/// Book a drone and pilot for a flight plan.
/// POST /dron/reservations
pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReservationRequest>,
) -> Result<(StatusCode, Json<Reservation>), ApiError> {
    let reservation = state.add_reservation(request).map_err(fleet_error)?;
    tracing::info!(
        "Reserved drone {} for pilot {} ({})",
        reservation.drone_id,
        reservation.pilot_id,
        reservation.reservation_id
    );
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /dron/reservations
pub async fn list_reservations(State(state): State<Arc<AppState>>) -> Json<Vec<Reservation>> {
    Json(state.get_reservations())
}
