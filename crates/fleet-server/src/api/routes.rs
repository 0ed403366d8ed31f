//! REST API routes.

use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;

use fleet_core::FleetSummary;

use crate::api::{drones, maintenance, pilots, reservations};
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    let drone_routes = Router::new()
        .route("/dron/drons/ordered", get(drones::list_drones_ordered))
        .route("/dron/drons/:drone_id", get(drones::get_drone))
        .route("/dron/drons/:drone_id/hours", put(drones::set_drone_hours))
        .route(
            "/dron/drons/:drone_id/reservations",
            get(drones::list_drone_reservations),
        )
        .route(
            "/dron/drons/:drone_id/maintenance",
            post(maintenance::store_drone),
        )
        .route(
            "/dron/drons/:drone_id/:name/:manufacturer/:model",
            post(drones::create_drone),
        );

    let pilot_routes = Router::new()
        .route("/dron/pilots/ordered", get(pilots::list_pilots_ordered))
        .route("/dron/pilots/:pilot_id", get(pilots::get_pilot))
        .route("/dron/pilots/:pilot_id/hours", put(pilots::set_pilot_hours))
        .route(
            "/dron/pilots/:pilot_id/reservations",
            get(pilots::list_pilot_reservations),
        )
        .route(
            "/dron/pilots/:pilot_id/:name/:surname",
            post(pilots::create_pilot),
        );

    let maintenance_routes = Router::new()
        .route("/dron/maintenance", get(maintenance::list_queue))
        .route("/dron/maintenance/repair", post(maintenance::repair_next));

    let reservation_routes = Router::new().route(
        "/dron/reservations",
        post(reservations::create_reservation).get(reservations::list_reservations),
    );

    Router::new()
        .route("/dron/summary", get(summary))
        .merge(drone_routes)
        .merge(pilot_routes)
        .merge(maintenance_routes)
        .merge(reservation_routes)
}

async fn summary(State(state): State<Arc<AppState>>) -> Json<FleetSummary> {
    Json(state.summary())
}
