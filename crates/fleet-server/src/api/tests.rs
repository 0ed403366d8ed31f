use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::{api, config::Config, seed::seed_demo_fleet, state::AppState};

fn app_with(config: Config) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(config));
    let app = api::app(state.clone());
    (app, state)
}

fn setup_app() -> (Router, Arc<AppState>) {
    app_with(Config {
        seed_demo_data: false,
        ..Config::default()
    })
}

fn seeded_app() -> (Router, Arc<AppState>) {
    let (app, state) = app_with(Config::default());
    assert!(seed_demo_fleet(&state).expect("seed fleet"));
    (app, state)
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

fn reservation_body(drone_id: &str, pilot_id: &str, start: &str, hours: u32) -> Value {
    json!({
        "drone_id": drone_id,
        "pilot_id": pilot_id,
        "start_time": start,
        "duration_hours": hours,
        "start_position": { "lat": 40.0, "lon": -3.0 },
        "destination_position": { "lat": 41.0, "lon": -2.0 }
    })
}

#[tokio::test]
async fn create_drone_returns_created() {
    let (app, state) = setup_app();

    let res = send(&app, "POST", "/dron/drons/D1/Alpha/Fab1/Mod1", None).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = read_json(res).await;
    assert_eq!(body["drone_id"], "D1");
    assert_eq!(body["manufacturer"], "Fab1");
    assert_eq!(body["flight_hours"], 0.0);
    assert_eq!(body["in_maintenance"], false);
    assert_eq!(state.drone_count(), 1);

    let dup = send(&app, "POST", "/dron/drons/D1/Other/Fab/Mod", None).await;
    assert_eq!(dup.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_pilot_and_fetch() {
    let (app, _state) = setup_app();

    let res = send(&app, "POST", "/dron/pilots/P1/Juan/Perez", None).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = send(&app, "GET", "/dron/pilots/P1", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["surname"], "Perez");

    let missing = send(&app, "GET", "/dron/pilots/P9", None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ordered_listings_follow_flight_hours() {
    let (app, _state) = seeded_app();

    let res = send(&app, "GET", "/dron/drons/ordered", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let drones = read_json(res).await;
    let ids: Vec<&str> = drones
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["drone_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["4", "3", "2", "1"]);

    let res = send(&app, "PUT", "/dron/pilots/4/hours", Some(json!({ "flight_hours": 100 }))).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = send(&app, "GET", "/dron/pilots/ordered", None).await;
    let pilots = read_json(res).await;
    assert_eq!(pilots[0]["pilot_id"], "4");
    assert_eq!(pilots[0]["flight_hours"], 100);
}

#[tokio::test]
async fn maintenance_queue_is_fifo() {
    let (app, _state) = seeded_app();

    let res = send(&app, "POST", "/dron/drons/2/maintenance", None).await;
    assert_eq!(res.status(), StatusCode::ACCEPTED);
    assert_eq!(read_json(res).await["in_maintenance"], true);
    send(&app, "POST", "/dron/drons/3/maintenance", None).await;

    let again = send(&app, "POST", "/dron/drons/2/maintenance", None).await;
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let queue = read_json(send(&app, "GET", "/dron/maintenance", None).await).await;
    assert_eq!(queue.as_array().unwrap().len(), 2);
    assert_eq!(queue[0]["drone_id"], "2");

    let repaired = send(&app, "POST", "/dron/maintenance/repair", None).await;
    assert_eq!(repaired.status(), StatusCode::OK);
    let repaired = read_json(repaired).await;
    assert_eq!(repaired["drone_id"], "2");
    assert_eq!(repaired["in_maintenance"], false);

    send(&app, "POST", "/dron/maintenance/repair", None).await;
    let empty = send(&app, "POST", "/dron/maintenance/repair", None).await;
    assert_eq!(empty.status(), StatusCode::NOT_FOUND);

    let unknown = send(&app, "POST", "/dron/drons/99/maintenance", None).await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reservation_lifecycle() {
    let (app, _state) = seeded_app();

    let res = send(
        &app,
        "POST",
        "/dron/reservations",
        Some(reservation_body("1", "2", "2026-03-01T10:00:00Z", 2)),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = read_json(res).await;
    assert_eq!(created["reservation_id"], "RES-0001");

    // Same drone, overlapping window
    let overlap = send(
        &app,
        "POST",
        "/dron/reservations",
        Some(reservation_body("1", "3", "2026-03-01T11:00:00Z", 1)),
    )
    .await;
    assert_eq!(overlap.status(), StatusCode::CONFLICT);

    let by_pilot = read_json(send(&app, "GET", "/dron/pilots/2/reservations", None).await).await;
    assert_eq!(by_pilot.as_array().unwrap().len(), 1);
    assert_eq!(by_pilot[0]["drone_id"], "1");

    let by_drone = read_json(send(&app, "GET", "/dron/drons/1/reservations", None).await).await;
    assert_eq!(by_drone[0]["pilot_id"], "2");

    let summary = read_json(send(&app, "GET", "/dron/summary", None).await).await;
    assert_eq!(summary["reservations"], 1);
}

#[tokio::test]
async fn reservation_rejections() {
    let (app, _state) = seeded_app();

    let unknown_pilot = send(
        &app,
        "POST",
        "/dron/reservations",
        Some(reservation_body("1", "99", "2026-03-01T10:00:00Z", 1)),
    )
    .await;
    assert_eq!(unknown_pilot.status(), StatusCode::NOT_FOUND);

    let zero = send(
        &app,
        "POST",
        "/dron/reservations",
        Some(reservation_body("1", "1", "2026-03-01T10:00:00Z", 0)),
    )
    .await;
    assert_eq!(zero.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(zero).await["field"], "duration_hours");

    send(&app, "POST", "/dron/drons/4/maintenance", None).await;
    let grounded = send(
        &app,
        "POST",
        "/dron/reservations",
        Some(reservation_body("4", "1", "2026-03-01T10:00:00Z", 1)),
    )
    .await;
    assert_eq!(grounded.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn shared_pilot_overlap_conflicts() {
    let (app, _state) = seeded_app();

    let first = send(
        &app,
        "POST",
        "/dron/reservations",
        Some(reservation_body("1", "2", "2026-03-01T10:00:00Z", 2)),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    // Different drone, same pilot
    let clash = send(
        &app,
        "POST",
        "/dron/reservations",
        Some(reservation_body("3", "2", "2026-03-01T09:00:00Z", 2)),
    )
    .await;
    assert_eq!(clash.status(), StatusCode::CONFLICT);

    // Starts exactly when the first one ends
    let next = send(
        &app,
        "POST",
        "/dron/reservations",
        Some(reservation_body("3", "2", "2026-03-01T12:00:00Z", 1)),
    )
    .await;
    assert_eq!(next.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn invalid_positions_name_the_field() {
    let (app, _state) = seeded_app();

    let mut body = reservation_body("1", "1", "2026-03-01T10:00:00Z", 1);
    body["start_position"] = json!({ "lat": 91.0, "lon": 0.0 });
    let res = send(&app, "POST", "/dron/reservations", Some(body)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(res).await["field"], "start_position");

    let mut body = reservation_body("1", "1", "2026-03-01T10:00:00Z", 1);
    body["destination_position"] = json!({ "lat": 0.0, "lon": -181.0 });
    let res = send(&app, "POST", "/dron/reservations", Some(body)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(res).await["field"], "destination_position");
}

#[tokio::test]
async fn huge_duration_is_a_bad_request() {
    let (app, state) = seeded_app();

    let res = send(
        &app,
        "POST",
        "/dron/reservations",
        Some(reservation_body("1", "1", "2026-03-01T10:00:00Z", u32::MAX)),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(res).await["field"], "duration_hours");
    assert!(state.get_reservations().is_empty());
}

#[tokio::test]
async fn negative_drone_hours_rejected() {
    let (app, state) = seeded_app();

    let res = send(&app, "PUT", "/dron/drons/1/hours", Some(json!({ "flight_hours": -5.0 }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(res).await["field"], "flight_hours");
    assert_eq!(state.get_drone("1").unwrap().flight_hours, 20.0);

    let res = send(&app, "PUT", "/dron/drons/99/hours", Some(json!({ "flight_hours": 5.0 }))).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn request_id_is_echoed() {
    let (app, _state) = setup_app();

    let req = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-request-id"], "req-42");

    let res = send(&app, "GET", "/health", None).await;
    assert!(res.headers().contains_key("x-request-id"));
}
