use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tracing::Level;
use booking_client::{config::ClientConfig, BookingApi, HttpClient};
use booking_core::{
    errors::BookingError,
    models::{
        booking::{AvailabilityQuery, Booking, BookingQuery, BookingStatus},
        resource::ResourceQuery,
    },
};

/// Query strings seen by the stub backend, in request order.
type Seen = Arc<Mutex<Vec<String>>>;

fn booking_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "resourceId": 1,
        "customerName": "Test User",
        "customerEmail": "test@example.com",
        "startTime": "2026-01-29T10:00:00",
        "endTime": "2026-01-29T11:00:00",
        "status": status,
    })
}

async fn list_resources(State(seen): State<Seen>, RawQuery(query): RawQuery) -> Json<Value> {
    seen.lock().unwrap().push(query.unwrap_or_default());
    Json(json!([
        { "id": 1, "name": "Room A", "capacity": 10, "available": true, "description": "Projector" },
        { "id": 2, "name": "Room B", "capacity": 4, "available": false },
    ]))
}

async fn list_bookings(State(seen): State<Seen>, RawQuery(query): RawQuery) -> Json<Value> {
    seen.lock().unwrap().push(query.unwrap_or_default());
    Json(json!([booking_json(1, "CONFIRMED"), booking_json(2, "CANCELLED")]))
}

async fn availability(State(seen): State<Seen>, RawQuery(query): RawQuery) -> Json<Value> {
    let query = query.unwrap_or_default();
    let available = !query.contains("resourceId=2");
    seen.lock().unwrap().push(query);
    Json(json!({ "available": available }))
}

async fn create_booking(Json(mut body): Json<Value>) -> impl IntoResponse {
    if body["customerName"] == "conflict" {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "error": "Time slot is already booked" })),
        );
    }
    body["id"] = json!(42);
    (StatusCode::CREATED, Json(body))
}

async fn get_booking(Path(id): Path<i64>) -> impl IntoResponse {
    if id == 404 {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(booking_json(id, "PENDING")).into_response()
}

async fn update_booking(Path(id): Path<i64>, Json(mut body): Json<Value>) -> Json<Value> {
    body["id"] = json!(id);
    Json(body)
}

async fn delete_booking(Path(id): Path<i64>) -> StatusCode {
    if id == 500 {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn cancel_booking(Path(id): Path<i64>) -> Json<Value> {
    Json(booking_json(id, "CANCELLED"))
}

async fn notifications() -> Json<Value> {
    Json(json!([
        { "id": 1, "type": "BOOKING_CREATED", "title": "Booked", "startTime": "2026-01-29T10:00:00" },
    ]))
}

async fn notifications_for_booking(Path(id): Path<i64>) -> Json<Value> {
    Json(json!([{ "id": 5, "bookingId": id, "title": "Cancelled" }]))
}

/// Starts the stub backend on an ephemeral port and returns a client for it.
async fn spawn_backend() -> (HttpClient, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/api/resources", get(list_resources))
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route("/api/bookings/available", get(availability))
        .route(
            "/api/bookings/:id",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
        .route("/api/bookings/:id/cancel", patch(cancel_booking))
        .route("/api/notifications", get(notifications))
        .route("/api/notifications/booking/:id", get(notifications_for_booking))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ClientConfig::new(format!("http://{}/api/", addr), Level::INFO, Some(5));
    (HttpClient::new(config).unwrap(), seen)
}

fn new_booking(customer_name: &str) -> Booking {
    let day = NaiveDate::from_ymd_opt(2026, 1, 29).unwrap();
    Booking {
        id: None,
        resource_id: 1,
        customer_name: customer_name.to_string(),
        customer_email: "test@example.com".to_string(),
        start_time: day.and_hms_opt(10, 0, 0).unwrap(),
        end_time: day.and_hms_opt(11, 0, 0).unwrap(),
        status: BookingStatus::Confirmed,
        notes: None,
        created_at: None,
        updated_at: None,
    }
}

#[tokio::test]
async fn test_list_resources_sends_query() {
    let (client, seen) = spawn_backend().await;

    let resources = client
        .list_resources(&ResourceQuery::available_only())
        .await
        .unwrap();
    client.list_resources(&ResourceQuery::search("Room")).await.unwrap();
    client.list_resources(&ResourceQuery::default()).await.unwrap();

    assert_eq!(resources.len(), 2);
    assert_eq!(resources[0].description.as_deref(), Some("Projector"));
    assert_eq!(resources[1].description, None);
    assert_eq!(
        *seen.lock().unwrap(),
        vec!["available=true".to_string(), "search=Room".to_string(), String::new()]
    );
}

#[tokio::test]
async fn test_list_bookings_with_status_filter() {
    let (client, seen) = spawn_backend().await;

    let bookings = client
        .list_bookings(&BookingQuery::with_status(Some(BookingStatus::Cancelled)))
        .await
        .unwrap();

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[1].status, BookingStatus::Cancelled);
    assert_eq!(*seen.lock().unwrap(), vec!["status=CANCELLED".to_string()]);
}

#[tokio::test]
async fn test_check_availability() {
    let (client, seen) = spawn_backend().await;
    let booking = new_booking("Test User");

    let free = client
        .check_availability(&AvailabilityQuery {
            resource_id: 1,
            start: booking.start_time,
            end: booking.end_time,
        })
        .await
        .unwrap();
    let taken = client
        .check_availability(&AvailabilityQuery {
            resource_id: 2,
            start: booking.start_time,
            end: booking.end_time,
        })
        .await
        .unwrap();

    assert!(free.available);
    assert!(!taken.available);
    assert_eq!(
        seen.lock().unwrap()[0],
        "resourceId=1&start=2026-01-29T10%3A00%3A00&end=2026-01-29T11%3A00%3A00"
    );
}

#[tokio::test]
async fn test_create_booking() {
    let (client, _) = spawn_backend().await;

    let created = client.create_booking(&new_booking("Test User")).await.unwrap();

    assert_eq!(created.id, Some(42));
    assert_eq!(created.customer_name, "Test User");
}

#[tokio::test]
async fn test_create_booking_conflict_surfaces_backend_message() {
    let (client, _) = spawn_backend().await;

    let err = client.create_booking(&new_booking("conflict")).await.unwrap_err();

    assert!(matches!(err, BookingError::Api { status: 409, .. }));
    assert_eq!(err.backend_message(), Some("Time slot is already booked"));
}

#[tokio::test]
async fn test_get_update_cancel_delete_booking() {
    let (client, _) = spawn_backend().await;

    let booking = client.get_booking(3).await.unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);

    let updated = client.update_booking(3, &new_booking("Renamed")).await.unwrap();
    assert_eq!(updated.id, Some(3));
    assert_eq!(updated.customer_name, "Renamed");

    let cancelled = client.cancel_booking(3).await.unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    client.delete_booking(3).await.unwrap();
}

#[tokio::test]
async fn test_missing_booking_is_not_found() {
    let (client, _) = spawn_backend().await;

    let err = client.get_booking(404).await.unwrap_err();

    assert!(matches!(err, BookingError::NotFound(_)));
    assert_eq!(err.backend_message(), None);
}

#[tokio::test]
async fn test_delete_failure_is_api_error() {
    let (client, _) = spawn_backend().await;

    let err = client.delete_booking(500).await.unwrap_err();

    assert!(matches!(err, BookingError::Api { status: 500, message: None }));
}

#[tokio::test]
async fn test_notifications() {
    let (client, _) = spawn_backend().await;

    let all = client.list_notifications().await.unwrap();
    let for_booking = client.notifications_for_booking(8).await.unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].kind.as_deref(), Some("BOOKING_CREATED"));
    assert_eq!(for_booking[0].booking_id, Some(8));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let config = ClientConfig::new("http://127.0.0.1:1/api", Level::INFO, Some(1));
    let client = HttpClient::new(config).unwrap();

    let err = client.list_notifications().await.unwrap_err();

    assert!(matches!(err, BookingError::Transport(_)));
}
