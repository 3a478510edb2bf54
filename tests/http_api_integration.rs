//! End-to-end HTTP tests for the `/tasks` resource.
//!
//! The router is exercised in-process via `tower::ServiceExt::oneshot`,
//! covering the full CRUD lifecycle, the per-field validation contract, and
//! the uniform error body shapes.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code indexes JSON bodies after shape assertions"
)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use mockable::DefaultClock;
use serde_json::{Value, json};
use std::sync::Arc;
use taskdesk::api::{AppState, router};
use taskdesk::task::adapters::memory::InMemoryTaskRepository;
use taskdesk::task::services::TaskService;
use tower::ServiceExt;

fn app() -> Router {
    let service = Arc::new(TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    ));
    router(AppState::new(service, "http://localhost"))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())),
        None => Request::builder().method(method).uri(uri).body(Body::empty()),
    }
    .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should be routed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let parsed = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };
    (status, parsed)
}

#[tokio::test(flavor = "multi_thread")]
async fn full_crud_lifecycle() {
    let app = app();

    // Create.
    let (status, body) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({
            "title": "Test Task",
            "description": "This is a test task",
            "deadline": "2026-08-26T10:00:00+00:00",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().expect("created id");
    assert_eq!(body["url"], json!(format!("http://localhost/tasks/{id}")));

    // Read back: the new task carries the default status.
    let (status, body) = send(&app, "GET", &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"].as_i64(), Some(id));
    assert_eq!(body["title"], json!("Test Task"));
    assert_eq!(body["description"], json!("This is a test task"));
    assert_eq!(body["status"], json!("PENDING"));

    // Update with the same fields but a new status.
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/tasks/{id}"),
        Some(json!({
            "title": "Test Task",
            "description": "This is a test task",
            "status": "IN_PROGRESS",
            "deadline": "2026-08-26T10:00:00+00:00",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("IN_PROGRESS"));
    assert_eq!(body["title"], json!("Test Task"));

    // Delete.
    let (status, body) = send(&app, "DELETE", &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    // Read after delete: uniform not-found body.
    let (status, body) = send(&app, "GET", &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], json!(404));
    assert_eq!(body["error"], json!("Not Found"));
    assert_eq!(
        body["message"],
        json!(format!("Task with id {id} not found."))
    );
    assert!(body["timestamp"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_returns_location_header_and_url() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/tasks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"title": "t", "description": "d"}).to_string(),
        ))
        .expect("request should build");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should be routed");

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .expect("location is ascii");
    assert_eq!(location, "/tasks/1");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_with_missing_fields_reports_every_violation() {
    let app = app();

    let (status, body) = send(&app, "POST", "/tasks", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Validation failed"));
    assert_eq!(body["status"], json!(400));
    assert_eq!(body["errors"]["title"], json!("must not be null"));
    assert_eq!(body["errors"]["description"], json!("must not be null"));

    // Nothing was persisted.
    let (status, body) = send(&app, "GET", "/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_with_blank_title_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({"title": "  ", "description": "d"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["title"], json!("must not be blank"));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_with_malformed_deadline_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({"title": "t", "description": "d", "deadline": "tomorrow"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["deadline"],
        json!("must be an RFC 3339 timestamp with offset")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_tasks_in_creation_order() {
    let app = app();
    for title in ["first", "second"] {
        let (status, _) = send(
            &app,
            "POST",
            "/tasks",
            Some(json!({"title": title, "description": "d"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/tasks", None).await;

    assert_eq!(status, StatusCode::OK);
    let listing = body.as_array().expect("array body");
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0]["title"], json!("first"));
    assert_eq!(listing[1]["title"], json!("second"));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_with_unknown_status_token_is_rejected() {
    let app = app();
    let (_, created) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({"title": "t", "description": "d"})),
    )
    .await;
    let id = created["id"].as_i64().expect("created id");

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/tasks/{id}"),
        Some(json!({"title": "t", "description": "d", "status": "SHIPPED"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["status"],
        json!("must be one of PENDING, IN_PROGRESS, DONE, CANCELLED")
    );

    // The stored task is untouched.
    let (_, body) = send(&app, "GET", &format!("/tasks/{id}"), None).await;
    assert_eq!(body["status"], json!("PENDING"));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_omitting_status_resets_it_to_the_wire_default() {
    let app = app();
    let (_, created) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({"title": "t", "description": "d"})),
    )
    .await;
    let id = created["id"].as_i64().expect("created id");
    send(
        &app,
        "PUT",
        &format!("/tasks/{id}"),
        Some(json!({"title": "t", "description": "d", "status": "DONE"})),
    )
    .await;

    // Full replace: omitting status falls back to PENDING rather than
    // preserving DONE.
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/tasks/{id}"),
        Some(json!({"title": "t", "description": "d"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("PENDING"));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_id_reports_not_found() {
    let app = app();

    let (status, body) = send(
        &app,
        "PUT",
        "/tasks/99",
        Some(json!({"title": "t", "description": "d"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Task with id 99 not found."));

    // The failed update must not create a record.
    let (_, listing) = send(&app, "GET", "/tasks", None).await;
    assert_eq!(listing, json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_of_unknown_id_reports_not_found() {
    let app = app();

    let (status, body) = send(&app, "DELETE", "/tasks/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], json!(404));
    assert_eq!(body["message"], json!("Task with id 99 not found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn repeat_delete_reports_not_found() {
    let app = app();
    let (_, created) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({"title": "t", "description": "d"})),
    )
    .await;
    let id = created["id"].as_i64().expect("created id");

    let (first, _) = send(&app, "DELETE", &format!("/tasks/{id}"), None).await;
    let (second, body) = send(&app, "DELETE", &format!("/tasks/{id}"), None).await;

    assert_eq!(first, StatusCode::NO_CONTENT);
    assert_eq!(second, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        json!(format!("Task with id {id} not found."))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn deadline_round_trips_with_its_offset() {
    let app = app();

    let (_, created) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({
            "title": "t",
            "description": "d",
            "deadline": "2026-08-26T10:00:00+02:00",
        })),
    )
    .await;
    let id = created["id"].as_i64().expect("created id");

    let (status, body) = send(&app, "GET", &format!("/tasks/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    let deadline = body["deadline"].as_str().expect("deadline string");
    let parsed = chrono::DateTime::parse_from_rfc3339(deadline).expect("deadline parses");
    assert_eq!(
        parsed,
        chrono::DateTime::parse_from_rfc3339("2026-08-26T10:00:00+02:00").expect("expected value")
    );
}
