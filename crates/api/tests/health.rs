//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::atomic::Ordering;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, default_test_app, get_anonymous, send};

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let test_app = default_test_app();
    let response = get_anonymous(test_app.app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: an unreachable database reports degraded, still 200
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_reports_degraded_database() {
    let test_app = default_test_app();
    test_app.store.fail_database.store(true, Ordering::SeqCst);

    let response = get_anonymous(test_app.app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let test_app = default_test_app();
    let response = get_anonymous(test_app.app(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let test_app = default_test_app();
    let response = get_anonymous(test_app.app(), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // A generated UUID is 36 characters with hyphens.
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: a caller-supplied x-request-id is echoed back
// ---------------------------------------------------------------------------

#[tokio::test]
async fn caller_request_id_is_propagated() {
    let test_app = default_test_app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header("x-request-id", "booking-trace-1")
        .body(Body::empty())
        .unwrap();

    let response = send(test_app.app(), request).await;

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "booking-trace-1"
    );
}
