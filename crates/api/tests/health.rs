//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use common::{body_json, build_test_app, get, test_config, unreachable_pool};
use sqlx::PgPool;

/// A watchman that only accepts POST; the health probe's GET still gets an
/// HTTP answer.
async fn live_watchman() -> String {
    let router = Router::new().route("/check", post(|| async { "{}" }));
    common::serve_watchman(router).await
}

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = build_test_app(pool, test_config(&live_watchman().await));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["watchman_reachable"], true);
}

// ---------------------------------------------------------------------------
// Test: unreachable database reports degraded instead of failing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_reports_degraded_without_database() {
    let app = build_test_app(unreachable_pool(), test_config(&live_watchman().await));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
    assert_eq!(json["watchman_reachable"], true);
}

// ---------------------------------------------------------------------------
// Test: unreachable watchman reports degraded
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_reports_degraded_without_watchman(pool: PgPool) {
    let app = build_test_app(pool, test_config(&common::dead_watchman_url().await));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["watchman_reachable"], false);
}

// ---------------------------------------------------------------------------
// Test: unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app(unreachable_pool(), test_config("http://127.0.0.1:1/check"));
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app(unreachable_pool(), test_config("http://127.0.0.1:1/check"));
    let response = get(app, "/run_task").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}
