//! Integration tests for the auth provider proxy.
//!
//! The happy path talks to the real provider and is not exercised here;
//! these tests cover the local failure modes.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get, request};
use repolens_cloud::CloudConfig;

// ---------------------------------------------------------------------------
// Test: /auth/me without a bearer token is unauthorized
// ---------------------------------------------------------------------------

#[tokio::test]
async fn me_without_token_returns_401() {
    let app = common::default_test_app();
    let response = get(app, "/api/v1/auth/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Test: /auth/me without a configured backend answers 503 with the
// missing credential names
// ---------------------------------------------------------------------------

#[tokio::test]
async fn me_without_cloud_backend_returns_503() {
    let mut config = common::test_config();
    config.cloud = CloudConfig::default();
    let app = common::build_test_app(config, common::test_store());

    let response = request(
        app,
        Method::GET,
        "/api/v1/auth/me",
        None,
        Some("some-access-token"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CLOUD_UNAVAILABLE");
    assert!(json["error"].as_str().unwrap().contains("CLOUD_URL"));
}
