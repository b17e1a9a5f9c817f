use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the key-value store is durable (false on the no-op fallback).
    pub store_persistent: bool,
    /// Whether the hosted backend client is configured.
    pub cloud_ready: bool,
}

/// GET /health -- returns service, store, and cloud status.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let cloud_ready = state.cloud.client().is_some();

    let status = if state.store_persistent && cloud_ready {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store_persistent: state.store_persistent,
        cloud_ready,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
