use std::sync::Arc;

use repolens_cloud::CloudHandle;
use repolens_store::KeyValueStore;

use crate::config::AppConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<AppConfig>,
    /// Key-value store holding the entitlement record and locale
    /// preference. May be the no-op fallback when the state directory is
    /// unusable.
    pub store: Arc<dyn KeyValueStore>,
    /// Whether `store` is durable (false for the no-op fallback).
    pub store_persistent: bool,
    /// Hosted backend handle, constructed once at startup.
    pub cloud: Arc<CloudHandle>,
}
