use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use repolens_cloud::CloudError;
use repolens_core::error::CoreError;
use repolens_store::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds store/cloud variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `repolens_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence error from the key-value store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A transport error from the hosted backend.
    #[error("Cloud error: {0}")]
    Cloud(#[from] CloudError),

    /// The hosted backend is not configured.
    #[error("Cloud backend unavailable")]
    CloudUnavailable { missing: Vec<&'static str> },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} '{key}' not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            },

            // --- Store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "Local storage failed".to_string(),
                )
            }

            // --- Cloud errors ---
            AppError::Cloud(err) => {
                tracing::error!(error = %err, "Cloud request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "CLOUD_ERROR",
                    "The hosted backend did not answer".to_string(),
                )
            }
            AppError::CloudUnavailable { missing } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "CLOUD_UNAVAILABLE",
                format!("Cloud backend not configured; missing: {}", missing.join(", ")),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
