//! Handlers proxying the hosted auth provider.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use repolens_cloud::{CloudHandle, CloudUser};
use repolens_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/auth/me
///
/// Resolve the caller's bearer token against the hosted auth provider and
/// return the account it belongs to. Answers 503 when the provider is not
/// configured.
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<DataResponse<CloudUser>>> {
    let token = bearer_token(&headers)?;

    let client = match &*state.cloud {
        CloudHandle::Ready(client) => client,
        CloudHandle::Unavailable { missing } => {
            return Err(AppError::CloudUnavailable {
                missing: missing.clone(),
            })
        }
    };

    let user = client.fetch_user(token).await?.ok_or_else(|| {
        CoreError::Unauthorized("The auth provider rejected the token".into())
    })?;

    Ok(Json(DataResponse { data: user }))
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })
}
