//! Bearer-token identity extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use repolens_core::error::CoreError;

use crate::auth::jwt::validate_identity_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated identity extracted from a provider-issued Bearer token in
/// the `Authorization` header.
#[derive(Debug, Clone)]
pub struct Identity {
    /// The provider-side user id (from `claims.sub`).
    pub user_id: String,
    /// The account email, when the provider includes it.
    pub email: Option<String>,
}

/// Requires a valid identity token. Rejects with 401 otherwise.
///
/// ```ignore
/// async fn authed_only(RequireIdentity(identity): RequireIdentity) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %identity.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
pub struct RequireIdentity(pub Identity);

impl FromRequestParts<AppState> for RequireIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let secret = state.config.cloud.jwt_secret.as_deref().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Identity verification is not configured (CLOUD_JWT_SECRET is unset)".into(),
            ))
        })?;

        let claims = validate_identity_token(token, secret).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(RequireIdentity(Identity {
            user_id: claims.sub,
            email: claims.email,
        }))
    }
}
