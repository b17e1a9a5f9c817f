//! Handlers for the entitlement record.
//!
//! Reads never trust the stored `is_pro` flag on its own: the response is
//! always the [`EntitlementState::effective`] view, so an expired
//! subscription gates as free tier even though the blob on disk still says
//! pro. Writes replace the record wholesale.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use chrono::Utc;
use repolens_core::entitlement::EntitlementState;
use repolens_core::error::CoreError;
use repolens_store::EntitlementRepo;

use crate::auth::RequireIdentity;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Where the forced-upgrade redirect lands: the application root, with a
/// query parameter the root view can special-case.
const FORCED_UPGRADE_REDIRECT: &str = "/?plan=forced";

/// GET /api/v1/entitlement
///
/// The current gating view. An absent record reads as the free-tier
/// default; an expired one reads as downgraded.
pub async fn get_entitlement(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<EntitlementState>>> {
    let stored = EntitlementRepo::load(&*state.store)?.unwrap_or_else(EntitlementState::free);

    Ok(Json(DataResponse {
        data: stored.effective(Utc::now()),
    }))
}

/// PUT /api/v1/entitlement
///
/// Replace the stored record with the posted one. No merge: what is posted
/// is what every later read sees.
pub async fn update_entitlement(
    State(state): State<AppState>,
    Json(input): Json<EntitlementState>,
) -> AppResult<Json<DataResponse<EntitlementState>>> {
    input.limits.validate()?;
    EntitlementRepo::save(&*state.store, &input)?;

    tracing::info!(
        is_pro = input.is_pro,
        status = ?input.subscription.status,
        "Entitlement record replaced",
    );

    Ok(Json(DataResponse { data: input }))
}

/// DELETE /api/v1/entitlement
///
/// Clear the stored record; later reads fall back to the free default.
pub async fn clear_entitlement(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    EntitlementRepo::clear(&*state.store)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/entitlement/override
///
/// The forced-upgrade escape hatch: writes a synthetic business-equivalent
/// record (full quota, 30-day expiry) and redirects to the application
/// root. Requires an authenticated identity and the `DEV_PLAN_OVERRIDE`
/// flag; without either, nothing is written and no redirect is issued.
///
/// The write sticks until the record is cleared or a real billing update
/// overwrites it -- there is no undo.
pub async fn force_upgrade(
    RequireIdentity(identity): RequireIdentity,
    State(state): State<AppState>,
) -> AppResult<Redirect> {
    if !state.config.dev_plan_override {
        return Err(CoreError::Forbidden(
            "Plan override is disabled (set DEV_PLAN_OVERRIDE to enable)".into(),
        )
        .into());
    }

    let forced = EntitlementState::forced_business(Utc::now());
    EntitlementRepo::save(&*state.store, &forced)?;

    tracing::info!(
        user_id = %identity.user_id,
        period_end = ?forced.subscription.current_period_end,
        "Forced business entitlement written",
    );

    Ok(Redirect::to(FORCED_UPGRADE_REDIRECT))
}
