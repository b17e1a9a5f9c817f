//! Handlers for the locale preference.

use axum::extract::State;
use axum::Json;
use repolens_core::locale::Locale;
use repolens_store::LocaleRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Locale payload, both directions.
#[derive(Debug, Serialize, Deserialize)]
pub struct LocalePayload {
    pub lang: Locale,
}

/// GET /api/v1/user/locale
///
/// The saved preference, or the default derived from the runtime locale
/// tag when none is saved.
pub async fn get_locale(State(state): State<AppState>) -> AppResult<Json<DataResponse<LocalePayload>>> {
    let lang = LocaleRepo::load(&*state.store, state.config.runtime_locale_tag.as_deref())?;
    Ok(Json(DataResponse {
        data: LocalePayload { lang },
    }))
}

/// PUT /api/v1/user/locale
///
/// Persist the preference. The response echoes the value now in effect.
pub async fn update_locale(
    State(state): State<AppState>,
    Json(input): Json<LocalePayload>,
) -> AppResult<Json<DataResponse<LocalePayload>>> {
    let lang = LocaleRepo::save(&*state.store, input.lang)?;

    tracing::info!(lang = %lang, "Locale preference updated");

    Ok(Json(DataResponse {
        data: LocalePayload { lang },
    }))
}
