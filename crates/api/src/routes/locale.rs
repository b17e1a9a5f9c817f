//! Route definitions for the locale preference, mounted at `/user/locale`.
//!
//! ```text
//! GET /  -> get_locale
//! PUT /  -> update_locale
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::locale;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(locale::get_locale).put(locale::update_locale))
}
