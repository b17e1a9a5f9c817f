//! Route definitions for deployment diagnostics, mounted at `/diagnostics`.
//!
//! ```text
//! GET /env    -> env_report
//! GET /token  -> token_report
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::diagnostics;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/env", get(diagnostics::env_report))
        .route("/token", get(diagnostics::token_report))
}
