//! Route definitions for the auth provider proxy, mounted at `/auth`.
//!
//! ```text
//! GET /me  -> me
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(auth::me))
}
