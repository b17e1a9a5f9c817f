//! Route definitions for the entitlement record, mounted at `/entitlement`.
//!
//! ```text
//! GET    /          -> get_entitlement
//! PUT    /          -> update_entitlement
//! DELETE /          -> clear_entitlement
//! POST   /override  -> force_upgrade
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::entitlement;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(entitlement::get_entitlement)
                .put(entitlement::update_entitlement)
                .delete(entitlement::clear_entitlement),
        )
        .route("/override", post(entitlement::force_upgrade))
}
