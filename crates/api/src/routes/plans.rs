//! Route definitions for the plan catalog, mounted at `/plans`.
//!
//! ```text
//! GET /        -> list_plans
//! GET /{tier}  -> get_plan
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::plans;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(plans::list_plans))
        .route("/{tier}", get(plans::get_plan))
}
