pub mod auth;
pub mod diagnostics;
pub mod entitlement;
pub mod health;
pub mod locale;
pub mod plans;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /plans                        pricing table (public)
/// /plans/{tier}                 single tier (public)
///
/// /entitlement                  get, put, delete
/// /entitlement/override         forced upgrade (POST, requires identity)
///
/// /user/locale                  get, put
///
/// /auth/me                      resolve bearer token against the provider
///
/// /diagnostics/env              config presence report (always 200)
/// /diagnostics/token            anon-key claim report (always 200)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Plan catalog / pricing table.
        .nest("/plans", plans::router())
        // Entitlement record and the forced-upgrade escape hatch.
        .nest("/entitlement", entitlement::router())
        // User-facing locale preference.
        .nest("/user/locale", locale::router())
        // Hosted auth provider proxy.
        .nest("/auth", auth::router())
        // Deployment diagnostics.
        .nest("/diagnostics", diagnostics::router())
}
