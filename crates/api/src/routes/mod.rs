pub mod health;
pub mod readiness;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /readiness                 submit intake form (POST)
/// /readiness/draft           mailto: draft (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(readiness::router())
}
