//! Route definitions for the readiness intake form.

use axum::routing::post;
use axum::Router;

use crate::handlers::readiness;
use crate::state::AppState;

/// Readiness routes, merged into the `/api` tree.
///
/// ```text
/// POST   /readiness          validate + notify owner and prospect
/// POST   /readiness/draft    build a mailto: draft for the owner
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/readiness", post(readiness::submit))
        .route("/readiness/draft", post(readiness::draft))
}
