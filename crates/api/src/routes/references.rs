//! Route definitions for reference addressing.

use axum::routing::post;
use axum::Router;

use crate::handlers::references;
use crate::state::AppState;

/// Reference routes, mounted at `/references`. All require auth.
///
/// ```text
/// POST /format       format_reference
/// POST /selection    resolve_selection
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/format", post(references::format_reference))
        .route("/selection", post(references::resolve_selection))
}
