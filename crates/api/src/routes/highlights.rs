//! Route definitions for highlights.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::highlights;
use crate::state::AppState;

/// Highlight routes, mounted at `/highlights`. All require auth.
///
/// ```text
/// GET    /        list_highlights
/// POST   /        create_highlight
/// DELETE /{id}    delete_highlight
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(highlights::list_highlights).post(highlights::create_highlight),
        )
        .route("/{id}", delete(highlights::delete_highlight))
}
