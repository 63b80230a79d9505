//! Route definitions for study notes.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes, mounted at `/notes`. All require auth.
///
/// ```text
/// GET    /        list_notes
/// POST   /        create_note
/// DELETE /{id}    delete_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route("/{id}", delete(notes::delete_note))
}
