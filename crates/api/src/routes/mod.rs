pub mod auth;
pub mod health;
pub mod highlights;
pub mod notes;
pub mod plans;
pub mod references;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                   register (public)
/// /auth/login                      login (public)
/// /auth/me                         current user (requires auth)
///
/// /plans                           list, create
/// /plans/focus                     daily-focus suggestion
/// /plans/{id}                      get (with items), delete
/// /plans/{id}/items/{item_id}      toggle completion (PATCH)
///
/// /notes                           list, create
/// /notes/{id}                      delete
///
/// /highlights                      list, create
/// /highlights/{id}                 delete
///
/// /references/format               canonical reference string (POST)
/// /references/selection            resolve selection gesture (POST)
/// ```
///
/// `/health` lives at root level, outside this tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/plans", plans::router())
        .nest("/notes", notes::router())
        .nest("/highlights", highlights::router())
        .nest("/references", references::router())
}
