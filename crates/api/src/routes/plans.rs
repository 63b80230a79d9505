//! Route definitions for reading plans.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::plans;
use crate::state::AppState;

/// Plan routes, mounted at `/plans`. All require auth.
///
/// ```text
/// GET    /                        list_plans
/// POST   /                        create_plan
/// GET    /focus                   daily_focus
/// GET    /{id}                    get_plan
/// DELETE /{id}                    delete_plan
/// PATCH  /{id}/items/{item_id}    toggle_item
/// ```
///
/// `/focus` is registered before `/{id}` so the literal segment is not
/// captured as a plan id.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(plans::list_plans).post(plans::create_plan))
        .route("/focus", get(plans::daily_focus))
        .route("/{id}", get(plans::get_plan).delete(plans::delete_plan))
        .route("/{id}/items/{item_id}", patch(plans::toggle_item))
}
