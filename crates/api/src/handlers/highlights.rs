//! Handlers for the `/highlights` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use selah_core::annotation;
use selah_core::error::CoreError;
use selah_core::types::DbId;
use selah_db::models::highlight::{CreateHighlight, Highlight};
use selah_db::repositories::HighlightRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/highlights
///
/// List the authenticated user's highlights, newest first.
pub async fn list_highlights(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Highlight>>>> {
    let highlights = HighlightRepo::list_by_owner(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: highlights }))
}

/// POST /api/v1/highlights
///
/// Create a highlight. The body is optional; the color token is required.
pub async fn create_highlight(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateHighlight>,
) -> AppResult<(StatusCode, Json<DataResponse<Highlight>>)> {
    annotation::validate_reference(&input.reference)?;
    annotation::validate_highlight_color(&input.color)?;
    annotation::validate_highlight_body(input.body.as_deref())?;

    let highlight =
        HighlightRepo::create(&state.pool, auth_user.user_id, &input, Utc::now()).await?;

    tracing::info!(
        user_id = auth_user.user_id,
        highlight_id = highlight.id,
        "highlight created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: highlight })))
}

/// DELETE /api/v1/highlights/{id}
///
/// Delete a highlight. Returns 204 No Content, or 404 when the highlight
/// does not exist or belongs to someone else.
pub async fn delete_highlight(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(highlight_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = HighlightRepo::delete(&state.pool, auth_user.user_id, highlight_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "highlight",
            id: highlight_id,
        }));
    }

    tracing::info!(
        user_id = auth_user.user_id,
        highlight_id,
        "highlight deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
