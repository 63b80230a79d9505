//! Handlers for the `/notes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use selah_core::annotation;
use selah_core::error::CoreError;
use selah_core::types::DbId;
use selah_db::models::note::{CreateNote, Note};
use selah_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/notes
///
/// List the authenticated user's notes, newest first.
pub async fn list_notes(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Note>>>> {
    let notes = NoteRepo::list_by_owner(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: notes }))
}

/// POST /api/v1/notes
///
/// Create a note against a canonical reference string.
pub async fn create_note(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateNote>,
) -> AppResult<(StatusCode, Json<DataResponse<Note>>)> {
    annotation::validate_reference(&input.reference)?;
    annotation::validate_note_body(&input.body)?;

    let note = NoteRepo::create(&state.pool, auth_user.user_id, &input, Utc::now()).await?;

    tracing::info!(user_id = auth_user.user_id, note_id = note.id, "note created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// DELETE /api/v1/notes/{id}
///
/// Delete a note. Returns 204 No Content, or 404 when the note does not
/// exist or belongs to someone else.
pub async fn delete_note(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(note_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NoteRepo::delete(&state.pool, auth_user.user_id, note_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "note",
            id: note_id,
        }));
    }

    tracing::info!(user_id = auth_user.user_id, note_id, "note deleted");

    Ok(StatusCode::NO_CONTENT)
}
