//! Handlers for the `/references` resource.
//!
//! Thin HTTP adapters over the pure reference-addressing functions, so
//! clients without a local copy of the formatting rules can still build
//! canonical reference strings.

use axum::Json;
use selah_core::reference::{self, SelectionRect, VerseSelection};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /references/format`.
#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    pub translation_id: String,
    pub book_label: String,
    pub chapter: u32,
    pub from_verse: u32,
    pub to_verse: u32,
}

/// Response body for `POST /references/format`.
#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub reference: String,
}

/// Request body for `POST /references/selection`.
#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub anchor_verse: u32,
    pub focus_verse: u32,
    pub text: String,
    pub rect: Option<SelectionRect>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/references/format
///
/// Format a canonical reference string. 400 on blank labels, zero
/// numbers, or an inverted verse range.
pub async fn format_reference(
    _auth_user: AuthUser,
    Json(input): Json<FormatRequest>,
) -> AppResult<Json<DataResponse<FormatResponse>>> {
    let reference = reference::format_reference(
        &input.translation_id,
        &input.book_label,
        input.chapter,
        input.from_verse,
        input.to_verse,
    )?;
    Ok(Json(DataResponse {
        data: FormatResponse { reference },
    }))
}

/// POST /api/v1/references/selection
///
/// Resolve a selection gesture into an ordered verse range. `data` is
/// null for a degenerate selection (zero verse number or blank text).
pub async fn resolve_selection(
    _auth_user: AuthUser,
    Json(input): Json<SelectionRequest>,
) -> AppResult<Json<DataResponse<Option<VerseSelection>>>> {
    let selection = reference::resolve_selection(
        input.anchor_verse,
        input.focus_verse,
        &input.text,
        input.rect,
    );
    Ok(Json(DataResponse { data: selection }))
}
