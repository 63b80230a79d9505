//! Highlight model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use selah_core::types::{DbId, Timestamp};

/// A row from the `highlights` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Highlight {
    pub id: DbId,
    pub user_id: DbId,
    /// Canonical reference string; same format and opacity as on notes.
    pub reference: String,
    /// Client-defined color token, e.g. `"amber"`.
    pub color: String,
    pub body: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a highlight.
#[derive(Debug, Deserialize)]
pub struct CreateHighlight {
    pub reference: String,
    pub color: String,
    pub body: Option<String>,
}
