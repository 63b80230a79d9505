//! Study note model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use selah_core::types::{DbId, Timestamp};

/// A row from the `notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub user_id: DbId,
    /// Canonical reference string, e.g. `"NIV John 3:16-18"`. Treated as
    /// opaque display/search text; never parsed back.
    pub reference: String,
    pub body: String,
    pub created_at: Timestamp,
}

/// DTO for creating a note.
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub reference: String,
    pub body: String,
}
