//! Repository for the `highlights` table.

use sqlx::SqlitePool;

use selah_core::types::{DbId, Timestamp};

use crate::models::highlight::{CreateHighlight, Highlight};

/// Column list for highlights queries.
const COLUMNS: &str = "id, user_id, reference, color, body, created_at";

/// Provides owner-scoped CRUD operations for highlights.
pub struct HighlightRepo;

impl HighlightRepo {
    /// Insert a new highlight, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        input: &CreateHighlight,
        now: Timestamp,
    ) -> Result<Highlight, sqlx::Error> {
        let query = format!(
            "INSERT INTO highlights (user_id, reference, color, body, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Highlight>(&query)
            .bind(user_id)
            .bind(&input.reference)
            .bind(&input.color)
            .bind(&input.body)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// List a user's highlights, newest first.
    pub async fn list_by_owner(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<Highlight>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM highlights
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Highlight>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a highlight by id, scoped to its owner. Returns `true` if a
    /// row was deleted.
    pub async fn delete(
        pool: &SqlitePool,
        user_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM highlights WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
