//! Repository for the `notes` table.

use sqlx::SqlitePool;

use selah_core::types::{DbId, Timestamp};

use crate::models::note::{CreateNote, Note};

/// Column list for notes queries.
const COLUMNS: &str = "id, user_id, reference, body, created_at";

/// Provides owner-scoped CRUD operations for study notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        input: &CreateNote,
        now: Timestamp,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (user_id, reference, body, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .bind(&input.reference)
            .bind(&input.body)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// List a user's notes, newest first.
    pub async fn list_by_owner(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a note by id, scoped to its owner. Returns `true` if a row
    /// was deleted.
    pub async fn delete(
        pool: &SqlitePool,
        user_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
