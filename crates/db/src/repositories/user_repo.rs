//! Repository for the `users` table.

use sqlx::SqlitePool;

use selah_core::types::{DbId, Timestamp};

use crate::models::user::User;

/// Column list for users queries.
const COLUMNS: &str = "id, email, display_name, password_hash, created_at";

/// Provides account lookup and registration.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with an already-hashed password, returning the
    /// created row. Fails with a unique violation when the email is taken.
    pub async fn create(
        pool: &SqlitePool,
        email: &str,
        display_name: &str,
        password_hash: &str,
        now: Timestamp,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, display_name, password_hash, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(display_name)
            .bind(password_hash)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a user by email (login path).
    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by primary key.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
