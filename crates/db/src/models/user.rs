//! User account model.

use serde::Serialize;
use sqlx::FromRow;

use selah_core::types::{DbId, Timestamp};

/// A row from the `users` table. Never serialized directly; the password
/// hash stays server-side.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Public projection of a user, safe to return from handlers.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub email: String,
    pub display_name: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
        }
    }
}
