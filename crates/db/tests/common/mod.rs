//! Shared test harness: in-memory SQLite pool with migrations applied.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use selah_core::types::DbId;
use selah_db::repositories::UserRepo;

/// Build a fresh in-memory database with the full schema.
///
/// A single connection keeps the in-memory database alive for the whole
/// test; repositories never need more than one connection at a time.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("connect to in-memory sqlite");
    selah_db::run_migrations(&pool)
        .await
        .expect("apply migrations");
    pool
}

/// Insert a test user and return its id.
pub async fn seed_user(pool: &SqlitePool, email: &str) -> DbId {
    UserRepo::create(pool, email, "Test Reader", "not-a-real-hash", chrono::Utc::now())
        .await
        .expect("seed user")
        .id
}
