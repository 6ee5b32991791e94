//! Database setup and initialization.
//!
//! Provides `setup_database()` for initializing the SQLite database
//! with the full schema. Entry points call this with the resolved
//! database path.

use anyhow::Result;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::path::Path;

/// Sets up the SQLite database connection and ensures the schema exists.
///
/// Creates the database file (and parent directory) if missing, then
/// creates all tables and indexes.
///
/// # Errors
///
/// Returns an error if the database file cannot be opened or created,
/// or if schema creation fails.
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Sets up an in-memory SQLite database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePool::connect("sqlite::memory:").await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Safe to call multiple times as all operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS owners (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            address TEXT NOT NULL,
            city TEXT NOT NULL,
            telephone TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Name search filters on last_name first
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_owners_last_name ON owners(last_name)")
        .execute(pool)
        .await?;

    Ok(())
}
