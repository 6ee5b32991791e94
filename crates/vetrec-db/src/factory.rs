//! Composition utilities for wiring the SQLite backends.
//!
//! Focused purely on construction; contains no domain logic.

use std::sync::Arc;

use sqlx::SqlitePool;

use vetrec_core::OwnerRepository;

use crate::repositories::SqliteOwnerRepository;

/// Build the owner repository as a trait object from a pool.
///
/// This is the recommended way for adapters to obtain the repository
/// without coupling to the concrete SQLite implementation.
pub fn owner_repository(pool: SqlitePool) -> Arc<dyn OwnerRepository> {
    Arc::new(SqliteOwnerRepository::new(pool))
}
