//! SQLite adapter for vetrec.
//!
//! Implements the `OwnerRepository` port from `vetrec-core` on top of
//! `sqlx` with SQLite, and provides database setup plus composition
//! helpers for the entry points.

pub mod factory;
pub mod repositories;
pub mod setup;

pub use factory::owner_repository;
pub use repositories::SqliteOwnerRepository;
pub use setup::setup_database;

#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
