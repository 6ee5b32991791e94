//! Repository implementations backed by SQLite.

pub mod sqlite_owner_repository;

pub use sqlite_owner_repository::SqliteOwnerRepository;
