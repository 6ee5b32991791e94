//! Owner repository trait definition.
//!
//! This port defines the interface for owner persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewOwner, Owner};

/// Repository for owner persistence operations.
///
/// Each call is synchronous from the controller's point of view and
/// independently atomic; no multi-step transactions span controller
/// logic.
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Get an owner by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the owner doesn't
    /// exist.
    async fn find_by_id(&self, id: i64) -> Result<Owner, RepositoryError>;

    /// Find owners whose names start with the given fragments.
    ///
    /// An empty fragment is a wildcard on that field, so
    /// `find_by_full_name("", "")` returns every owner.
    async fn find_by_full_name(
        &self,
        last_name: &str,
        first_name: &str,
    ) -> Result<Vec<Owner>, RepositoryError>;

    /// Insert a new owner into the repository.
    ///
    /// Returns the persisted owner with its assigned ID.
    async fn insert(&self, owner: &NewOwner) -> Result<Owner, RepositoryError>;

    /// Update an existing owner. The ID is never reassigned.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the owner doesn't
    /// exist.
    async fn update(&self, owner: &Owner) -> Result<(), RepositoryError>;
}
