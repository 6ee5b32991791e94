//! Owner service - orchestrates owner CRUD operations.

use std::sync::Arc;

use crate::domain::{NewOwner, Owner};
use crate::ports::{OwnerRepository, RepositoryError};

/// Service for owner operations.
///
/// This service provides high-level owner management by delegating to
/// the injected `OwnerRepository`. It adds no business logic beyond
/// what the repository provides - it's a thin facade.
pub struct OwnerService {
    repo: Arc<dyn OwnerRepository>,
}

impl OwnerService {
    /// Create a new owner service with the given repository.
    pub fn new(repo: Arc<dyn OwnerRepository>) -> Self {
        Self { repo }
    }

    /// Get an owner by its database ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Owner, RepositoryError> {
        self.repo.find_by_id(id).await
    }

    /// Find owners by name fragments. Empty fragments are wildcards.
    pub async fn find_by_full_name(
        &self,
        last_name: &str,
        first_name: &str,
    ) -> Result<Vec<Owner>, RepositoryError> {
        self.repo.find_by_full_name(last_name, first_name).await
    }

    /// Persist a new owner. Returns the owner with its assigned ID.
    pub async fn create(&self, owner: NewOwner) -> Result<Owner, RepositoryError> {
        let persisted = self.repo.insert(&owner).await?;
        tracing::debug!(id = persisted.id, "owner created");
        Ok(persisted)
    }

    /// Re-save an existing owner. The ID is preserved.
    pub async fn update(&self, owner: &Owner) -> Result<(), RepositoryError> {
        self.repo.update(owner).await?;
        tracing::debug!(id = owner.id, "owner updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    mockall::mock! {
        OwnerRepo {}

        #[async_trait]
        impl OwnerRepository for OwnerRepo {
            async fn find_by_id(&self, id: i64) -> Result<Owner, RepositoryError>;
            async fn find_by_full_name(
                &self,
                last_name: &str,
                first_name: &str,
            ) -> Result<Vec<Owner>, RepositoryError>;
            async fn insert(&self, owner: &NewOwner) -> Result<Owner, RepositoryError>;
            async fn update(&self, owner: &Owner) -> Result<(), RepositoryError>;
        }
    }

    fn george() -> Owner {
        Owner {
            id: 1,
            first_name: "George".to_string(),
            last_name: "Franklin".to_string(),
            address: "110 W. Liberty St.".to_string(),
            city: "Madison".to_string(),
            telephone: "6085551023".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_persisted_owner_with_id() {
        let mut repo = MockOwnerRepo::new();
        repo.expect_insert()
            .withf(|o| o.last_name == "Franklin")
            .returning(|_| Ok(george()));

        let service = OwnerService::new(Arc::new(repo));
        let owner = service.create(george().to_new_owner()).await.unwrap();
        assert_eq!(owner.id, 1);
    }

    #[tokio::test]
    async fn test_find_by_full_name_passes_fragments_through() {
        let mut repo = MockOwnerRepo::new();
        repo.expect_find_by_full_name()
            .withf(|last, first| last == "Franklin" && first.is_empty())
            .returning(|_, _| Ok(vec![george()]));

        let service = OwnerService::new(Arc::new(repo));
        let owners = service.find_by_full_name("Franklin", "").await.unwrap();
        assert_eq!(owners.len(), 1);
        assert_eq!(owners[0].id, 1);
    }

    #[tokio::test]
    async fn test_find_by_id_propagates_not_found() {
        let mut repo = MockOwnerRepo::new();
        repo.expect_find_by_id()
            .returning(|id| Err(RepositoryError::NotFound(format!("Owner with ID {id}"))));

        let service = OwnerService::new(Arc::new(repo));
        let err = service.find_by_id(99).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_preserves_id() {
        let mut repo = MockOwnerRepo::new();
        repo.expect_update()
            .withf(|o| o.id == 1 && o.city == "London")
            .returning(|_| Ok(()));

        let service = OwnerService::new(Arc::new(repo));
        let updated = Owner {
            city: "London".to_string(),
            ..george()
        };
        service.update(&updated).await.unwrap();
    }
}
