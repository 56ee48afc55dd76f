//! Resource registration storage provider trait.

use am_model::{ResourceOwner, ResourceRegistration};
use async_trait::async_trait;

use crate::error::StorageResult;

/// Provider for resource registration storage operations.
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait ResourceRegistrationProvider: Send + Sync {
    /// Creates a new registration.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` if a registration with the same id exists.
    async fn create(&self, resource: &ResourceRegistration) -> StorageResult<()>;

    /// Updates an existing registration.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the registration doesn't exist.
    async fn update(&self, resource: &ResourceRegistration) -> StorageResult<()>;

    /// Deletes a registration by ID.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the registration doesn't exist.
    async fn delete(&self, id: &str) -> StorageResult<()>;

    /// Gets a registration by ID, regardless of its owner.
    async fn get_by_id(&self, id: &str) -> StorageResult<Option<ResourceRegistration>>;

    /// Gets a registration by its full composite key.
    async fn get(
        &self,
        owner: &ResourceOwner,
        id: &str,
    ) -> StorageResult<Option<ResourceRegistration>>;

    /// Lists the registrations owned by a domain/client/user triple.
    async fn list(&self, owner: &ResourceOwner) -> StorageResult<Vec<ResourceRegistration>>;

    /// Lists every registration of a domain.
    async fn list_by_domain(&self, domain_id: &str) -> StorageResult<Vec<ResourceRegistration>>;
}
