//! Identity provider storage provider trait.

use am_model::IdentityProvider;
use async_trait::async_trait;

use crate::error::StorageResult;

/// Provider for identity provider storage operations.
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait IdentityProviderProvider: Send + Sync {
    /// Creates a new identity provider.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` if a provider with the same id exists.
    async fn create(&self, provider: &IdentityProvider) -> StorageResult<()>;

    /// Updates an existing identity provider.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the provider doesn't exist.
    async fn update(&self, provider: &IdentityProvider) -> StorageResult<()>;

    /// Deletes an identity provider by ID.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the provider doesn't exist.
    async fn delete(&self, id: &str) -> StorageResult<()>;

    /// Gets an identity provider by ID.
    async fn get_by_id(&self, id: &str) -> StorageResult<Option<IdentityProvider>>;

    /// Lists the identity providers of a domain.
    async fn list_by_domain(&self, domain: &str) -> StorageResult<Vec<IdentityProvider>>;
}
