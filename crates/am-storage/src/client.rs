//! Client storage provider trait.

use am_model::Client;
use async_trait::async_trait;

use crate::error::StorageResult;

/// Provider for client storage operations.
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait ClientProvider: Send + Sync {
    /// Creates a new client.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` if a client with the same `client_id`
    /// exists in the domain.
    async fn create(&self, client: &Client) -> StorageResult<()>;

    /// Updates an existing client.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the client doesn't exist.
    async fn update(&self, client: &Client) -> StorageResult<()>;

    /// Deletes a client by ID.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the client doesn't exist.
    async fn delete(&self, id: &str) -> StorageResult<()>;

    /// Gets a client by internal ID.
    async fn get_by_id(&self, id: &str) -> StorageResult<Option<Client>>;

    /// Lists the clients of a domain.
    async fn list_by_domain(&self, domain: &str) -> StorageResult<Vec<Client>>;

    /// Lists the clients that authenticate through the given identity provider.
    async fn list_by_identity_provider(
        &self,
        identity_provider_id: &str,
    ) -> StorageResult<Vec<Client>>;
}
