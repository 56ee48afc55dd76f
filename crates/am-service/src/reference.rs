//! Cross-entity reference checks.

use std::sync::Arc;

use am_storage::{ClientProvider, StorageResult};
use async_trait::async_trait;

/// Read-only query telling whether dependents still point at an identity provider.
#[async_trait]
pub trait ReferenceChecker: Send + Sync {
    /// Counts the clients that authenticate through `identity_provider_id`.
    async fn count_referencing_clients(&self, identity_provider_id: &str) -> StorageResult<usize>;
}

/// [`ReferenceChecker`] backed by the client store.
pub struct ClientReferenceChecker<C>
where
    C: ClientProvider,
{
    client_provider: Arc<C>,
}

impl<C: ClientProvider> ClientReferenceChecker<C> {
    /// Creates a checker querying the given client store.
    pub fn new(client_provider: Arc<C>) -> Self {
        Self { client_provider }
    }
}

impl<C: ClientProvider> Clone for ClientReferenceChecker<C> {
    fn clone(&self) -> Self {
        Self {
            client_provider: Arc::clone(&self.client_provider),
        }
    }
}

#[async_trait]
impl<C: ClientProvider> ReferenceChecker for ClientReferenceChecker<C> {
    async fn count_referencing_clients(&self, identity_provider_id: &str) -> StorageResult<usize> {
        let clients = self
            .client_provider
            .list_by_identity_provider(identity_provider_id)
            .await?;
        Ok(clients.len())
    }
}
