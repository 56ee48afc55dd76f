use std::collections::HashMap;

use am_model::Client;
use am_storage::{ClientProvider, StorageError, StorageResult};
use async_trait::async_trait;
use tokio::sync::RwLock;

const ENTITY: &str = "Client";

/// In-memory client storage.
#[derive(Debug, Default)]
pub struct InMemoryClientProvider {
    clients: RwLock<HashMap<String, Client>>,
}

impl InMemoryClientProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn collect<F>(&self, filter: F) -> Vec<Client>
    where
        F: Fn(&Client) -> bool,
    {
        let mut clients: Vec<Client> = self
            .clients
            .read()
            .await
            .values()
            .filter(|&client| filter(client))
            .cloned()
            .collect();
        clients.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        clients
    }
}

#[async_trait]
impl ClientProvider for InMemoryClientProvider {
    async fn create(&self, client: &Client) -> StorageResult<()> {
        let mut clients = self.clients.write().await;
        if clients
            .values()
            .any(|c| c.domain == client.domain && c.client_id == client.client_id)
        {
            return Err(StorageError::duplicate(ENTITY, "client_id", &client.client_id));
        }
        clients.insert(client.id.clone(), client.clone());
        Ok(())
    }

    async fn update(&self, client: &Client) -> StorageResult<()> {
        match self.clients.write().await.get_mut(&client.id) {
            Some(stored) => {
                *stored = client.clone();
                Ok(())
            }
            None => Err(StorageError::not_found(ENTITY, &client.id)),
        }
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        self.clients
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorageError::not_found(ENTITY, id))
    }

    async fn get_by_id(&self, id: &str) -> StorageResult<Option<Client>> {
        Ok(self.clients.read().await.get(id).cloned())
    }

    async fn list_by_domain(&self, domain: &str) -> StorageResult<Vec<Client>> {
        Ok(self.collect(|client| client.domain == domain).await)
    }

    async fn list_by_identity_provider(
        &self,
        identity_provider_id: &str,
    ) -> StorageResult<Vec<Client>> {
        Ok(self
            .collect(|client| client.uses_identity_provider(identity_provider_id))
            .await)
    }
}
