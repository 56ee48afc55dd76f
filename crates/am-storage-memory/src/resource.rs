use std::collections::HashMap;

use am_model::{ResourceOwner, ResourceRegistration};
use am_storage::{ResourceRegistrationProvider, StorageError, StorageResult};
use async_trait::async_trait;
use tokio::sync::RwLock;

const ENTITY: &str = "ResourceRegistration";

/// In-memory resource registration provider.
#[derive(Debug, Default)]
pub struct InMemoryResourceRegistrationProvider {
    resources: RwLock<HashMap<String, ResourceRegistration>>,
}

impl InMemoryResourceRegistrationProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn collect<F>(&self, filter: F) -> Vec<ResourceRegistration>
    where
        F: Fn(&ResourceRegistration) -> bool,
    {
        let mut resources: Vec<ResourceRegistration> = self
            .resources
            .read()
            .await
            .values()
            .filter(|&resource| filter(resource))
            .cloned()
            .collect();
        resources.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        resources
    }
}

#[async_trait]
impl ResourceRegistrationProvider for InMemoryResourceRegistrationProvider {
    async fn create(&self, resource: &ResourceRegistration) -> StorageResult<()> {
        let mut resources = self.resources.write().await;
        if resources.contains_key(&resource.id) {
            return Err(StorageError::duplicate(ENTITY, "id", &resource.id));
        }
        resources.insert(resource.id.clone(), resource.clone());
        Ok(())
    }

    async fn update(&self, resource: &ResourceRegistration) -> StorageResult<()> {
        match self.resources.write().await.get_mut(&resource.id) {
            Some(stored) => {
                *stored = resource.clone();
                Ok(())
            }
            None => Err(StorageError::not_found(ENTITY, &resource.id)),
        }
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        self.resources
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorageError::not_found(ENTITY, id))
    }

    async fn get_by_id(&self, id: &str) -> StorageResult<Option<ResourceRegistration>> {
        Ok(self.resources.read().await.get(id).cloned())
    }

    async fn get(
        &self,
        owner: &ResourceOwner,
        id: &str,
    ) -> StorageResult<Option<ResourceRegistration>> {
        Ok(self
            .resources
            .read()
            .await
            .get(id)
            .filter(|resource| owner.owns(resource))
            .cloned())
    }

    async fn list(&self, owner: &ResourceOwner) -> StorageResult<Vec<ResourceRegistration>> {
        Ok(self.collect(|resource| owner.owns(resource)).await)
    }

    async fn list_by_domain(&self, domain_id: &str) -> StorageResult<Vec<ResourceRegistration>> {
        Ok(self
            .collect(|resource| resource.domain_id == domain_id)
            .await)
    }
}
