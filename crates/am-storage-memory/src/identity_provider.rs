use std::collections::HashMap;

use am_model::IdentityProvider;
use am_storage::{IdentityProviderProvider, StorageError, StorageResult};
use async_trait::async_trait;
use tokio::sync::RwLock;

const ENTITY: &str = "IdentityProvider";

/// In-memory identity provider storage.
#[derive(Debug, Default)]
pub struct InMemoryIdentityProviderProvider {
    providers: RwLock<HashMap<String, IdentityProvider>>,
}

impl InMemoryIdentityProviderProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityProviderProvider for InMemoryIdentityProviderProvider {
    async fn create(&self, provider: &IdentityProvider) -> StorageResult<()> {
        let mut providers = self.providers.write().await;
        if providers.contains_key(&provider.id) {
            return Err(StorageError::duplicate(ENTITY, "id", &provider.id));
        }
        providers.insert(provider.id.clone(), provider.clone());
        Ok(())
    }

    async fn update(&self, provider: &IdentityProvider) -> StorageResult<()> {
        match self.providers.write().await.get_mut(&provider.id) {
            Some(stored) => {
                *stored = provider.clone();
                Ok(())
            }
            None => Err(StorageError::not_found(ENTITY, &provider.id)),
        }
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        self.providers
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorageError::not_found(ENTITY, id))
    }

    async fn get_by_id(&self, id: &str) -> StorageResult<Option<IdentityProvider>> {
        Ok(self.providers.read().await.get(id).cloned())
    }

    async fn list_by_domain(&self, domain: &str) -> StorageResult<Vec<IdentityProvider>> {
        let mut providers: Vec<IdentityProvider> = self
            .providers
            .read()
            .await
            .values()
            .filter(|provider| provider.domain == domain)
            .cloned()
            .collect();
        providers.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(providers)
    }
}

#[cfg(test)]
mod tests {
    use am_model::NewIdentityProvider;

    use super::*;

    #[tokio::test]
    async fn list_by_domain_filters_other_domains() {
        let store = InMemoryIdentityProviderProvider::new();
        let ldap = IdentityProvider::new("myorg", NewIdentityProvider::new("LDAP", "ldap-am-idp"));
        let github =
            IdentityProvider::new("other", NewIdentityProvider::new("GitHub", "github-am-idp"));
        store.create(&ldap).await.unwrap();
        store.create(&github).await.unwrap();

        let providers = store.list_by_domain("myorg").await.unwrap();
        assert_eq!(providers, vec![ldap.clone()]);
        assert_eq!(store.get_by_id(&github.id).await.unwrap(), Some(github));
    }

    #[tokio::test]
    async fn update_replaces_stored_copy() {
        let store = InMemoryIdentityProviderProvider::new();
        let mut provider =
            IdentityProvider::new("myorg", NewIdentityProvider::new("LDAP", "ldap-am-idp"));
        store.create(&provider).await.unwrap();

        provider.name = "Directory".to_string();
        store.update(&provider).await.unwrap();

        let stored = store.get_by_id(&provider.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Directory");
    }
}
