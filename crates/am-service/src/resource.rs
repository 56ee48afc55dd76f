//! Resource registration lifecycle.
//!
//! Registrations are addressed by their owner triple plus id. They have no
//! dependents, so deletion only requires the registration to exist.

use std::sync::Arc;

use am_core::ServiceConfig;
use am_model::{ResourceOwner, ResourcePayload, ResourceRegistration};
use am_storage::ResourceRegistrationProvider;

use crate::error::{ManagementError, ManagementResult};
use crate::validation::validate_resource;

const ENTITY: &str = "ResourceRegistration";

/// Builds the location reference of a registration:
/// `{base_url}/{domain_path}/uma/protection/resource_set/{id}`.
#[must_use]
pub fn resource_set_location(base_url: &str, domain_path: &str, id: &str) -> String {
    format!(
        "{}/{}/uma/protection/resource_set/{}",
        base_url.trim_end_matches('/'),
        domain_path.trim_matches('/'),
        id
    )
}

/// Lifecycle service for resource registrations.
pub struct ResourceRegistrationService<R>
where
    R: ResourceRegistrationProvider,
{
    resource_provider: Arc<R>,
    base_url: String,
}

impl<R: ResourceRegistrationProvider> Clone for ResourceRegistrationService<R> {
    fn clone(&self) -> Self {
        Self {
            resource_provider: Arc::clone(&self.resource_provider),
            base_url: self.base_url.clone(),
        }
    }
}

impl<R> ResourceRegistrationService<R>
where
    R: ResourceRegistrationProvider,
{
    /// Creates a new service over the given store, using the default base URL.
    pub fn new(resource_provider: Arc<R>) -> Self {
        Self::from_config(resource_provider, &ServiceConfig::default())
    }

    /// Creates a new service publishing locations under `config.base_url`.
    pub fn from_config(resource_provider: Arc<R>, config: &ServiceConfig) -> Self {
        Self {
            resource_provider,
            base_url: config.base_url.clone(),
        }
    }

    /// Location reference of registration `id` in the domain mounted at `domain_path`.
    #[must_use]
    pub fn location(&self, domain_path: &str, id: &str) -> String {
        resource_set_location(&self.base_url, domain_path, id)
    }

    /// Lists the registrations of `owner`. An empty list is not an error.
    ///
    /// ## Errors
    ///
    /// Returns [`ManagementError::Technical`] if the store fails.
    pub async fn list(&self, owner: &ResourceOwner) -> ManagementResult<Vec<ResourceRegistration>> {
        tracing::debug!(
            domain = %owner.domain_id,
            client = %owner.client_id,
            user = %owner.user_id,
            "Listing resource registrations"
        );

        self.resource_provider.list(owner).await.map_err(|e| {
            ManagementError::from_storage(
                "An error occurs while trying to list resource registrations",
                e,
            )
        })
    }

    /// Registers a new resource for `owner`.
    ///
    /// ## Errors
    ///
    /// - [`ManagementError::InvalidRequest`] if the payload has no scopes
    /// - [`ManagementError::Technical`] if the store fails
    pub async fn create(
        &self,
        owner: &ResourceOwner,
        payload: ResourcePayload,
    ) -> ManagementResult<ResourceRegistration> {
        validate_resource(&payload)?;

        let resource = ResourceRegistration::new(owner, payload);
        tracing::debug!(
            domain = %owner.domain_id,
            client = %owner.client_id,
            id = %resource.id,
            "Creating resource registration"
        );

        self.resource_provider.create(&resource).await.map_err(|e| {
            ManagementError::from_storage(
                "An error occurs while trying to create a resource registration",
                e,
            )
        })?;

        Ok(resource)
    }

    /// Gets a registration by its composite key.
    ///
    /// ## Errors
    ///
    /// - [`ManagementError::NotFound`] if `owner` has no registration `id`
    /// - [`ManagementError::Technical`] if the store fails
    pub async fn get(
        &self,
        owner: &ResourceOwner,
        id: &str,
    ) -> ManagementResult<ResourceRegistration> {
        self.resource_provider
            .get(owner, id)
            .await
            .map_err(|e| {
                ManagementError::from_storage(
                    format!("An error occurs while trying to find resource registration: {id}"),
                    e,
                )
            })?
            .ok_or_else(|| ManagementError::not_found(ENTITY, id))
    }

    /// Updates the mutable fields of a registration.
    ///
    /// ## Errors
    ///
    /// - [`ManagementError::InvalidRequest`] if the payload has no scopes
    /// - [`ManagementError::NotFound`] if `owner` has no registration `id`
    /// - [`ManagementError::Technical`] if the store fails
    pub async fn update(
        &self,
        owner: &ResourceOwner,
        id: &str,
        payload: ResourcePayload,
    ) -> ManagementResult<ResourceRegistration> {
        validate_resource(&payload)?;

        tracing::debug!(domain = %owner.domain_id, id = %id, "Updating resource registration");
        let mut resource = self.get(owner, id).await?;
        resource.apply(payload);

        self.resource_provider.update(&resource).await.map_err(|e| {
            ManagementError::from_storage(
                format!("An error occurs while trying to update resource registration: {id}"),
                e,
            )
        })?;

        Ok(resource)
    }

    /// Deletes a registration.
    ///
    /// ## Errors
    ///
    /// - [`ManagementError::NotFound`] if `owner` has no registration `id`
    /// - [`ManagementError::Technical`] if the store fails
    pub async fn delete(&self, owner: &ResourceOwner, id: &str) -> ManagementResult<()> {
        tracing::debug!(domain = %owner.domain_id, id = %id, "Deleting resource registration");
        let resource = self.get(owner, id).await?;

        self.resource_provider
            .delete(&resource.id)
            .await
            .map_err(|e| {
                ManagementError::from_storage(
                    format!("An error occurs while trying to delete resource registration: {id}"),
                    e,
                )
            })
    }
}
