//! Identity provider lifecycle.
//!
//! Writes trigger a reload of the owning domain once persisted. Deletion is
//! refused while clients still authenticate through the provider.

use std::sync::Arc;

use am_model::{IdentityProvider, NewIdentityProvider, UpdateIdentityProvider};
use am_storage::IdentityProviderProvider;

use crate::error::{ManagementError, ManagementResult};
use crate::notify::{DomainReloader, ReloadNotifier};
use crate::reference::ReferenceChecker;
use crate::validation::{validate_identity_provider_update, validate_new_identity_provider};

const ENTITY: &str = "IdentityProvider";

/// Lifecycle service for identity providers.
pub struct IdentityProviderService<I, C, R>
where
    I: IdentityProviderProvider,
    C: ReferenceChecker,
    R: DomainReloader,
{
    identity_provider_provider: Arc<I>,
    reference_checker: Arc<C>,
    notifier: ReloadNotifier<R>,
}

impl<I, C, R> Clone for IdentityProviderService<I, C, R>
where
    I: IdentityProviderProvider,
    C: ReferenceChecker,
    R: DomainReloader,
{
    fn clone(&self) -> Self {
        Self {
            identity_provider_provider: Arc::clone(&self.identity_provider_provider),
            reference_checker: Arc::clone(&self.reference_checker),
            notifier: self.notifier.clone(),
        }
    }
}

impl<I, C, R> IdentityProviderService<I, C, R>
where
    I: IdentityProviderProvider,
    C: ReferenceChecker,
    R: DomainReloader,
{
    /// Creates a new identity provider service.
    pub fn new(
        identity_provider_provider: Arc<I>,
        reference_checker: Arc<C>,
        notifier: ReloadNotifier<R>,
    ) -> Self {
        Self {
            identity_provider_provider,
            reference_checker,
            notifier,
        }
    }

    /// Returns the reload notifier, e.g. to inspect its failure counter.
    #[must_use]
    pub const fn notifier(&self) -> &ReloadNotifier<R> {
        &self.notifier
    }

    /// Finds an identity provider by id. Absence is not an error.
    ///
    /// ## Errors
    ///
    /// Returns [`ManagementError::Technical`] if the store fails.
    pub async fn find_by_id(&self, id: &str) -> ManagementResult<Option<IdentityProvider>> {
        tracing::debug!(id = %id, "Find identity provider by ID");
        self.load(id).await
    }

    /// Lists the identity providers of a domain.
    ///
    /// ## Errors
    ///
    /// Returns [`ManagementError::Technical`] if the store fails.
    pub async fn find_by_domain(&self, domain: &str) -> ManagementResult<Vec<IdentityProvider>> {
        tracing::debug!(domain = %domain, "Find identity providers by domain");

        self.identity_provider_provider
            .list_by_domain(domain)
            .await
            .map_err(|e| {
                ManagementError::from_storage(
                    "An error occurs while trying to find identity providers by domain",
                    e,
                )
            })
    }

    /// Registers a new identity provider and schedules a domain reload.
    ///
    /// ## Errors
    ///
    /// - [`ManagementError::InvalidRequest`] if name or type is blank
    /// - [`ManagementError::Technical`] if the store fails
    pub async fn create(
        &self,
        domain: &str,
        request: NewIdentityProvider,
    ) -> ManagementResult<IdentityProvider> {
        validate_new_identity_provider(&request)?;

        let provider = IdentityProvider::new(domain, request);
        tracing::debug!(domain = %domain, id = %provider.id, "Create a new identity provider");

        self.identity_provider_provider
            .create(&provider)
            .await
            .map_err(|e| {
                ManagementError::from_storage(
                    "An error occurs while trying to create an identity provider",
                    e,
                )
            })?;

        self.notifier.notify_domain_changed(domain);
        Ok(provider)
    }

    /// Updates the settings of an identity provider and schedules a domain reload.
    ///
    /// A provider belonging to another domain is reported as not found.
    ///
    /// ## Errors
    ///
    /// - [`ManagementError::InvalidRequest`] if the name is blank
    /// - [`ManagementError::NotFound`] if the provider does not exist in `domain`
    /// - [`ManagementError::Technical`] if the store fails
    pub async fn update(
        &self,
        domain: &str,
        id: &str,
        request: UpdateIdentityProvider,
    ) -> ManagementResult<IdentityProvider> {
        validate_identity_provider_update(&request)?;

        tracing::debug!(domain = %domain, id = %id, "Update an identity provider");
        let mut provider = self
            .load(id)
            .await?
            .filter(|provider| provider.domain == domain)
            .ok_or_else(|| ManagementError::not_found(ENTITY, id))?;

        provider.apply(request);

        self.identity_provider_provider
            .update(&provider)
            .await
            .map_err(|e| {
                ManagementError::from_storage(
                    "An error occurs while trying to update an identity provider",
                    e,
                )
            })?;

        self.notifier.notify_domain_changed(domain);
        Ok(provider)
    }

    /// Deletes an identity provider that no client references anymore.
    ///
    /// No domain reload is scheduled: runtime entries of a deleted provider
    /// are unreachable once clients stopped referencing it.
    ///
    /// ## Errors
    ///
    /// - [`ManagementError::NotFound`] if the provider does not exist
    /// - [`ManagementError::IdentityProviderInUse`] if clients still reference it
    /// - [`ManagementError::Technical`] if the store fails
    pub async fn delete(&self, id: &str) -> ManagementResult<()> {
        tracing::debug!(id = %id, "Delete identity provider");

        let provider = self
            .load(id)
            .await?
            .ok_or_else(|| ManagementError::not_found(ENTITY, id))?;

        let clients = self
            .reference_checker
            .count_referencing_clients(&provider.id)
            .await
            .map_err(|e| {
                ManagementError::from_storage(
                    format!(
                        "An error occurs while trying to find clients of identity provider: {id}"
                    ),
                    e,
                )
            })?;

        if clients > 0 {
            return Err(ManagementError::IdentityProviderInUse {
                id: provider.id,
                clients,
            });
        }

        self.identity_provider_provider
            .delete(&provider.id)
            .await
            .map_err(|e| {
                ManagementError::from_storage(
                    format!("An error occurs while trying to delete identity provider: {id}"),
                    e,
                )
            })
    }

    async fn load(&self, id: &str) -> ManagementResult<Option<IdentityProvider>> {
        self.identity_provider_provider
            .get_by_id(id)
            .await
            .map_err(|e| {
                ManagementError::from_storage(
                    format!(
                        "An error occurs while trying to find an identity provider using its ID: {id}"
                    ),
                    e,
                )
            })
    }
}
