//! Identity provider domain model.
//!
//! Identity providers are the authentication sources (LDAP directory, social
//! login, external OIDC issuer...) configured on a security domain.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generate_id;

/// An identity provider attached to a security domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityProvider {
    /// Unique identifier.
    pub id: String,
    /// Owning security domain.
    pub domain: String,
    /// Display name.
    pub name: String,
    /// Provider implementation type (e.g. `ldap-am-idp`).
    #[serde(rename = "type")]
    pub provider_type: String,
    /// Provider-specific configuration.
    pub configuration: Option<serde_json::Value>,
    /// User attribute to claim mappings.
    pub mappers: HashMap<String, String>,
    /// Role to user predicate mappings.
    pub role_mapper: HashMap<String, Vec<String>>,
    /// Whether the provider is an external (social/federated) source.
    pub external: bool,
    /// When the provider was created.
    pub created_at: DateTime<Utc>,
    /// When the provider was last updated.
    pub updated_at: DateTime<Utc>,
}

impl IdentityProvider {
    /// Creates a provider for `domain` from a creation request.
    #[must_use]
    pub fn new(domain: impl Into<String>, request: NewIdentityProvider) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(),
            domain: domain.into(),
            name: request.name,
            provider_type: request.provider_type,
            configuration: request.configuration,
            mappers: HashMap::new(),
            role_mapper: HashMap::new(),
            external: request.external,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the updatable settings.
    ///
    /// `provider_type`, `domain`, `external` and `created_at` are fixed at creation.
    pub fn apply(&mut self, request: UpdateIdentityProvider) {
        self.name = request.name;
        self.configuration = request.configuration;
        self.mappers = request.mappers.unwrap_or_default();
        self.role_mapper = request.role_mapper.unwrap_or_default();
        self.updated_at = Utc::now();
    }
}

/// Request to register a new identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIdentityProvider {
    /// Display name.
    pub name: String,
    /// Provider implementation type.
    #[serde(rename = "type")]
    pub provider_type: String,
    /// Provider-specific configuration.
    #[serde(default)]
    pub configuration: Option<serde_json::Value>,
    /// Whether the provider is an external source.
    #[serde(default)]
    pub external: bool,
}

impl NewIdentityProvider {
    /// Creates a request with the given name and type.
    #[must_use]
    pub fn new(name: impl Into<String>, provider_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider_type: provider_type.into(),
            configuration: None,
            external: false,
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_configuration(mut self, configuration: serde_json::Value) -> Self {
        self.configuration = Some(configuration);
        self
    }

    /// Marks the provider as external.
    #[must_use]
    pub const fn external(mut self) -> Self {
        self.external = true;
        self
    }
}

/// Request to update an identity provider.
///
/// Every field overwrites the stored value; an omitted optional field clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateIdentityProvider {
    /// Display name.
    pub name: String,
    /// Provider-specific configuration.
    #[serde(default)]
    pub configuration: Option<serde_json::Value>,
    /// User attribute to claim mappings.
    #[serde(default)]
    pub mappers: Option<HashMap<String, String>>,
    /// Role to user predicate mappings.
    #[serde(default)]
    pub role_mapper: Option<HashMap<String, Vec<String>>>,
}

impl UpdateIdentityProvider {
    /// Creates an update request that only carries a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            configuration: None,
            mappers: None,
            role_mapper: None,
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_configuration(mut self, configuration: serde_json::Value) -> Self {
        self.configuration = Some(configuration);
        self
    }

    /// Adds an attribute mapping.
    #[must_use]
    pub fn with_mapper(mut self, claim: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.mappers
            .get_or_insert_with(HashMap::new)
            .insert(claim.into(), attribute.into());
        self
    }
}
