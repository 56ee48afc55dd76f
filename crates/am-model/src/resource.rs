//! Resource registration domain model.
//!
//! A resource registration describes a protected resource and the scopes it
//! supports (a UMA 2.0 resource set). It is owned by the client/user pair that
//! registered it within a security domain.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generate_id;

/// Composite ownership key of a resource registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceOwner {
    /// Security domain identifier.
    pub domain_id: String,
    /// Client that registered the resource.
    pub client_id: String,
    /// End-user (resource owner) identifier.
    pub user_id: String,
}

impl ResourceOwner {
    /// Creates a new ownership key.
    #[must_use]
    pub fn new(
        domain_id: impl Into<String>,
        client_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            domain_id: domain_id.into(),
            client_id: client_id.into(),
            user_id: user_id.into(),
        }
    }

    /// Checks whether this triple owns the given registration.
    #[must_use]
    pub fn owns(&self, resource: &ResourceRegistration) -> bool {
        resource.domain_id == self.domain_id
            && resource.client_id == self.client_id
            && resource.user_id == self.user_id
    }
}

/// Resource description submitted by a client on create and update.
///
/// Any `id` sent by the client is ignored: identifiers are always assigned
/// by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePayload {
    /// Scopes available on the resource.
    pub resource_scopes: Option<Vec<String>>,
    /// Human-readable description.
    pub description: Option<String>,
    /// Icon URI.
    pub icon_uri: Option<String>,
    /// Human-readable name.
    pub name: Option<String>,
    /// Resource type.
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
}

impl ResourcePayload {
    /// Creates a payload with the given scopes.
    #[must_use]
    pub fn with_scopes<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            resource_scopes: Some(scopes.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A registered protected resource (UMA resource set).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRegistration {
    /// Unique identifier, assigned by the server.
    pub id: String,
    /// Security domain identifier.
    pub domain_id: String,
    /// Owning client.
    pub client_id: String,
    /// Owning end-user.
    pub user_id: String,
    /// Scopes available on the resource. Never empty.
    pub resource_scopes: Vec<String>,
    /// Human-readable description.
    pub description: Option<String>,
    /// Icon URI.
    pub icon_uri: Option<String>,
    /// Human-readable name.
    pub name: Option<String>,
    /// Resource type.
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    /// When the registration was created.
    pub created_at: DateTime<Utc>,
    /// When the registration was last updated.
    pub updated_at: DateTime<Utc>,
}

impl ResourceRegistration {
    /// Creates a registration for `owner` from a validated payload.
    ///
    /// A fresh identifier is generated and both timestamps are set to now.
    #[must_use]
    pub fn new(owner: &ResourceOwner, payload: ResourcePayload) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(),
            domain_id: owner.domain_id.clone(),
            client_id: owner.client_id.clone(),
            user_id: owner.user_id.clone(),
            resource_scopes: normalize_scopes(payload.resource_scopes.unwrap_or_default()),
            description: payload.description,
            icon_uri: payload.icon_uri,
            name: payload.name,
            resource_type: payload.resource_type,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the mutable fields of a validated payload.
    ///
    /// Identifier, ownership and `created_at` are left untouched.
    pub fn apply(&mut self, payload: ResourcePayload) {
        if let Some(scopes) = payload.resource_scopes {
            self.resource_scopes = normalize_scopes(scopes);
        }
        self.description = payload.description;
        self.icon_uri = payload.icon_uri;
        self.name = payload.name;
        self.resource_type = payload.resource_type;
        self.updated_at = Utc::now();
    }

    /// Returns the ownership key of this registration.
    #[must_use]
    pub fn owner(&self) -> ResourceOwner {
        ResourceOwner::new(&self.domain_id, &self.client_id, &self.user_id)
    }
}

/// Removes duplicate scopes, keeping the first occurrence.
fn normalize_scopes(scopes: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    scopes
        .into_iter()
        .filter(|scope| seen.insert(scope.clone()))
        .collect()
}
