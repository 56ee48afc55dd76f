//! Client domain model.
//!
//! Clients represent applications that authenticate end-users through the
//! identity providers of their security domain. Only the attributes the
//! lifecycle services rely on are modelled here.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generate_id;

/// An OAuth 2.0 / OIDC client registered in a security domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    // === Identity ===
    /// Unique identifier.
    pub id: String,
    /// Security domain this client belongs to.
    pub domain: String,
    /// OAuth `client_id`.
    pub client_id: String,
    /// Display name.
    pub name: Option<String>,
    /// Whether the client is enabled.
    pub enabled: bool,

    // === Authentication ===
    /// Identity providers this client authenticates users through.
    pub identities: HashSet<String>,

    // === Timestamps ===
    /// When the client was created.
    pub created_at: DateTime<Utc>,
    /// When the client was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Creates a new enabled client with the given `client_id`.
    #[must_use]
    pub fn new(domain: impl Into<String>, client_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(),
            domain: domain.into(),
            client_id: client_id.into(),
            name: None,
            enabled: true,
            identities: HashSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds an identity provider to the client.
    #[must_use]
    pub fn with_identity_provider(mut self, identity_provider_id: impl Into<String>) -> Self {
        self.identities.insert(identity_provider_id.into());
        self
    }

    /// Checks whether the client authenticates through the given identity provider.
    #[must_use]
    pub fn uses_identity_provider(&self, identity_provider_id: &str) -> bool {
        self.identities.contains(identity_provider_id)
    }
}
