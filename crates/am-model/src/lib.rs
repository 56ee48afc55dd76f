//! # am-model
//!
//! Domain models for the access management lifecycle services.
//!
//! - [`ResourceRegistration`] - UMA resource set owned by a domain/client/user triple
//! - [`IdentityProvider`] - authentication source attached to a security domain
//! - [`Client`] - OAuth 2.0 client, the dependent of identity providers

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod identity_provider;
pub mod resource;

pub use client::Client;
pub use identity_provider::{IdentityProvider, NewIdentityProvider, UpdateIdentityProvider};
pub use resource::{ResourceOwner, ResourcePayload, ResourceRegistration};

/// Generates a fresh opaque entity identifier.
#[must_use]
pub fn generate_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
