//! # am-storage
//!
//! Storage abstraction traits for the access management lifecycle services.
//!
//! This crate defines the repository ports that concrete storage backends
//! implement (see `am-storage-memory` for the in-memory backend).
//!
//! ## Provider Traits
//!
//! - [`ResourceRegistrationProvider`] - CRUD operations for resource registrations
//! - [`IdentityProviderProvider`] - CRUD operations for identity providers
//! - [`ClientProvider`] - CRUD operations and reference queries for clients

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod identity_provider;
pub mod resource;

pub use client::ClientProvider;
pub use error::{StorageError, StorageResult};
pub use identity_provider::IdentityProviderProvider;
pub use resource::ResourceRegistrationProvider;
