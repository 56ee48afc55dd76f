//! # am-storage-memory
//!
//! In-memory implementations of the `am-storage` provider traits.
//!
//! Entities live in `tokio::sync::RwLock`-guarded maps keyed by id. The
//! backend is meant for tests and single-node development setups; nothing
//! survives a restart.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod identity_provider;
mod resource;

pub use client::InMemoryClientProvider;
pub use identity_provider::InMemoryIdentityProviderProvider;
pub use resource::InMemoryResourceRegistrationProvider;
