//! # am-service
//!
//! Administrative lifecycle services for resource registrations and
//! identity providers.
//!
//! Every mutation follows the same ordering: validate the payload, load the
//! existing entity, check references (identity provider deletion only),
//! mutate the store, then propagate side effects. The first failing stage
//! short-circuits the rest.
//!
//! ## Modules
//!
//! - [`error`] - [`ManagementError`] taxonomy and categories
//! - [`validation`] - synchronous payload validation
//! - [`reference`] - client reference checks before identity provider deletion
//! - [`notify`] - fire-and-forget domain reload dispatch
//! - [`resource`] - [`ResourceRegistrationService`]
//! - [`identity_provider`] - [`IdentityProviderService`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use am_service::{
//!     ClientReferenceChecker, IdentityProviderService, ReloadNotifier, TracingDomainReloader,
//! };
//! use am_storage_memory::{InMemoryClientProvider, InMemoryIdentityProviderProvider};
//!
//! let clients = Arc::new(InMemoryClientProvider::new());
//! let service = IdentityProviderService::new(
//!     Arc::new(InMemoryIdentityProviderProvider::new()),
//!     Arc::new(ClientReferenceChecker::new(clients)),
//!     ReloadNotifier::new(Arc::new(TracingDomainReloader::new())),
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod identity_provider;
pub mod notify;
pub mod reference;
pub mod resource;
pub mod validation;

pub use error::{ErrorCategory, ManagementError, ManagementResult};
pub use identity_provider::IdentityProviderService;
pub use notify::{DomainReloader, ReloadError, ReloadNotifier, TracingDomainReloader};
pub use reference::{ClientReferenceChecker, ReferenceChecker};
pub use resource::{ResourceRegistrationService, resource_set_location};
