//! Management error types.
//!
//! Every lifecycle operation fails with a [`ManagementError`]. The first three
//! variants are classified domain errors that callers can act upon; anything
//! else coming out of a collaborator is wrapped once as
//! [`ManagementError::Technical`].

use am_storage::StorageError;
use thiserror::Error;

/// Errors returned by the lifecycle services.
#[derive(Debug, Error)]
pub enum ManagementError {
    /// The payload failed structural validation. No I/O was attempted.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The addressed entity does not exist.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        /// Type of entity (e.g., "IdentityProvider").
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// The identity provider is still referenced by clients.
    #[error("Identity provider {id} is still used by {clients} client(s)")]
    IdentityProviderInUse {
        /// Identity provider identifier.
        id: String,
        /// Number of referencing clients.
        clients: usize,
    },

    /// Unclassified collaborator failure.
    ///
    /// Only `message` is rendered; the cause is reachable through
    /// [`std::error::Error::source`].
    #[error("{message}")]
    Technical {
        /// Caller-safe description of the failed operation.
        message: String,
        /// Original storage error.
        #[source]
        source: StorageError,
    },
}

/// Coarse error category used by the transport edge to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller sent an invalid request.
    ClientError,
    /// The addressed entity does not exist.
    NotFound,
    /// The request conflicts with the current state.
    Conflict,
    /// Server-side failure.
    ServerError,
}

impl ManagementError {
    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Reclassifies a storage error surfacing from `context`.
    ///
    /// A storage-level not-found keeps its meaning; every other storage error
    /// becomes [`ManagementError::Technical`] and is logged with its cause.
    #[must_use]
    pub fn from_storage(context: impl Into<String>, err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            source => {
                let message = context.into();
                tracing::error!(error = %source, "{}", message);
                Self::Technical { message, source }
            }
        }
    }

    /// Returns whether this is a classified domain error.
    #[must_use]
    pub const fn is_classified(&self) -> bool {
        !matches!(self, Self::Technical { .. })
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRequest(_) => ErrorCategory::ClientError,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::IdentityProviderInUse { .. } => ErrorCategory::Conflict,
            Self::Technical { .. } => ErrorCategory::ServerError,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "invalid_request",
            Self::NotFound { .. } => "not_found",
            Self::IdentityProviderInUse { .. } => "identity_provider_in_use",
            Self::Technical { .. } => "technical_error",
        }
    }
}

/// Result type for lifecycle operations.
pub type ManagementResult<T> = Result<T, ManagementError>;
