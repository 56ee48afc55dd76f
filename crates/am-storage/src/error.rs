//! Storage error types.
//!
//! Backends report absence of an addressed entity as [`StorageError::NotFound`]
//! only from `update`/`delete`; lookups return `Ok(None)` instead.

use thiserror::Error;

/// Errors reported by the repository ports.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The addressed entity is not stored.
    #[error("{entity_type} {id} is not stored")]
    NotFound {
        /// Entity kind, e.g. `IdentityProvider`.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// A uniqueness constraint rejected the write.
    #[error("{entity_type} with {field} '{value}' is already stored")]
    Duplicate {
        /// Entity kind.
        entity_type: &'static str,
        /// Unique field.
        field: &'static str,
        /// Conflicting value.
        value: String,
    },

    /// A stored record could not be mapped to an entity.
    #[error("Stored record is invalid: {0}")]
    InvalidData(String),

    /// The backend could not be reached.
    #[error("Storage backend unavailable: {0}")]
    Connection(String),

    /// The backend rejected or failed a query.
    #[error("Storage query failed: {0}")]
    Query(String),

    /// An opaque field (e.g. provider configuration) failed to (de)serialize.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Any other backend failure.
    #[error("Storage failure: {0}")]
    Internal(String),
}

impl StorageError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(
        entity_type: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::Duplicate {
            entity_type,
            field,
            value: value.into(),
        }
    }

    /// Returns whether the entity was missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns whether a uniqueness constraint was violated.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result alias for the repository ports.
pub type StorageResult<T> = Result<T, StorageError>;
