//! Structural payload validation.
//!
//! Validation is synchronous and runs before any storage call, so a rejected
//! payload never causes partial side effects.

use am_model::{NewIdentityProvider, ResourcePayload, UpdateIdentityProvider};

use crate::error::{ManagementError, ManagementResult};

/// Validates a resource registration payload (create and update).
///
/// ## Errors
///
/// Returns [`ManagementError::InvalidRequest`] if `resource_scopes` is
/// missing, empty, or contains a blank scope.
pub fn validate_resource(payload: &ResourcePayload) -> ManagementResult<()> {
    let scopes = payload
        .resource_scopes
        .as_deref()
        .ok_or_else(|| ManagementError::invalid_request("resource_scopes is required"))?;

    if scopes.is_empty() {
        return Err(ManagementError::invalid_request(
            "resource_scopes must not be empty",
        ));
    }

    if scopes.iter().any(|scope| scope.trim().is_empty()) {
        return Err(ManagementError::invalid_request(
            "resource_scopes must not contain blank values",
        ));
    }

    Ok(())
}

/// Validates an identity provider creation request.
///
/// ## Errors
///
/// Returns [`ManagementError::InvalidRequest`] if the name or type is blank.
pub fn validate_new_identity_provider(request: &NewIdentityProvider) -> ManagementResult<()> {
    require("name", &request.name)?;
    require("type", &request.provider_type)
}

/// Validates an identity provider update request.
///
/// ## Errors
///
/// Returns [`ManagementError::InvalidRequest`] if the name is blank.
pub fn validate_identity_provider_update(request: &UpdateIdentityProvider) -> ManagementResult<()> {
    require("name", &request.name)
}

fn require(field: &str, value: &str) -> ManagementResult<()> {
    if value.trim().is_empty() {
        return Err(ManagementError::invalid_request(format!(
            "{field} must not be blank"
        )));
    }
    Ok(())
}
