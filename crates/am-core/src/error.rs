//! Error handling for process-level concerns.
//!
//! Lifecycle operations report their own taxonomy (see `am-service`); this
//! type only covers configuration and bootstrap failures. Messages stay
//! generic enough to be logged without exposing secrets.

use thiserror::Error;

/// Result type alias using the core error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or bootstrapping the services.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("telemetry error: {0}")]
    Telemetry(String),
}

impl Error {
    /// Creates a configuration error for an environment variable that could not be parsed.
    #[must_use]
    pub fn invalid_var(name: &str, value: &str) -> Self {
        Self::Config(format!("invalid value '{value}' for {name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_var_names_the_variable() {
        let err = Error::invalid_var("AM_DOMAIN_RELOAD_ENABLED", "maybe");
        assert_eq!(
            err.to_string(),
            "configuration error: invalid value 'maybe' for AM_DOMAIN_RELOAD_ENABLED"
        );
    }
}
