//! Service configuration.
//!
//! Configuration is loaded from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration shared by the lifecycle services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Public base URL, used to build location references for created resources.
    pub base_url: String,

    /// Whether domain reloads are dispatched after identity provider writes.
    pub domain_reload_enabled: bool,

    /// Log filter directive.
    pub log_level: String,
}

impl ServiceConfig {
    /// Loads configuration from environment variables.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::Config`] if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let base_url = std::env::var("AM_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "http://localhost:8092".to_string());

        let domain_reload_enabled = match std::env::var("AM_DOMAIN_RELOAD_ENABLED") {
            Ok(value) => parse_flag("AM_DOMAIN_RELOAD_ENABLED", &value)?,
            Err(_) => true,
        };

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            base_url,
            domain_reload_enabled,
            log_level,
        })
    }

    /// Creates a configuration for testing.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            base_url: "http://localhost".to_string(),
            domain_reload_enabled: true,
            log_level: "debug".to_string(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8092".to_string(),
            domain_reload_enabled: true,
            log_level: "info".to_string(),
        }
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(Error::invalid_var(name, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_enables_reload() {
        let config = ServiceConfig::default();

        assert!(config.domain_reload_enabled);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("X", "TRUE").unwrap());
        assert!(parse_flag("X", " 1 ").unwrap());
        assert!(!parse_flag("X", "off").unwrap());

        let err = parse_flag("X", "sometimes").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
