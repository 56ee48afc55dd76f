//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServiceConfig;
use crate::error::{Error, Result};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured log level.
///
/// ## Errors
///
/// Returns [`Error::Telemetry`] if a global subscriber is already installed.
pub fn init_tracing(config: &ServiceConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| Error::Telemetry(e.to_string()))?;

    tracing::debug!(log_level = %config.log_level, "Tracing initialized");
    Ok(())
}
