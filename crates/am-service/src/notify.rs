//! Domain reload notifications.
//!
//! After an identity provider is created or updated, the domain's runtime
//! configuration must be reloaded so the gateway picks up the change. The
//! reload is dispatched as a detached task: the mutation result is returned
//! to the caller as soon as persistence succeeds, and reload failures are
//! only logged and counted.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use am_core::ServiceConfig;
use async_trait::async_trait;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Errors reported by a [`DomainReloader`].
#[derive(Debug, Error)]
pub enum ReloadError {
    /// The domain is unknown to the runtime.
    #[error("domain not found: {0}")]
    DomainNotFound(String),

    /// The reload itself failed.
    #[error("domain reload failed: {0}")]
    Failed(String),
}

/// Dependent subsystem holding per-domain runtime state.
#[async_trait]
pub trait DomainReloader: Send + Sync + 'static {
    /// Reloads the runtime state of `domain`.
    async fn reload(&self, domain: &str) -> Result<(), ReloadError>;
}

/// Reloader that only records reload requests in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDomainReloader;

impl TracingDomainReloader {
    /// Creates a new tracing reloader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DomainReloader for TracingDomainReloader {
    async fn reload(&self, domain: &str) -> Result<(), ReloadError> {
        tracing::info!(domain = %domain, "domain_reload_requested");
        Ok(())
    }
}

/// Fire-and-forget dispatcher in front of a [`DomainReloader`].
pub struct ReloadNotifier<R>
where
    R: DomainReloader,
{
    reloader: Arc<R>,
    enabled: bool,
    failures: Arc<AtomicU64>,
}

impl<R: DomainReloader> Clone for ReloadNotifier<R> {
    fn clone(&self) -> Self {
        Self {
            reloader: Arc::clone(&self.reloader),
            enabled: self.enabled,
            failures: Arc::clone(&self.failures),
        }
    }
}

impl<R: DomainReloader> ReloadNotifier<R> {
    /// Creates an enabled notifier.
    pub fn new(reloader: Arc<R>) -> Self {
        Self {
            reloader,
            enabled: true,
            failures: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Creates a notifier honouring `domain_reload_enabled`.
    pub fn from_config(reloader: Arc<R>, config: &ServiceConfig) -> Self {
        let mut notifier = Self::new(reloader);
        notifier.enabled = config.domain_reload_enabled;
        notifier
    }

    /// Returns whether reloads are dispatched.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of dispatched reloads that failed so far.
    #[must_use]
    pub fn failed_reloads(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Schedules a reload of `domain` on the current Tokio runtime.
    ///
    /// Returns the handle of the detached task, or `None` when reloads are
    /// disabled or no runtime is available. A missing runtime counts as a
    /// failed reload. Callers are free to drop the handle.
    pub fn notify_domain_changed(&self, domain: &str) -> Option<JoinHandle<()>> {
        if !self.enabled {
            tracing::debug!(domain = %domain, "Domain reload disabled, skipping");
            return None;
        }

        let Ok(runtime) = Handle::try_current() else {
            self.failures.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(domain = %domain, "No async runtime, domain reload skipped");
            return None;
        };

        let reloader = Arc::clone(&self.reloader);
        let failures = Arc::clone(&self.failures);
        let domain = domain.to_string();

        Some(runtime.spawn(async move {
            match reloader.reload(&domain).await {
                Ok(()) => tracing::debug!(domain = %domain, "Domain reloaded"),
                Err(e) => {
                    failures.fetch_add(1, Ordering::Relaxed);
                    tracing::warn!(domain = %domain, error = %e, "Domain reload failed");
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingReloader;

    #[async_trait]
    impl DomainReloader for FailingReloader {
        async fn reload(&self, domain: &str) -> Result<(), ReloadError> {
            Err(ReloadError::DomainNotFound(domain.to_string()))
        }
    }

    #[tokio::test]
    async fn failures_are_counted_not_propagated() {
        let notifier = ReloadNotifier::new(Arc::new(FailingReloader));

        let handle = notifier.notify_domain_changed("myorg").unwrap();
        handle.await.unwrap();

        assert_eq!(notifier.failed_reloads(), 1);
    }

    #[tokio::test]
    async fn successful_reload_is_not_counted() {
        let notifier = ReloadNotifier::new(Arc::new(TracingDomainReloader::new()));

        notifier.notify_domain_changed("myorg").unwrap().await.unwrap();

        assert_eq!(notifier.failed_reloads(), 0);
    }

    #[test]
    fn missing_runtime_is_counted_as_failure() {
        let notifier = ReloadNotifier::new(Arc::new(TracingDomainReloader::new()));

        assert!(notifier.notify_domain_changed("myorg").is_none());
        assert_eq!(notifier.failed_reloads(), 1);
    }

    #[tokio::test]
    async fn disabled_notifier_dispatches_nothing() {
        let mut config = ServiceConfig::for_testing();
        config.domain_reload_enabled = false;
        let notifier = ReloadNotifier::from_config(Arc::new(FailingReloader), &config);

        assert!(!notifier.is_enabled());
        assert!(notifier.notify_domain_changed("myorg").is_none());
        assert_eq!(notifier.failed_reloads(), 0);
    }
}
