//! Common test utilities and fixtures.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use am_model::{IdentityProvider, NewIdentityProvider, ResourceOwner, ResourceRegistration};
use am_service::{
    ClientReferenceChecker, DomainReloader, IdentityProviderService, ReferenceChecker,
    ReloadError, ReloadNotifier, ResourceRegistrationService,
};
use am_storage::{
    IdentityProviderProvider, ResourceRegistrationProvider, StorageError, StorageResult,
};
use am_storage_memory::{
    InMemoryClientProvider, InMemoryIdentityProviderProvider, InMemoryResourceRegistrationProvider,
};
use async_trait::async_trait;
use tokio::sync::Notify;

/// Initializes tracing for tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("am_service=debug")
        .with_test_writer()
        .try_init();
}

/// Polls `condition` until it holds or one second elapsed.
pub async fn eventually<F>(condition: F) -> bool
where
    F: Fn() -> bool,
{
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}

// ============================================================================
// Call counting
// ============================================================================

/// Per-method call counters of a store.
#[derive(Debug, Default)]
pub struct CallLog {
    reads: AtomicUsize,
    creates: AtomicUsize,
    updates: AtomicUsize,
    deletes: AtomicUsize,
}

impl CallLog {
    fn read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    /// Total number of store calls of any kind.
    pub fn total(&self) -> usize {
        self.reads() + self.creates() + self.updates() + self.deletes()
    }
}

fn injected_failure() -> StorageError {
    StorageError::Connection("connection reset by peer".to_string())
}

/// Resource store that counts calls and can be told to fail writes.
#[derive(Debug, Default)]
pub struct CountingResourceStore {
    inner: InMemoryResourceRegistrationProvider,
    calls: CallLog,
    fail_writes: AtomicBool,
}

impl CountingResourceStore {
    pub fn calls(&self) -> &CallLog {
        &self.calls
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    fn check_write(&self) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(injected_failure());
        }
        Ok(())
    }
}

#[async_trait]
impl ResourceRegistrationProvider for CountingResourceStore {
    async fn create(&self, resource: &ResourceRegistration) -> StorageResult<()> {
        self.calls.creates.fetch_add(1, Ordering::SeqCst);
        self.check_write()?;
        self.inner.create(resource).await
    }

    async fn update(&self, resource: &ResourceRegistration) -> StorageResult<()> {
        self.calls.updates.fetch_add(1, Ordering::SeqCst);
        self.check_write()?;
        self.inner.update(resource).await
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        self.calls.deletes.fetch_add(1, Ordering::SeqCst);
        self.check_write()?;
        self.inner.delete(id).await
    }

    async fn get_by_id(&self, id: &str) -> StorageResult<Option<ResourceRegistration>> {
        self.calls.read();
        self.inner.get_by_id(id).await
    }

    async fn get(
        &self,
        owner: &ResourceOwner,
        id: &str,
    ) -> StorageResult<Option<ResourceRegistration>> {
        self.calls.read();
        self.inner.get(owner, id).await
    }

    async fn list(&self, owner: &ResourceOwner) -> StorageResult<Vec<ResourceRegistration>> {
        self.calls.read();
        self.inner.list(owner).await
    }

    async fn list_by_domain(&self, domain_id: &str) -> StorageResult<Vec<ResourceRegistration>> {
        self.calls.read();
        self.inner.list_by_domain(domain_id).await
    }
}

/// Identity provider store that counts calls and can be told to fail writes.
#[derive(Debug, Default)]
pub struct CountingIdentityProviderStore {
    inner: InMemoryIdentityProviderProvider,
    calls: CallLog,
    fail_writes: AtomicBool,
}

impl CountingIdentityProviderStore {
    pub fn calls(&self) -> &CallLog {
        &self.calls
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Stores a provider without going through the counters.
    pub async fn seed(&self, provider: &IdentityProvider) {
        self.inner
            .create(provider)
            .await
            .expect("seeding identity provider");
    }

    /// Reads a provider without going through the counters.
    pub async fn peek(&self, id: &str) -> Option<IdentityProvider> {
        self.inner.get_by_id(id).await.expect("reading identity provider")
    }

    fn check_write(&self) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(injected_failure());
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityProviderProvider for CountingIdentityProviderStore {
    async fn create(&self, provider: &IdentityProvider) -> StorageResult<()> {
        self.calls.creates.fetch_add(1, Ordering::SeqCst);
        self.check_write()?;
        self.inner.create(provider).await
    }

    async fn update(&self, provider: &IdentityProvider) -> StorageResult<()> {
        self.calls.updates.fetch_add(1, Ordering::SeqCst);
        self.check_write()?;
        self.inner.update(provider).await
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        self.calls.deletes.fetch_add(1, Ordering::SeqCst);
        self.check_write()?;
        self.inner.delete(id).await
    }

    async fn get_by_id(&self, id: &str) -> StorageResult<Option<IdentityProvider>> {
        self.calls.read();
        self.inner.get_by_id(id).await
    }

    async fn list_by_domain(&self, domain: &str) -> StorageResult<Vec<IdentityProvider>> {
        self.calls.read();
        self.inner.list_by_domain(domain).await
    }
}

/// Reference checker whose query always fails.
#[derive(Debug, Default)]
pub struct BrokenReferenceChecker;

#[async_trait]
impl ReferenceChecker for BrokenReferenceChecker {
    async fn count_referencing_clients(&self, _identity_provider_id: &str) -> StorageResult<usize> {
        Err(StorageError::Query("clients collection unavailable".to_string()))
    }
}

// ============================================================================
// Reloaders
// ============================================================================

/// Reloader recording every reloaded domain.
#[derive(Debug, Default)]
pub struct RecordingReloader {
    domains: Mutex<Vec<String>>,
    signal: Notify,
}

impl RecordingReloader {
    /// Domains reloaded so far, in dispatch order.
    pub fn domains(&self) -> Vec<String> {
        self.domains.lock().unwrap().clone()
    }

    /// Waits until at least `count` reloads happened.
    pub async fn wait_for(&self, count: usize) -> Vec<String> {
        tokio::time::timeout(Duration::from_secs(1), async {
            loop {
                if self.domains.lock().unwrap().len() >= count {
                    break;
                }
                self.signal.notified().await;
            }
        })
        .await
        .expect("domain reload was not dispatched in time");
        self.domains()
    }
}

#[async_trait]
impl DomainReloader for RecordingReloader {
    async fn reload(&self, domain: &str) -> Result<(), ReloadError> {
        self.domains.lock().unwrap().push(domain.to_string());
        self.signal.notify_one();
        Ok(())
    }
}

/// Reloader that always fails.
#[derive(Debug, Default)]
pub struct FailingReloader;

#[async_trait]
impl DomainReloader for FailingReloader {
    async fn reload(&self, domain: &str) -> Result<(), ReloadError> {
        Err(ReloadError::Failed(format!("gateway for {domain} unreachable")))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Resource registration service over a counting in-memory store.
pub struct ResourceEnv {
    pub store: Arc<CountingResourceStore>,
    pub service: ResourceRegistrationService<CountingResourceStore>,
}

impl ResourceEnv {
    pub fn new() -> Self {
        init_tracing();
        let store = Arc::new(CountingResourceStore::default());
        let service = ResourceRegistrationService::new(Arc::clone(&store));
        Self { store, service }
    }
}

/// Owner used by the UMA scenarios: domain `123`, client `api`, user `456`.
pub fn owner() -> ResourceOwner {
    ResourceOwner::new("123", "api", "456")
}

/// Identity provider service type used by the fixtures.
pub type TestIdentityProviderService<C, R> =
    IdentityProviderService<CountingIdentityProviderStore, C, R>;

/// Identity provider service over in-memory stores and a recording reloader.
pub struct IdentityProviderEnv {
    pub store: Arc<CountingIdentityProviderStore>,
    pub clients: Arc<InMemoryClientProvider>,
    pub reloader: Arc<RecordingReloader>,
    pub service: TestIdentityProviderService<
        ClientReferenceChecker<InMemoryClientProvider>,
        RecordingReloader,
    >,
}

impl IdentityProviderEnv {
    pub fn new() -> Self {
        init_tracing();
        let store = Arc::new(CountingIdentityProviderStore::default());
        let clients = Arc::new(InMemoryClientProvider::new());
        let reloader = Arc::new(RecordingReloader::default());
        let service = IdentityProviderService::new(
            Arc::clone(&store),
            Arc::new(ClientReferenceChecker::new(Arc::clone(&clients))),
            ReloadNotifier::new(Arc::clone(&reloader)),
        );
        Self {
            store,
            clients,
            reloader,
            service,
        }
    }

    /// Stores a provider with a fixed id directly in the backing store.
    pub async fn seed(
        &self,
        domain: &str,
        id: &str,
        name: &str,
        provider_type: &str,
    ) -> IdentityProvider {
        let mut provider =
            IdentityProvider::new(domain, NewIdentityProvider::new(name, provider_type));
        provider.id = id.to_string();
        self.store.seed(&provider).await;
        provider
    }
}
