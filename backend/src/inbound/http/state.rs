//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` so they depend only on domain
//! ports and stay testable against any store that implements them.

use std::sync::Arc;

use crate::domain::advertiser::Advertiser;
use crate::domain::auth::AuthService;
use crate::domain::billing::Invoice;
use crate::domain::campaign::Campaign;
use crate::domain::creative::Creative;
use crate::domain::deal::Deal;
use crate::domain::inventory::Inventory;
use crate::domain::ports::{AudienceSegments, BillingLedger, RecordStore, SnapshotSource};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: Arc<AuthService>,
    pub advertisers: Arc<dyn RecordStore<Advertiser>>,
    pub inventory: Arc<dyn RecordStore<Inventory>>,
    pub deals: Arc<dyn RecordStore<Deal>>,
    pub campaigns: Arc<dyn RecordStore<Campaign>>,
    pub creatives: Arc<dyn RecordStore<Creative>>,
    pub invoices: Arc<dyn RecordStore<Invoice>>,
    pub snapshots: Arc<dyn SnapshotSource>,
    pub billing: Arc<dyn BillingLedger>,
    pub audiences: Arc<dyn AudienceSegments>,
}

impl HttpState {
    /// State whose every port is served by one `store`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use adtech::domain::auth::{AuthService, TokenService};
    /// use adtech::domain::ports::DemoCredentialVerifier;
    /// use adtech::inbound::http::state::HttpState;
    /// use adtech::outbound::memory::MemoryStore;
    /// use mockable::DefaultClock;
    ///
    /// let store = Arc::new(MemoryStore::seeded(Arc::new(DefaultClock)).unwrap());
    /// let tokens = TokenService::new(b"doc-secret", Arc::new(DefaultClock));
    /// let auth = AuthService::new(
    ///     store.clone(),
    ///     store.clone(),
    ///     Arc::new(DemoCredentialVerifier),
    ///     tokens,
    /// );
    /// let state = HttpState::backed_by(store, Arc::new(auth));
    /// assert!(state.campaigns.list().unwrap().len() > 0);
    /// ```
    pub fn backed_by<S>(store: Arc<S>, auth: Arc<AuthService>) -> Self
    where
        S: RecordStore<Advertiser>
            + RecordStore<Inventory>
            + RecordStore<Deal>
            + RecordStore<Campaign>
            + RecordStore<Creative>
            + RecordStore<Invoice>
            + SnapshotSource
            + BillingLedger
            + AudienceSegments
            + 'static,
    {
        Self {
            auth,
            advertisers: store.clone(),
            inventory: store.clone(),
            deals: store.clone(),
            campaigns: store.clone(),
            creatives: store.clone(),
            invoices: store.clone(),
            snapshots: store.clone(),
            billing: store.clone(),
            audiences: store,
        }
    }
}
