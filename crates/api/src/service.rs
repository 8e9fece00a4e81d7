//! MockApi: the mock API facade
//!
//! ## Design
//!
//! MockApi is a stateless facade over the engine: it holds an
//! `Arc<RecordStore>` reference plus the latency strategy and the rng that
//! feeds the synthetic trend. Every operation pauses first, then answers
//! with the uniform envelope the remote endpoint would produce; the
//! fallback coordinator relies on that parity.
//!
//! ## Envelope mapping
//!
//! | Outcome | Envelope |
//! |---------|----------|
//! | success | 200 / "success" / payload |
//! | missing record (detail, update, delete) | 404 / "record not found" / null |
//! | invalid list query | 400 / reason / null |

use crate::latency::{Latency, NoLatency, SimulatedLatency};
use datapanel_core::{
    ChartData, DataItem, Envelope, ItemId, ItemPatch, ListQuery, NewItem, Page, PanelError,
};
use datapanel_engine::{aggregate_by_category, run_list_query, synthetic_trend, RecordStore};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

const NOT_FOUND_MESSAGE: &str = "record not found";

/// Mock API facade over the in-memory record store
///
/// Serves the same six operations as the remote endpoint, with the same
/// envelopes, so it can stand in transparently when the transport fails.
///
/// # Example
///
/// ```ignore
/// use datapanel_api::MockApi;
/// use datapanel_core::{ListQuery, SystemClock};
/// use datapanel_engine::RecordStore;
/// use std::sync::Arc;
///
/// let store = Arc::new(RecordStore::with_seed(Arc::new(SystemClock)));
/// let api = MockApi::new(store);
/// let envelope = api.get_list(&ListQuery::default()).await;
/// assert!(envelope.is_success());
/// ```
pub struct MockApi {
    store: Arc<RecordStore>,
    latency: Arc<dyn Latency>,
    rng: Mutex<StdRng>,
}

impl MockApi {
    /// Facade with production defaults: 300–500 ms simulated latency and
    /// an entropy-seeded rng
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self::with_parts(
            store,
            Arc::new(SimulatedLatency::default()),
            StdRng::from_entropy(),
        )
    }

    /// Facade with explicit latency strategy and rng, for tests
    pub fn with_parts(store: Arc<RecordStore>, latency: Arc<dyn Latency>, rng: StdRng) -> Self {
        Self {
            store,
            latency,
            rng: Mutex::new(rng),
        }
    }

    /// Zero-latency facade over a store with a seeded rng, the test default
    pub fn instant(store: Arc<RecordStore>, rng_seed: u64) -> Self {
        Self::with_parts(store, Arc::new(NoLatency), StdRng::seed_from_u64(rng_seed))
    }

    /// The underlying record store
    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    /// List records with filters and pagination
    pub async fn get_list(&self, query: &ListQuery) -> Envelope<Page<DataItem>> {
        self.latency.pause().await;
        let items = self.store.list();
        match run_list_query(&items, query) {
            Ok(page) => Envelope::ok(page),
            Err(PanelError::InvalidQuery { reason }) => Envelope::bad_request(reason),
            Err(other) => Envelope::bad_request(other.to_string()),
        }
    }

    /// Fetch a single record by id
    pub async fn get_detail(&self, id: &ItemId) -> Envelope<DataItem> {
        self.latency.pause().await;
        match self.store.get(id) {
            Some(item) => Envelope::ok(item),
            None => Envelope::not_found(NOT_FOUND_MESSAGE),
        }
    }

    /// Create a record; the store assigns id and timestamps
    pub async fn create(&self, fields: &NewItem) -> Envelope<DataItem> {
        self.latency.pause().await;
        Envelope::ok(self.store.create(fields))
    }

    /// Merge a partial update over an existing record
    pub async fn update(&self, id: &ItemId, patch: &ItemPatch) -> Envelope<DataItem> {
        self.latency.pause().await;
        match self.store.update(id, patch) {
            Ok(item) => Envelope::ok(item),
            Err(PanelError::ItemNotFound { .. }) => Envelope::not_found(NOT_FOUND_MESSAGE),
            Err(other) => Envelope::bad_request(other.to_string()),
        }
    }

    /// Delete a record by id
    pub async fn delete(&self, id: &ItemId) -> Envelope<()> {
        self.latency.pause().await;
        match self.store.delete(id) {
            Ok(()) => Envelope::ok_empty(),
            Err(PanelError::ItemNotFound { .. }) => Envelope::not_found(NOT_FOUND_MESSAGE),
            Err(other) => Envelope::bad_request(other.to_string()),
        }
    }

    /// Chart payload: category aggregation plus the synthetic trend
    pub async fn get_chart(&self) -> Envelope<ChartData> {
        self.latency.pause().await;
        let items = self.store.list();
        let (categories, values) = aggregate_by_category(&items);
        let trend = synthetic_trend(self.store.clock().as_ref(), &mut *self.rng.lock());
        Envelope::ok(ChartData {
            categories,
            values,
            trend,
        })
    }
}
