//! Fallback coordinator: remote first, mock on failure
//!
//! ## Design
//!
//! [`with_fallback`] is the whole policy as one combinator: resolve the
//! remote attempt, and on any propagated failure log a warning and resolve
//! the mock equivalent instead. [`DataClient`] applies it to each of the
//! six operations, so the caller-visible contract is identical whether
//! real or mock data served the request.
//!
//! ## Guarantee
//!
//! Every operation returns an envelope (success or an explicit 404/400),
//! never an error. A 404 produced by the mock store itself is a business
//! outcome and passes through untouched; only transport-class failures
//! trigger the fallback.

use crate::config::ClientConfig;
use crate::transport::{HttpTransport, Transport};
use datapanel_api::MockApi;
use datapanel_core::{
    ChartData, DataItem, Envelope, ItemId, ItemPatch, ListQuery, NewItem, Page, PanelResult,
    SystemClock,
};
use datapanel_engine::RecordStore;
use std::future::Future;
use std::sync::Arc;
use tracing::warn;

/// Resolve `remote`; on failure, log and resolve `mock` instead
///
/// The mock future is only polled when the remote attempt failed.
pub async fn with_fallback<T, R, M>(operation: &'static str, remote: R, mock: M) -> Envelope<T>
where
    R: Future<Output = PanelResult<Envelope<T>>>,
    M: Future<Output = Envelope<T>>,
{
    match remote.await {
        Ok(envelope) => envelope,
        Err(error) => {
            warn!(error = %error, "{} failed, serving mock data", operation);
            mock.await
        }
    }
}

/// Data-panel client: remote transport with a transparent mock fallback
///
/// # Example
///
/// ```ignore
/// use datapanel_client::{ClientConfig, DataClient};
/// use datapanel_core::ListQuery;
///
/// let config = ClientConfig::load("datapanel.toml")?;
/// let client = DataClient::from_config(&config)?;
///
/// // Always an envelope, even with the backend down
/// let page = client.get_list(&ListQuery::default()).await;
/// assert!(page.is_success());
/// ```
pub struct DataClient {
    transport: Arc<dyn Transport>,
    mock: MockApi,
}

impl DataClient {
    /// Client over an explicit transport and mock facade
    pub fn new(transport: Arc<dyn Transport>, mock: MockApi) -> Self {
        Self { transport, mock }
    }

    /// Production wiring: HTTP transport from the config, seeded mock
    /// store on the system clock
    ///
    /// # Errors
    ///
    /// `Transport` if the HTTP client cannot be constructed.
    pub fn from_config(config: &ClientConfig) -> PanelResult<Self> {
        let transport = Arc::new(HttpTransport::new(config)?);
        let store = Arc::new(RecordStore::with_seed(Arc::new(SystemClock)));
        Ok(Self::new(transport, MockApi::new(store)))
    }

    /// The mock facade backing the degraded mode
    pub fn mock(&self) -> &MockApi {
        &self.mock
    }

    /// List records; mock page on transport failure
    pub async fn get_list(&self, query: &ListQuery) -> Envelope<Page<DataItem>> {
        with_fallback(
            "get_list",
            self.transport.get_list(query),
            self.mock.get_list(query),
        )
        .await
    }

    /// Fetch one record; mock detail on transport failure
    pub async fn get_detail(&self, id: &ItemId) -> Envelope<DataItem> {
        with_fallback(
            "get_detail",
            self.transport.get_detail(id),
            self.mock.get_detail(id),
        )
        .await
    }

    /// Create a record; mock create on transport failure
    pub async fn create(&self, fields: &NewItem) -> Envelope<DataItem> {
        with_fallback(
            "create",
            self.transport.create(fields),
            self.mock.create(fields),
        )
        .await
    }

    /// Update a record; mock update on transport failure
    pub async fn update(&self, id: &ItemId, patch: &ItemPatch) -> Envelope<DataItem> {
        with_fallback(
            "update",
            self.transport.update(id, patch),
            self.mock.update(id, patch),
        )
        .await
    }

    /// Delete a record; mock delete on transport failure
    pub async fn delete(&self, id: &ItemId) -> Envelope<()> {
        with_fallback(
            "delete",
            self.transport.delete(id),
            self.mock.delete(id),
        )
        .await
    }

    /// Chart payload; mock aggregation on transport failure
    pub async fn get_chart(&self) -> Envelope<ChartData> {
        with_fallback(
            "get_chart",
            self.transport.get_chart(),
            self.mock.get_chart(),
        )
        .await
    }
}
