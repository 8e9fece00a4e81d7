//! Datapanel - admin data-panel client with a transparent mock fallback
//!
//! Datapanel is the data layer of an administrative dashboard: six
//! CRUD/chart operations served by a remote HTTP API or, transparently on
//! any transport failure, by an in-memory mock store seeded with
//! development data.
//!
//! # Quick Start
//!
//! ```ignore
//! use datapanel::{ClientConfig, DataClient, ListQuery};
//!
//! let config = ClientConfig::load("datapanel.toml")?;
//! let client = DataClient::from_config(&config)?;
//!
//! // Always resolves to an envelope, backend up or down
//! let page = client.get_list(&ListQuery::default()).await;
//! ```
//!
//! # Architecture
//!
//! Calls flow client → transport → (on failure) mock facade → query
//! engine → record store. The mock facade answers with the same envelopes
//! as the remote endpoint, so degraded mode is invisible to callers.

pub use datapanel_client::{
    with_fallback, ClientConfig, DataClient, HttpTransport, Transport, CONFIG_FILE_NAME,
};

pub use datapanel_api::{Latency, MockApi, NoLatency, SimulatedLatency};

pub use datapanel_engine::{
    aggregate_by_category, run_list_query, seed_items, synthetic_trend, RecordStore, TREND_DAYS,
};

pub use datapanel_core::{
    ChartData, Clock, DataItem, Envelope, ItemId, ItemPatch, ListQuery, ManualClock, NewItem,
    Page, PanelError, PanelResult, SystemClock, TrendPoint, CODE_BAD_REQUEST, CODE_NOT_FOUND,
    CODE_OK,
};
