//! datapanel-engine: record store and query engine
//!
//! The engine owns the mutable in-memory collection ([`RecordStore`]) and
//! the pure query layer over snapshots of it: list filtering and
//! pagination, category aggregation for the dashboard chart, and the
//! synthetic trend series.

pub mod query;
pub mod seed;
pub mod store;

pub use query::{aggregate_by_category, run_list_query, synthetic_trend, TREND_DAYS};
pub use seed::seed_items;
pub use store::RecordStore;
