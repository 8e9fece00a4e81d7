//! datapanel-api: the mock API facade
//!
//! Exposes the six data-panel operations over the in-memory engine with
//! the same envelopes and latency shape as the remote endpoint, so the
//! client can fall back to it transparently.

pub mod latency;
pub mod service;

pub use latency::{Latency, NoLatency, SimulatedLatency};
pub use service::MockApi;
