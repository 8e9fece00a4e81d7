//! Injectable latency strategy
//!
//! The mock facade pauses before every operation to model network
//! latency. The pause is a trait seam so tests swap in [`NoLatency`] and
//! run without real timers.

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

/// Delay incurred before each mock operation, independent of outcome
#[async_trait]
pub trait Latency: Send + Sync {
    /// Suspend for one simulated network round trip
    async fn pause(&self);
}

/// Uniform random delay, the dashboard's simulated network latency
///
/// Defaults to the 300–500 ms window the mock service has always used.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    min_ms: u64,
    max_ms: u64,
}

impl SimulatedLatency {
    /// Delay drawn uniformly from `[min_ms, max_ms)`
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(300, 500)
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn pause(&self) {
        let jitter_ms = if self.max_ms > self.min_ms {
            rand::thread_rng().gen_range(self.min_ms..self.max_ms)
        } else {
            self.min_ms
        };
        sleep(Duration::from_millis(jitter_ms)).await;
    }
}

/// Zero-delay strategy for tests
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn pause(&self) {}
}
