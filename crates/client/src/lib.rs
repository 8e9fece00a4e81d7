//! datapanel-client: remote transport and fallback coordinator
//!
//! The outward-facing half of the data panel: [`HttpTransport`] speaks the
//! remote endpoint's HTTP surface (bearer auth, uniform envelopes, 10 s
//! timeout), and [`DataClient`] wraps every call with the mock fallback so
//! callers always receive an envelope, backend up or down.

pub mod config;
pub mod fallback;
pub mod transport;

pub use config::{ClientConfig, CONFIG_FILE_NAME};
pub use fallback::{with_fallback, DataClient};
pub use transport::{HttpTransport, Transport};
