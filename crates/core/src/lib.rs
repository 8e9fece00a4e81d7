//! datapanel-core: shared types for the data-panel client
//!
//! This crate defines the vocabulary the other layers speak:
//! - [`types`]: records, query parameters, paged and chart payloads
//! - [`envelope`]: the uniform `{code, message, data}` response wrapper
//! - [`error`]: the error taxonomy and the `PanelResult` alias
//! - [`clock`]: the injectable time source for store-assigned timestamps

pub mod clock;
pub mod envelope;
pub mod error;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use envelope::{Envelope, CODE_BAD_REQUEST, CODE_NOT_FOUND, CODE_OK};
pub use error::{PanelError, PanelResult};
pub use types::{ChartData, DataItem, ItemId, ItemPatch, ListQuery, NewItem, Page, TrendPoint};
