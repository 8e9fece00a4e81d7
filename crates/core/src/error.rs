//! Error types for the data-panel client
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! # Categories
//!
//! | Category | Variants | Intercepted by fallback? |
//! |----------|----------|--------------------------|
//! | Business | `ItemNotFound` | no, mapped to a 404 envelope |
//! | Validation | `InvalidQuery` | no, mapped to a 400 envelope |
//! | Transport | `Transport`, `RemoteRejected`, `Serialization` | yes |
//! | Config | `Config` | n/a (startup only) |

use thiserror::Error;

/// Result type alias for data-panel operations
pub type PanelResult<T> = std::result::Result<T, PanelError>;

/// Error types for the data-panel client
///
/// Transport-class errors (`Transport`, `RemoteRejected`, `Serialization`)
/// never reach the caller of the six client operations: the fallback
/// coordinator intercepts them and serves the mock equivalent instead.
/// `ItemNotFound` is a legitimate business outcome and surfaces as a 404
/// envelope.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PanelError {
    /// Record not found for detail/update/delete
    #[error("record not found: {id}")]
    ItemNotFound { id: String },

    /// Caller-side contract violation in list query parameters
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },

    /// Physical transport failure (connect error, timeout, non-2xx status)
    #[error("transport failure: {reason}")]
    Transport { reason: String },

    /// Logical failure: the exchange succeeded but the remote envelope
    /// carried a non-200 code
    #[error("remote rejected request: {code} {message}")]
    RemoteRejected { code: u16, message: String },

    /// Response body could not be decoded into an envelope
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// Configuration file could not be loaded or parsed
    #[error("config error: {reason}")]
    Config { reason: String },
}

impl PanelError {
    /// Build an `ItemNotFound` error from any displayable identifier
    pub fn item_not_found(id: impl ToString) -> Self {
        PanelError::ItemNotFound {
            id: id.to_string(),
        }
    }

    /// Build an `InvalidQuery` error
    pub fn invalid_query(reason: impl Into<String>) -> Self {
        PanelError::InvalidQuery {
            reason: reason.into(),
        }
    }

    /// Build a `Transport` error
    pub fn transport(reason: impl Into<String>) -> Self {
        PanelError::Transport {
            reason: reason.into(),
        }
    }

    /// Build a `Serialization` error
    pub fn serialization(reason: impl Into<String>) -> Self {
        PanelError::Serialization {
            reason: reason.into(),
        }
    }

    /// Build a `Config` error
    pub fn config(reason: impl Into<String>) -> Self {
        PanelError::Config {
            reason: reason.into(),
        }
    }

    /// True for errors the fallback coordinator downgrades to a mock call
    pub fn is_transport_class(&self) -> bool {
        matches!(
            self,
            PanelError::Transport { .. }
                | PanelError::RemoteRejected { .. }
                | PanelError::Serialization { .. }
        )
    }
}
