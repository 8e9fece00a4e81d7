//! Uniform response envelope
//!
//! Every API operation, remote or mock, resolves to the same wrapper:
//! `{code, message, data}`. Success is `code == 200` with `message =
//! "success"`; a missing record is `code == 404` with `data = null`; an
//! invalid list query is `code == 400`. The transport layer treats any
//! non-200 code on an otherwise-successful exchange as a logical failure.

use serde::{Deserialize, Serialize};

/// Envelope code for a successful operation
pub const CODE_OK: u16 = 200;
/// Envelope code for an invalid request
pub const CODE_BAD_REQUEST: u16 = 400;
/// Envelope code for a missing record
pub const CODE_NOT_FOUND: u16 = 404;

/// Uniform `{code, message, data}` wrapper around every API result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Status code: 200 on success, 404 for a missing record, 400 for a
    /// caller contract violation
    pub code: u16,
    /// Human-readable outcome, `"success"` on the happy path
    pub message: String,
    /// Payload; `None` on failure and for payload-free successes (delete)
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying a payload
    pub fn ok(data: T) -> Self {
        Self {
            code: CODE_OK,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Successful envelope with no payload (delete)
    pub fn ok_empty() -> Self {
        Self {
            code: CODE_OK,
            message: "success".to_string(),
            data: None,
        }
    }

    /// 404 envelope for a missing record
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: CODE_NOT_FOUND,
            message: message.into(),
            data: None,
        }
    }

    /// 400 envelope for a caller contract violation
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: CODE_BAD_REQUEST,
            message: message.into(),
            data: None,
        }
    }

    /// True when the envelope carries a 200 code
    pub fn is_success(&self) -> bool {
        self.code == CODE_OK
    }

    /// Map the payload type, preserving code and message
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            code: self.code,
            message: self.message,
            data: self.data.map(f),
        }
    }
}
