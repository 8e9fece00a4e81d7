//! Client configuration via `datapanel.toml`
//!
//! A simple config file instead of a builder: on first load a commented
//! default `datapanel.toml` is written next to wherever the caller points
//! us. To change settings, edit the file and restart.
//!
//! The optional `token` is the client-persisted bearer credential the
//! transport attaches as an `Authorization` header. No refresh logic:
//! whatever the file holds is what goes on the wire.

use datapanel_core::{PanelError, PanelResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name placed in the client's data directory.
pub const CONFIG_FILE_NAME: &str = "datapanel.toml";

fn default_base_url() -> String {
    "http://127.0.0.1:8080/api".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Client configuration loaded from `datapanel.toml`.
///
/// # Example
///
/// ```toml
/// # Remote API root every request path is joined onto
/// base_url = "http://127.0.0.1:8080/api"
///
/// # Request timeout in milliseconds
/// timeout_ms = 10000
///
/// # token = "..."
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Remote API root, e.g. `http://127.0.0.1:8080/api`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token attached as `Authorization` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Request timeout in milliseconds (default: 10000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientConfig {
    /// Load the config file, writing a commented default on first use.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the file cannot be read, written, or
    /// parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> PanelResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                PanelError::config(format!("failed to write {}: {}", path.display(), e))
            })?;
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|e| {
            PanelError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&raw).map_err(|e| {
            PanelError::config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Datapanel client configuration
#
# Remote API root every request path is joined onto.
base_url = "http://127.0.0.1:8080/api"

# Request timeout in milliseconds.
timeout_ms = 10000

# Bearer token attached as an Authorization header when present.
# token = "..."
"#
    }
}
