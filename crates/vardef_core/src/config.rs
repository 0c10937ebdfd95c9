//! Editor configuration.
//!
//! # Responsibility
//! - Describe where the backend lives and how logging is set up.
//! - Normalize and validate values before any component consumes them.
//!
//! # Invariants
//! - A validated base URL has an `http`/`https` scheme and no trailing `/`.
//! - Timeouts are strictly positive.

use crate::gateway::{GatewayError, GatewayResult};
use crate::logging::default_log_level;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Backend endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayConfig {
    /// Service root; endpoints are `{base_url}/vardefs` and `{base_url}/save`.
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Returns a normalized copy, or the first problem found.
    pub fn validate(&self) -> GatewayResult<Self> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(GatewayError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(GatewayError::InvalidConfig(format!(
                "base_url must use http or https, got `{trimmed}`"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(GatewayError::InvalidConfig(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
            timeout_secs: self.timeout_secs,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load-all and apply-all endpoint.
    pub fn vardefs_url(&self) -> String {
        self.endpoint("vardefs")
    }

    /// Save-one endpoint.
    pub fn save_url(&self) -> String {
        self.endpoint("save")
    }

    fn endpoint(&self, service: &str) -> String {
        format!("{}/{service}", self.base_url.trim_end_matches('/'))
    }
}

/// Top-level editor configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditorConfig {
    pub gateway: GatewayConfig,
    #[serde(default = "default_level")]
    pub log_level: String,
    /// Absolute log directory; logging stays off when absent.
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl EditorConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(raw: &str) -> GatewayResult<Self> {
        let parsed: Self = serde_json::from_str(raw)
            .map_err(|err| GatewayError::InvalidConfig(err.to_string()))?;
        Ok(Self {
            gateway: parsed.gateway.validate()?,
            ..parsed
        })
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_level() -> String {
    default_log_level().to_string()
}
