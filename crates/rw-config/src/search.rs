//! External search backend configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Minimum pause between two consecutive search calls, in milliseconds.
const fn default_min_delay_ms() -> u64 {
    3_000
}

const fn default_results_per_query() -> usize {
    10
}

const fn default_timeout_secs() -> u64 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// JSON search endpoint (e.g., `https://search.example.com/v1/search`).
    #[serde(default)]
    pub endpoint: String,

    /// API key sent as `X-API-KEY`, if the endpoint wants one.
    #[serde(default)]
    pub api_key: String,

    /// Minimum delay between consecutive calls. Shared by every caller of one session.
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    /// Results requested per query.
    #[serde(default = "default_results_per_query")]
    pub results_per_query: usize,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            min_delay_ms: default_min_delay_ms(),
            results_per_query: default_results_per_query(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `results_per_query` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.results_per_query == 0 {
            return Err(ConfigError::InvalidValue {
                field: "search.results_per_query".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
