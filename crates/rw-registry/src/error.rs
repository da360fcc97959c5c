//! Registry error types.

use thiserror::Error;

/// Errors that can occur while fetching the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// HTTP transport error.
    #[error("registry request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The registry answered with a non-success status.
    ///
    /// Captures are one-shot, so a 429 lands here too; `retry_after_secs`
    /// carries its `Retry-After` hint when the server sent one.
    #[error("registry returned {status}{}: {excerpt}", retry_hint(.retry_after_secs))]
    Status {
        status: u16,
        retry_after_secs: Option<u64>,
        /// Leading part of the response body.
        excerpt: String,
    },

    /// No registry URL is configured.
    #[error("registry URL is not configured (set registry.url or RWATCH_REGISTRY__URL)")]
    NotConfigured,
}

fn retry_hint(retry_after_secs: &Option<u64>) -> String {
    retry_after_secs.map_or_else(String::new, |secs| format!(" (retry after {secs}s)"))
}
