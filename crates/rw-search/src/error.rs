//! Search error types.

use thiserror::Error;

/// Errors that can occur while querying a search backend.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP transport error, including timeouts and undecodable bodies.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The backend returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// No search endpoint is configured.
    #[error("search endpoint is not configured (set search.endpoint or RWATCH_SEARCH__ENDPOINT)")]
    NotConfigured,
}
