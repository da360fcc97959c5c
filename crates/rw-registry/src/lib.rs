//! # rw-registry
//!
//! Registry page fetching and row normalization for regwatch.
//!
//! - [`RegistryClient`] downloads the registry listing over HTTP.
//! - [`html::table_rows`] turns the page into raw cell rows.
//! - [`normalize::normalize_rows`] maps rows onto fields and merges the
//!   per-license rows of each company into one
//!   [`RegistryEntity`](rw_core::entities::RegistryEntity).

pub mod html;
pub mod normalize;

mod error;
mod http;

pub use error::RegistryError;
pub use normalize::{NormalizeReport, RegistryRow, RowDefect, SkipCounts};

use rw_config::{RegistryConfig, RowLayout};

/// Parse a registry page that is already in memory.
///
/// A page with no data rows yields an empty report; callers decide whether
/// that is an anomaly.
#[must_use]
pub fn parse_page(html: &str, layout: &RowLayout) -> NormalizeReport {
    let rows = html::table_rows(html);
    if rows.is_empty() {
        tracing::warn!("registry page contained no table rows");
    }
    normalize::normalize_rows(rows, layout)
}

/// HTTP client for the registry listing page.
pub struct RegistryClient {
    http: reqwest::Client,
    url: String,
    layout: RowLayout,
}

impl RegistryClient {
    /// Create a client for the configured registry page.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &RegistryConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("regwatch/", env!("CARGO_PKG_VERSION")))
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            url: config.url.clone(),
            layout: config.layout.clone(),
        }
    }

    /// Download the raw registry page.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotConfigured`] without a URL, or a transport,
    /// status, or rate-limit error from the request.
    pub async fn fetch_page(&self) -> Result<String, RegistryError> {
        if self.url.is_empty() {
            return Err(RegistryError::NotConfigured);
        }
        tracing::debug!(url = %self.url, "fetching registry page");
        http::get_text(&self.http, &self.url).await
    }

    /// Download and normalize the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the page cannot be fetched. Parsing never fails.
    pub async fn fetch_entities(&self) -> Result<NormalizeReport, RegistryError> {
        let page = self.fetch_page().await?;
        Ok(parse_page(&page, &self.layout))
    }
}
