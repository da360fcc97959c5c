//! Search backends.

use std::future::Future;
use std::sync::Mutex;

use rw_config::SearchConfig;
use rw_core::entities::SearchHit;
use serde::Deserialize;

use crate::error::SearchError;
use crate::http::check_response;

/// Anything that answers a text query with an ordered list of hits.
///
/// An empty list is a normal answer. Implementations do not rate-limit;
/// callers go through a [`SearchSession`](crate::SearchSession).
pub trait SearchProvider {
    fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<SearchHit>, SearchError>> + Send;
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default, alias = "organic")]
    results: Vec<SearchHit>,
}

/// JSON search API reached with `GET {endpoint}?q=<query>&num=<limit>`.
pub struct HttpSearchProvider {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpSearchProvider {
    /// Create a provider for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NotConfigured`] when no endpoint is set.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        if !config.is_configured() {
            return Err(SearchError::NotConfigured);
        }
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("regwatch/", env!("CARGO_PKG_VERSION")))
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            endpoint: config.endpoint.trim().to_string(),
            api_key: Some(config.api_key.trim().to_string()).filter(|key| !key.is_empty()),
        })
    }

    fn url_for(&self, query: &str, limit: usize) -> String {
        let joiner = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{joiner}q={}&num={limit}",
            self.endpoint,
            urlencoding::encode(query)
        )
    }
}

impl SearchProvider for HttpSearchProvider {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, SearchError> {
        let mut request = self.http.get(self.url_for(query, limit));
        if let Some(key) = &self.api_key {
            request = request.header("X-API-KEY", key);
        }
        let resp = check_response(request.send().await?).await?;
        let data: SearchResponse = resp.json().await?;

        let mut hits = data.results;
        hits.truncate(limit);
        tracing::debug!(query, hits = hits.len(), "search answered");
        Ok(hits)
    }
}

/// Canned answers keyed by query fragment, for tests and offline runs.
///
/// The first rule whose fragment the query contains (case-insensitive)
/// decides the answer; queries no rule matches get the fallback list, empty
/// unless set.
#[derive(Debug, Default)]
pub struct StaticSearchProvider {
    rules: Vec<(String, Answer)>,
    fallback: Vec<SearchHit>,
    seen: Mutex<Vec<String>>,
}

#[derive(Debug, Clone)]
enum Answer {
    Hits(Vec<SearchHit>),
    Fail(u16),
}

impl StaticSearchProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer queries containing `fragment` with `hits`.
    #[must_use]
    pub fn with_results(mut self, fragment: &str, hits: Vec<SearchHit>) -> Self {
        self.rules.push((fragment.to_lowercase(), Answer::Hits(hits)));
        self
    }

    /// Fail queries containing `fragment` with an API error of `status`.
    #[must_use]
    pub fn with_failure(mut self, fragment: &str, status: u16) -> Self {
        self.rules.push((fragment.to_lowercase(), Answer::Fail(status)));
        self
    }

    /// Answer every unmatched query with `hits`.
    #[must_use]
    pub fn with_fallback(mut self, hits: Vec<SearchHit>) -> Self {
        self.fallback = hits;
        self
    }

    /// Queries received so far, in order.
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }

    fn answer(&self, query: &str) -> Answer {
        let lowered = query.to_lowercase();
        self.rules
            .iter()
            .find(|(fragment, _)| lowered.contains(fragment.as_str()))
            .map_or_else(|| Answer::Hits(self.fallback.clone()), |(_, answer)| answer.clone())
    }
}

impl SearchProvider for StaticSearchProvider {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, SearchError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(query.to_string());
        }
        match self.answer(query) {
            Answer::Hits(mut hits) => {
                hits.truncate(limit);
                Ok(hits)
            }
            Answer::Fail(status) => Err(SearchError::Api {
                status,
                message: format!("canned failure for {query:?}"),
            }),
        }
    }
}

impl<P: SearchProvider> SearchProvider for &P {
    fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<SearchHit>, SearchError>> + Send {
        (**self).search(query, limit)
    }
}
