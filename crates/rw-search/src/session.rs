//! Scoped, rate-limited access to a search provider.
//!
//! Every query of an enrichment run goes through one [`SearchSession`]. The
//! minimum spacing between consecutive queries belongs to the session, so no
//! call site can forget it and two call sites cannot each think they own
//! the budget.

use std::time::Duration;

use rw_config::SearchConfig;
use rw_core::entities::SearchHit;
use tokio::time::Instant;

use crate::error::SearchError;
use crate::provider::SearchProvider;

/// Enforces a minimum delay between consecutive permits.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    min_delay: Duration,
    last: Option<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub const fn new(min_delay: Duration) -> Self {
        Self {
            min_delay,
            last: None,
        }
    }

    /// Wait until at least `min_delay` has passed since the previous permit.
    ///
    /// The first permit is immediate.
    pub async fn acquire(&mut self) {
        if let Some(last) = self.last {
            let ready_at = last + self.min_delay;
            if Instant::now() < ready_at {
                tokio::time::sleep_until(ready_at).await;
            }
        }
        self.last = Some(Instant::now());
    }
}

/// What a session did, reported when it closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub queries: usize,
    pub failures: usize,
}

/// An open search session.
///
/// Release it with [`SearchSession::close`]; dropping it (including on an
/// early `?` return) releases it too.
pub struct SearchSession<P: SearchProvider> {
    provider: P,
    limiter: RateLimiter,
    results_per_query: usize,
    stats: SessionStats,
    closed: bool,
}

impl<P: SearchProvider> SearchSession<P> {
    #[must_use]
    pub fn open(provider: P, min_delay: Duration, results_per_query: usize) -> Self {
        tracing::debug!(?min_delay, "search session opened");
        Self {
            provider,
            limiter: RateLimiter::new(min_delay),
            results_per_query: results_per_query.max(1),
            stats: SessionStats::default(),
            closed: false,
        }
    }

    /// Open a session with the delay and page size from `config`.
    #[must_use]
    pub fn from_config(provider: P, config: &SearchConfig) -> Self {
        Self::open(
            provider,
            Duration::from_millis(config.min_delay_ms),
            config.results_per_query,
        )
    }

    /// Run one query, waiting out the rate limit first.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`SearchError`]. A failure still counts
    /// against the rate limit.
    pub async fn search(&mut self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        self.limiter.acquire().await;
        self.stats.queries += 1;
        let result = self.provider.search(query, self.results_per_query).await;
        if let Err(error) = &result {
            self.stats.failures += 1;
            tracing::warn!(query, %error, "search failed");
        }
        result
    }

    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Release the session and report what it did.
    #[must_use]
    pub fn close(mut self) -> SessionStats {
        self.release();
        self.stats
    }

    fn release(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        tracing::info!(
            queries = self.stats.queries,
            failures = self.stats.failures,
            "search session closed"
        );
    }
}

impl<P: SearchProvider> Drop for SearchSession<P> {
    fn drop(&mut self) {
        self.release();
    }
}
