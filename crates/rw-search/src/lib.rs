//! # rw-search
//!
//! Web search access for regwatch.
//!
//! - [`SearchProvider`] is the backend seam: [`HttpSearchProvider`] for a
//!   JSON search API, [`StaticSearchProvider`] for canned answers.
//! - [`SearchSession`] is the scoped handle every query goes through; it owns
//!   the minimum delay between calls.

mod error;
mod http;
mod provider;
mod session;

pub use error::SearchError;
pub use provider::{HttpSearchProvider, SearchProvider, StaticSearchProvider};
pub use session::{RateLimiter, SearchSession, SessionStats};
