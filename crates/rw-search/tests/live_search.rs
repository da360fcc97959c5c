//! Live check against a real search backend.
//!
//! Run with `RWATCH_SEARCH__ENDPOINT` (and `RWATCH_SEARCH__API_KEY` if the
//! backend needs one) set: `cargo test -p rw-search -- --ignored`.

use std::time::Duration;

use rw_config::SearchConfig;
use rw_search::{HttpSearchProvider, SearchSession};

#[tokio::test]
#[ignore = "requires network and a configured search endpoint"]
async fn live_backend_answers_a_query() {
    let config = SearchConfig {
        endpoint: std::env::var("RWATCH_SEARCH__ENDPOINT").unwrap_or_default(),
        api_key: std::env::var("RWATCH_SEARCH__API_KEY").unwrap_or_default(),
        ..SearchConfig::default()
    };
    let provider = HttpSearchProvider::new(&config).expect("endpoint must be set");
    let mut session = SearchSession::open(provider, Duration::from_secs(1), 3);

    let hits = session
        .search("compliance officer singapore payment institution")
        .await
        .expect("search should succeed");
    assert!(hits.len() <= 3);
    assert!(hits.iter().all(|hit| !hit.url.is_empty()));
    assert_eq!(session.close().queries, 1);
}
