//! Response status checks for search backends.

use crate::error::SearchError;

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Map 429 to [`SearchError::RateLimited`] and any other failure status to
/// [`SearchError::Api`]; pass successful responses through.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SearchError> {
    let status = resp.status();
    if status == 429 {
        return Err(SearchError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }
    if !status.is_success() {
        return Err(SearchError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
