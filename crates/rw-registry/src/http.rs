//! Single-page fetch for the registry listing.

use crate::error::RegistryError;

/// Longest body excerpt kept in a [`RegistryError::Status`].
const EXCERPT_CHARS: usize = 200;

/// GET `url` and return the body of a successful response.
///
/// Error pages from the registry are full HTML documents, so only the first
/// [`EXCERPT_CHARS`] characters of a failure body are kept.
pub async fn get_text(http: &reqwest::Client, url: &str) -> Result<String, RegistryError> {
    let resp = http.get(url).send().await?;
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.text().await?);
    }

    let retry_after_secs = resp
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok());
    let body = resp.text().await.unwrap_or_default();
    Err(RegistryError::Status {
        status: status.as_u16(),
        retry_after_secs,
        excerpt: excerpt(&body),
    })
}

fn excerpt(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(EXCERPT_CHARS) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
