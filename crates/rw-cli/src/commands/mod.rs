pub mod capture;
pub mod dedup;
pub mod diff;
pub mod dispatch;
pub mod enrich;
pub mod schema;
pub mod show;
pub mod snapshots;

/// Global `--limit` as a count; `None` means unbounded.
#[must_use]
pub fn limit_of(limit: Option<u32>) -> Option<usize> {
    limit.map(|value| usize::try_from(value).unwrap_or(usize::MAX))
}
