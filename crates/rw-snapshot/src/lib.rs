//! # rw-snapshot
//!
//! Append-only registry snapshot store and diff engine for regwatch.
//!
//! - [`SnapshotStore`] persists immutable, timestamp-named captures and loads
//!   the most recent ones by id order.
//! - [`diff()`] compares two entity lists by registry id or canonical name.
//! - [`capture()`] is the unit of a scrape run: refuse empty input, save,
//!   diff against the previous capture.

mod capture;
mod diff;
mod error;
mod store;

pub use capture::{CaptureOutcome, LatestDiff, capture, diff_latest};
pub use diff::diff;
pub use error::SnapshotError;
pub use store::{SnapshotStore, StoredSnapshot};
