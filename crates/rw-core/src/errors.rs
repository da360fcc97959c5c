//! Errors raised by the core record types.
//!
//! Each crate that does I/O defines its own error enum
//! (`RegistryError`, `SnapshotError`, `SearchError`, `StateError`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A record disagrees with itself, e.g. a snapshot count that does not
    /// match its entity list.
    #[error("inconsistent record: {0}")]
    Validation(String),
}
