//! Snapshot store error types.

use thiserror::Error;

/// Errors from reading or writing snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Filesystem failure (unwritable directory, unreadable file).
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot could not be serialized or parsed.
    #[error("snapshot serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A stored snapshot parsed but failed its consistency check.
    #[error("snapshot {id} is corrupt: {reason}")]
    Corrupt { id: String, reason: String },

    /// No snapshot with the requested id exists.
    #[error("snapshot {0} not found")]
    NotFound(String),

    /// Every sequence number for one timestamp is taken.
    #[error("no free snapshot id left for timestamp {0}")]
    IdExhausted(String),

    /// The capture contained no entities. Saving it would bury real history.
    #[error("refusing to save an empty capture; the registry source format has probably changed")]
    EmptyCapture,
}
