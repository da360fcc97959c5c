//! Enrichment state error types.

use thiserror::Error;

/// Errors reading or writing the persisted enrichment state.
///
/// These end a run: the state file is the only record of what has already
/// been enriched.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("state I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to replace state file {path}: {source}")]
    Persist {
        path: String,
        source: std::io::Error,
    },
}
