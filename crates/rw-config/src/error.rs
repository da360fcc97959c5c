//! Errors raised while loading or validating configuration.
//!
//! A missing registry URL or search endpoint is not a load error: the
//! crates that need those report it when they are used.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer could not be read, or its values did not fit the schema.
    #[error("unreadable config layer: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but would make scoring, search, or parsing meaningless.
    #[error("config field '{field}' is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}
