use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::RegistryEntity;
use crate::errors::CoreError;

/// One immutable capture of the full registry.
///
/// On disk the entity list is stored under `institutions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Snapshot {
    pub timestamp: DateTime<Utc>,
    pub count: usize,
    #[serde(rename = "institutions")]
    pub entities: Vec<RegistryEntity>,
}

impl Snapshot {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, entities: Vec<RegistryEntity>) -> Self {
        Self {
            timestamp,
            count: entities.len(),
            entities,
        }
    }

    /// Check that `count` agrees with the entity list.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the two disagree.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.count != self.entities.len() {
            return Err(CoreError::Validation(format!(
                "snapshot count {} does not match {} institutions",
                self.count,
                self.entities.len()
            )));
        }
        Ok(())
    }
}
