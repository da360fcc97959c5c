use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::RegistryEntity;

/// Entities that appeared in or disappeared from the registry between two captures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Diff {
    pub added: Vec<RegistryEntity>,
    pub removed: Vec<RegistryEntity>,
}

impl Diff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
