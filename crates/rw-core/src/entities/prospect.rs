use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{RegistryEntity, VerifiedContact};
use crate::enums::EnrichmentStatus;

/// The result of enriching one entity: ranked contacts plus a confidence score.
///
/// A re-enrichment produces a new `Prospect` that supersedes the old one.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Prospect {
    pub entity: RegistryEntity,
    pub contacts: Vec<VerifiedContact>,
    /// Heuristic quality estimate in `[0, 1]`.
    pub confidence: f64,
    /// Whether `confidence` cleared the configured threshold.
    pub high_confidence: bool,
    pub enriched_at: DateTime<Utc>,
}

impl Prospect {
    /// Highest-ranked contact that is not a cross-entity duplicate.
    #[must_use]
    pub fn primary_contact(&self) -> Option<&VerifiedContact> {
        self.contacts.iter().find(|c| !c.is_duplicate())
    }
}

/// Persisted enrichment state for one entity, keyed by canonical name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EnrichmentRecord {
    pub entity_name: String,
    pub status: EnrichmentStatus,
    pub prospect: Option<Prospect>,
    pub error: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl EnrichmentRecord {
    #[must_use]
    pub fn complete(prospect: Prospect) -> Self {
        Self {
            entity_name: prospect.entity.name.clone(),
            status: EnrichmentStatus::Complete,
            prospect: Some(prospect),
            error: None,
            updated_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn failed(entity_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            status: EnrichmentStatus::Failed,
            prospect: None,
            error: Some(error.into()),
            updated_at: Utc::now(),
        }
    }
}
