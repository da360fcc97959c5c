//! CLI response types returned as JSON by `rwatch` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Diff, EnrichmentRecord};

/// Response from `rwatch capture`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CaptureResponse {
    pub snapshot_id: String,
    pub previous_snapshot_id: Option<String>,
    pub count: usize,
    /// Names of entities not present in the previous capture.
    pub added: Vec<String>,
    /// Names of entities that disappeared since the previous capture.
    pub removed: Vec<String>,
    /// Raw rows dropped during normalization.
    pub skipped_rows: usize,
}

/// Response from `rwatch diff`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DiffResponse {
    pub current_snapshot_id: Option<String>,
    pub previous_snapshot_id: Option<String>,
    pub diff: Diff,
}

/// Response from `rwatch snapshots`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SnapshotListResponse {
    pub snapshots: Vec<String>,
    pub total: usize,
}

/// Summary of one `rwatch enrich` run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnrichRunResponse {
    pub attempted: usize,
    pub completed: usize,
    pub failed: usize,
    /// Entities left alone because an earlier run already completed them.
    pub skipped: usize,
    pub high_confidence: usize,
    /// Contacts flagged as cross-entity duplicates by the dedup pass that
    /// follows a run; zero when the run completed nothing and no pass ran.
    #[serde(default)]
    pub duplicates_flagged: usize,
}

/// Response from `rwatch dedup`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DedupResponse {
    pub entities: usize,
    pub contacts: usize,
    pub duplicates_flagged: usize,
}

/// Response from `rwatch show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProspectListResponse {
    pub records: Vec<EnrichmentRecord>,
    pub total: usize,
}
