//! Source and status enums for regwatch records.
//!
//! `ContactSource` serializes in kebab-case (`broad-search`), matching the
//! values written into persisted enrichment state. `EnrichmentStatus` uses
//! `snake_case` like every other status in the workspace.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ContactSource
// ---------------------------------------------------------------------------

/// Which search strategy produced a candidate contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ContactSource {
    /// Targeted query naming the company and a compliance role.
    Search,
    /// Looser query used when the targeted one produced nothing.
    BroadSearch,
    /// Query scoped to the company's own website, or a configured directory entry.
    CompanySite,
}

impl ContactSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::BroadSearch => "broad-search",
            Self::CompanySite => "company-site",
        }
    }
}

impl fmt::Display for ContactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EnrichmentStatus
// ---------------------------------------------------------------------------

/// Outcome of enriching one registry entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentStatus {
    Complete,
    Failed,
}

impl EnrichmentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Failed => "failed",
        }
    }

    /// Whether a later run should leave this entity alone unless forced.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for EnrichmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
