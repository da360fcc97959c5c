//! Fallback contact directory.
//!
//! Known contacts for companies that open search tends to miss. The directory
//! is plain configuration passed into the enrichment pipeline, so tests and
//! callers substitute their own fixtures by building one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A directory entry for one person.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FallbackContact {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FallbackDirectory {
    /// Contacts offered for companies without their own entry. Empty by default.
    #[serde(default)]
    pub default: Vec<FallbackContact>,

    /// Normalized company name → contacts. Keys compare case-insensitively.
    #[serde(default)]
    pub companies: BTreeMap<String, Vec<FallbackContact>>,
}

impl FallbackDirectory {
    /// Contacts for `normalized_name`, or the default list when it has no entry.
    #[must_use]
    pub fn contacts_for(&self, normalized_name: &str) -> &[FallbackContact] {
        let wanted = normalized_name.trim();
        self.companies
            .iter()
            .find(|(key, _)| key.trim().eq_ignore_ascii_case(wanted))
            .map_or(self.default.as_slice(), |(_, contacts)| contacts.as_slice())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.default.is_empty() && self.companies.values().all(Vec::is_empty)
    }
}
