use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ContactSource;

/// Priority assigned to titles that match no seniority rule.
pub const UNRANKED_PRIORITY: u32 = 99;

/// A person inferred from one search result. Nothing here is verified yet.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CandidateContact {
    pub name: String,
    pub title: String,
    /// Employer text claimed by the snippet. Evidence, not ground truth.
    pub employer: Option<String>,
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub source: ContactSource,
    /// Seniority rank, lower is more senior.
    pub priority: u32,
}

impl CandidateContact {
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>, source: ContactSource) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            employer: None,
            linkedin_url: None,
            email: None,
            source,
            priority: UNRANKED_PRIORITY,
        }
    }

    #[must_use]
    pub fn with_employer(mut self, employer: impl Into<String>) -> Self {
        self.employer = Some(employer.into());
        self
    }

    #[must_use]
    pub fn with_linkedin_url(mut self, url: impl Into<String>) -> Self {
        self.linkedin_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// A candidate that passed employer verification, or carried no employer claim.
///
/// `low_confidence` and `duplicate_of` are only ever set by cross-entity
/// deduplication.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerifiedContact {
    #[serde(flatten)]
    pub contact: CandidateContact,
    #[serde(default)]
    pub low_confidence: bool,
    #[serde(default)]
    pub duplicate_of: Option<String>,
}

impl From<CandidateContact> for VerifiedContact {
    fn from(contact: CandidateContact) -> Self {
        Self {
            contact,
            low_confidence: false,
            duplicate_of: None,
        }
    }
}

impl VerifiedContact {
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        self.duplicate_of.is_some()
    }
}
