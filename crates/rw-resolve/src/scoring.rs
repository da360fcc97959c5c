//! Additive confidence score for an (entity, contact) pair.

use rw_config::ScoringConfig;
use rw_core::entities::{CandidateContact, RegistryEntity, VerifiedContact};

use crate::text::{fold, matches_term};

/// Scores contacts with one [`ScoringConfig`].
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score in `[0, 1]`.
    ///
    /// Sums the configured weight for each signal present: a recognized
    /// license category, a strong identifier on the contact, a compliance
    /// title, and an entity with both a name and a website. Passing `None`
    /// scores the entity alone.
    #[must_use]
    pub fn score(&self, entity: &RegistryEntity, contact: Option<&CandidateContact>) -> f64 {
        let mut total = 0.0;
        if self.license_category(entity).is_some() {
            total += self.config.license_weight;
        }
        if let Some(contact) = contact {
            if has_strong_identifier(contact) {
                total += self.config.identifier_weight;
            }
            if self.is_compliance_title(&contact.title) {
                total += self.config.title_weight;
            }
        }
        if !entity.name.trim().is_empty() && entity.has_website() {
            total += self.config.website_weight;
        }
        total.min(1.0)
    }

    /// Confidence of a whole prospect: the score of its first non-duplicate
    /// contact, or of the entity alone when every contact is a duplicate or
    /// there are none.
    #[must_use]
    pub fn prospect_confidence(&self, entity: &RegistryEntity, contacts: &[VerifiedContact]) -> f64 {
        let primary = contacts.iter().find(|c| !c.is_duplicate()).map(|c| &c.contact);
        self.score(entity, primary)
    }

    #[must_use]
    pub fn is_high_confidence(&self, score: f64) -> bool {
        score >= self.config.threshold
    }

    /// Category label of the first license type that maps to a known category.
    #[must_use]
    pub fn license_category(&self, entity: &RegistryEntity) -> Option<&str> {
        entity.license_types.iter().find_map(|license| {
            let license = fold(license);
            self.config
                .license_categories
                .iter()
                .find(|(pattern, _)| license.contains(&fold(pattern)))
                .map(|(_, category)| category.as_str())
        })
    }

    #[must_use]
    pub fn is_compliance_title(&self, title: &str) -> bool {
        let title = fold(title);
        self.config
            .compliance_keywords
            .iter()
            .any(|keyword| matches_term(&title, &fold(keyword)))
    }
}

fn has_strong_identifier(contact: &CandidateContact) -> bool {
    let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
    present(&contact.email) || present(&contact.linkedin_url)
}
