//! Confidence scoring weights and threshold.
//!
//! The weights and the threshold are empirically chosen; every one of them can
//! be overridden from TOML or `RWATCH_SCORING__*` env vars.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_license_weight() -> f64 {
    0.3
}

const fn default_identifier_weight() -> f64 {
    0.25
}

const fn default_title_weight() -> f64 {
    0.25
}

const fn default_website_weight() -> f64 {
    0.2
}

const fn default_threshold() -> f64 {
    0.7
}

fn default_compliance_keywords() -> Vec<String> {
    [
        "compliance",
        "aml",
        "mlro",
        "cco",
        "money laundering",
        "regulatory",
        "kyc",
        "financial crime",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_license_categories() -> BTreeMap<String, String> {
    [
        ("major payment institution", "MPI"),
        ("standard payment institution", "SPI"),
        ("money-changing", "MC"),
        ("digital payment token", "DPT"),
        ("capital markets services", "CMS"),
    ]
    .into_iter()
    .map(|(pattern, category)| (pattern.to_string(), category.to_string()))
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoringConfig {
    /// Added when an entity's license type maps to a known category.
    #[serde(default = "default_license_weight")]
    pub license_weight: f64,

    /// Added when the contact carries an email or a profile URL.
    #[serde(default = "default_identifier_weight")]
    pub identifier_weight: f64,

    /// Added when the contact's title names a compliance role.
    #[serde(default = "default_title_weight")]
    pub title_weight: f64,

    /// Added when the entity has both a name and a website.
    #[serde(default = "default_website_weight")]
    pub website_weight: f64,

    /// Scores at or above this are high confidence; below needs human review.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Lowercase title fragments that identify a compliance role.
    #[serde(default = "default_compliance_keywords")]
    pub compliance_keywords: Vec<String>,

    /// Lowercase license-type fragment → category label.
    #[serde(default = "default_license_categories")]
    pub license_categories: BTreeMap<String, String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            license_weight: default_license_weight(),
            identifier_weight: default_identifier_weight(),
            title_weight: default_title_weight(),
            website_weight: default_website_weight(),
            threshold: default_threshold(),
            compliance_keywords: default_compliance_keywords(),
            license_categories: default_license_categories(),
        }
    }
}

impl ScoringConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a negative or non-finite
    /// weight, or a threshold outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, weight) in [
            ("scoring.license_weight", self.license_weight),
            ("scoring.identifier_weight", self.identifier_weight),
            ("scoring.title_weight", self.title_weight),
            ("scoring.website_weight", self.website_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: format!("weight must be a non-negative number, got {weight}"),
                });
            }
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidValue {
                field: "scoring.threshold".into(),
                reason: format!("must be within [0, 1], got {}", self.threshold),
            });
        }
        Ok(())
    }
}
