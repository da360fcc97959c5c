//! Seniority table for ranking contacts by title.

use serde::{Deserialize, Serialize};

const fn default_unranked_priority() -> u32 {
    99
}

/// One seniority rule: titles containing `pattern` get `priority` (lower is more senior).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeniorityRule {
    pub pattern: String,
    pub priority: u32,
}

impl SeniorityRule {
    #[must_use]
    pub fn new(pattern: &str, priority: u32) -> Self {
        Self {
            pattern: pattern.to_string(),
            priority,
        }
    }
}

fn default_seniority() -> Vec<SeniorityRule> {
    vec![
        SeniorityRule::new("chief compliance", 1),
        SeniorityRule::new("cco", 1),
        SeniorityRule::new("money laundering reporting", 2),
        SeniorityRule::new("mlro", 2),
        SeniorityRule::new("head of compliance", 3),
        SeniorityRule::new("compliance head", 3),
        SeniorityRule::new("vp compliance", 4),
        SeniorityRule::new("vp of compliance", 4),
        SeniorityRule::new("vice president, compliance", 4),
        SeniorityRule::new("vice president of compliance", 4),
        SeniorityRule::new("compliance director", 5),
        SeniorityRule::new("director of compliance", 5),
        SeniorityRule::new("director, compliance", 5),
        SeniorityRule::new("compliance manager", 6),
        SeniorityRule::new("compliance officer", 7),
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankingConfig {
    /// Rules matched case-insensitively against contact titles.
    #[serde(default = "default_seniority")]
    pub seniority: Vec<SeniorityRule>,

    /// Priority for titles no rule matches.
    #[serde(default = "default_unranked_priority")]
    pub unranked_priority: u32,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            seniority: default_seniority(),
            unranked_priority: default_unranked_priority(),
        }
    }
}
