//! Employer extraction from snippets, and verification against the target.
//!
//! Extraction is a chain of [`EmployerExtractor`] strategies tried in order;
//! the first one that finds something wins. Verification is deliberately
//! lenient about missing evidence: a contact whose snippet names no employer
//! passes, and only a named, non-matching employer rejects it.

use once_cell::sync::Lazy;
use regex::Regex;
use rw_core::entities::CandidateContact;

use crate::names::{normalize, significant_keywords};

/// `... Compliance Officer at Acme Capital.` / `MLRO @ Acme`
static AT_EMPLOYER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\b[Aa]t|@)\s+([A-Z0-9&][^.,;:|·•\n()]*)").expect("valid at-employer regex")
});

/// `Acme Capital · Head of Compliance` / `Experience: Acme | ...`
static LEADING_EMPLOYER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?:Experience:\s*)?([A-Z0-9][\w&'.-]*(?:[ \t]+[A-Z0-9&][\w&'.-]*)*)\s*[·|]",
    )
    .expect("valid leading-employer regex")
});

/// Segment separators that end an employer name inside a sentence.
const TRAILING_CUTS: [&str; 2] = [" - ", " – "];

/// One way of reading a claimed employer out of a snippet.
pub trait EmployerExtractor {
    fn extract(&self, snippet: &str) -> Option<String>;
}

/// `<title> at <Employer>` or `<title> @ <Employer>`, up to punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtEmployer;

impl EmployerExtractor for AtEmployer {
    fn extract(&self, snippet: &str) -> Option<String> {
        let captured = AT_EMPLOYER.captures(snippet)?.get(1)?.as_str();
        let cut = TRAILING_CUTS
            .iter()
            .filter_map(|sep| captured.find(sep))
            .min()
            .map_or(captured, |at| &captured[..at]);
        non_empty(cut)
    }
}

/// A leading run of capitalized words followed by `·` or `|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadingEmployer;

impl EmployerExtractor for LeadingEmployer {
    fn extract(&self, snippet: &str) -> Option<String> {
        let captured = LEADING_EMPLOYER.captures(snippet)?.get(1)?.as_str();
        non_empty(captured)
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The extractors [`extract_employer`] runs, in order.
pub const DEFAULT_EXTRACTORS: &[&dyn EmployerExtractor] = &[&AtEmployer, &LeadingEmployer];

/// First employer any extractor in `chain` finds.
#[must_use]
pub fn extract_with(chain: &[&dyn EmployerExtractor], snippet: &str) -> Option<String> {
    chain.iter().find_map(|extractor| extractor.extract(snippet))
}

/// Claimed employer in `snippet`, using [`DEFAULT_EXTRACTORS`].
#[must_use]
pub fn extract_employer(snippet: &str) -> Option<String> {
    extract_with(DEFAULT_EXTRACTORS, snippet)
}

/// Does `employer` plausibly name `target`?
///
/// `None` passes. Otherwise the employer text must contain one of the
/// target's significant keywords, or its full normalized name when it has
/// none, compared case-insensitively.
#[must_use]
pub fn employer_matches(employer: Option<&str>, target: &str) -> bool {
    let Some(employer) = employer else {
        return true;
    };
    let employer = employer.to_lowercase();
    let keywords = significant_keywords(target);
    if keywords.is_empty() {
        let full = normalize(target).to_lowercase();
        return !full.is_empty() && employer.contains(&full);
    }
    keywords.iter().any(|keyword| employer.contains(keyword.as_str()))
}

/// Employer check for a candidate against the target company name.
#[must_use]
pub fn verify(candidate: &CandidateContact, target: &str) -> bool {
    employer_matches(candidate.employer.as_deref(), target)
}
