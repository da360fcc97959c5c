//! Search result → candidate contact.

use once_cell::sync::Lazy;
use regex::Regex;
use rw_core::entities::{CandidateContact, SearchHit};
use rw_core::enums::ContactSource;

use crate::employer::extract_employer;
use crate::matcher::TITLE_SEPARATORS;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

const PROFILE_MARKER: &str = "linkedin.com/in/";
const MIN_NAME_WORDS: usize = 2;
const MAX_NAME_WORDS: usize = 5;

/// Read a candidate contact out of one search result.
///
/// The result title must open with something shaped like a person's name
/// (two to five alphabetic words); the next title segment, if any, is the
/// job title. Returns `None` for results that do not name a person.
#[must_use]
pub fn candidate_from_result(hit: &SearchHit, source: ContactSource) -> Option<CandidateContact> {
    let segments = split_title(&hit.title);
    let (name, rest) = segments.split_first()?;
    if !looks_like_person(name) {
        return None;
    }
    let title = rest
        .iter()
        .find(|segment| !segment.eq_ignore_ascii_case("linkedin"))
        .copied()
        .unwrap_or_default();

    let mut contact = CandidateContact::new(*name, title, source);
    if let Some(employer) = extract_employer(&hit.snippet) {
        contact = contact.with_employer(employer);
    }
    if hit.url.to_lowercase().contains(PROFILE_MARKER) {
        contact = contact.with_linkedin_url(hit.url.trim());
    }
    if let Some(email) = EMAIL.find(&hit.snippet) {
        contact = contact.with_email(email.as_str());
    }
    Some(contact)
}

fn split_title(title: &str) -> Vec<&str> {
    let mut segments = vec![title];
    for separator in TITLE_SEPARATORS {
        segments = segments
            .into_iter()
            .flat_map(|segment| segment.split(separator))
            .collect();
    }
    segments
        .into_iter()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn looks_like_person(name: &str) -> bool {
    let words: Vec<&str> = name.split_whitespace().collect();
    (MIN_NAME_WORDS..=MAX_NAME_WORDS).contains(&words.len())
        && words.iter().all(|word| {
            word.chars().any(char::is_alphabetic)
                && word
                    .chars()
                    .all(|c| c.is_alphabetic() || matches!(c, '.' | '\'' | '-'))
        })
}
