//! Does a search result refer to the company we are resolving?
//!
//! The trap this guards against is a person whose own name shares a word
//! with the target company: "Ariana Lobo - Compliance Manager - XYZ Corp" is
//! not evidence about "ARIANA INVESTMENT PTE. LTD.". The person's name is
//! removed from the text before any company keyword is looked for.

use regex::{Regex, RegexBuilder};

use crate::names::{longest_keyword, normalize, significant_keywords};

/// Separators between the segments of a result title, e.g.
/// `Jane Tan - Head of Compliance - Acme | LinkedIn`.
pub const TITLE_SEPARATORS: [&str; 4] = [" - ", " – ", " | ", " · "];

const MIN_NAME_WORD_CHARS: usize = 3;

/// Title text before the first separator, trimmed; the whole title when it
/// has no separator.
#[must_use]
pub fn person_name_from_title(title: &str) -> &str {
    TITLE_SEPARATORS
        .iter()
        .filter_map(|sep| title.find(sep))
        .min()
        .map_or(title, |cut| &title[..cut])
        .trim()
}

/// `true` when `title`/`snippet` mention `company_name` once the person's
/// own name has been taken out.
///
/// The check is on the single longest significant keyword of the company.
/// A company with no significant keyword must appear by its full
/// normalized name.
#[must_use]
pub fn mentions_entity(title: &str, snippet: &str, company_name: &str) -> bool {
    let text = format!("{title} {snippet}");
    let cleaned = strip_person_name(&text, person_name_from_title(title)).to_lowercase();

    let keywords = significant_keywords(company_name);
    longest_keyword(&keywords).map_or_else(
        || {
            let full = normalize(company_name).to_lowercase();
            !full.is_empty() && cleaned.contains(&full)
        },
        |keyword| cleaned.contains(keyword),
    )
}

fn strip_person_name(text: &str, person: &str) -> String {
    let words: Vec<String> = person
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| word.chars().count() >= MIN_NAME_WORD_CHARS)
        .map(regex::escape)
        .collect();
    if words.is_empty() {
        return text.to_string();
    }

    match name_words_regex(&words) {
        Some(re) => re.replace_all(text, " ").into_owned(),
        None => text.to_string(),
    }
}

fn name_words_regex(words: &[String]) -> Option<Regex> {
    let pattern = format!(r"\b(?:{})\b", words.join("|"));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .inspect_err(|error| tracing::debug!(%error, "person-name pattern rejected"))
        .ok()
}
