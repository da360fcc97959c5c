//! Company-name normalization and search keys.
//!
//! Registry names carry legal-form noise ("PTE. LTD.", "(SINGAPORE)") that
//! search engines and people drop. [`normalize`] removes it; the rest of
//! this module derives comparison keywords and search queries from the
//! result.

use once_cell::sync::Lazy;
use regex::Regex;
use rw_core::entities::RegistryEntity;
use rw_core::enums::ContactSource;

use crate::text::collapse_whitespace;

/// A parenthetical jurisdiction or form marker such as `(SINGAPORE)` or `(S) `.
static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(\s*[A-Za-z .&-]+\s*\)").expect("valid parenthetical regex"));

/// One trailing legal-form suffix, preceded by a whitespace or comma boundary.
///
/// Multi-word forms come first so `CO LTD` wins over `LTD` at the same
/// position.
static LEGAL_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)[\s,]+(?:PTE\.?\s+LTD|PRIVATE\s+LIMITED|CO\.?,?\s+LTD|SDN\.?\s+BHD|LIMITED|CORPORATION|CORP|GMBH|LLC|INC|LTD|PLC|PTE|LLP|LP|AG|SA)\.?[\s.,]*$",
    )
    .expect("valid legal suffix regex")
});

/// Generic corporate words that say nothing about which company is meant.
///
/// Matching is on whole lowercase tokens, so every word is listed in both
/// its singular and plural form.
const STOP_WORDS: &[&str] = &[
    "pte",
    "ltd",
    "limited",
    "private",
    "company",
    "companies",
    "corp",
    "corporation",
    "inc",
    "llc",
    "group",
    "groups",
    "holdings",
    "holding",
    "capital",
    "management",
    "financial",
    "finance",
    "digital",
    "asset",
    "assets",
    "services",
    "service",
    "technology",
    "technologies",
    "global",
    "international",
    "asia",
    "pacific",
    "singapore",
    "investment",
    "investments",
    "partner",
    "partners",
    "fund",
    "funds",
    "security",
    "securities",
    "solution",
    "solutions",
    "payment",
    "payments",
    "trust",
    "trusts",
    "venture",
    "ventures",
    "the",
    "and",
];

const MIN_KEYWORD_CHARS: usize = 3;

/// Strip legal-entity suffixes and parenthetical markers from a company name.
///
/// Suffixes only come off the end and only after a whitespace or comma
/// boundary, so `"OpenAI"` and `"SAGA"` are left alone. Stripping repeats
/// until nothing changes, which makes the function idempotent. A name that
/// would strip to nothing is returned collapsed but otherwise intact.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut current = collapse_whitespace(raw);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(name: &str) -> String {
    let unmarked = collapse_whitespace(&PARENTHETICAL.replace_all(name, " "));
    let stripped = LEGAL_SUFFIX.replace(&unmarked, "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        return name.to_string();
    }
    stripped.to_string()
}

/// Lowercase tokens of the normalized name worth searching for.
///
/// Tokens shorter than three characters and generic corporate words are
/// dropped; order follows the name and repeats are removed.
#[must_use]
pub fn significant_keywords(name: &str) -> Vec<String> {
    let normalized = normalize(name).to_lowercase();
    let mut keywords: Vec<String> = Vec::new();
    for token in normalized.split(|c: char| !c.is_alphanumeric()) {
        if token.chars().count() < MIN_KEYWORD_CHARS || STOP_WORDS.contains(&token) {
            continue;
        }
        if !keywords.iter().any(|k| k == token) {
            keywords.push(token.to_string());
        }
    }
    keywords
}

/// The longest significant keyword; the earliest one wins a tie.
#[must_use]
pub fn longest_keyword(keywords: &[String]) -> Option<&str> {
    keywords
        .iter()
        .fold(None::<&String>, |best, keyword| match best {
            Some(best) if best.chars().count() >= keyword.chars().count() => Some(best),
            _ => Some(keyword),
        })
        .map(String::as_str)
}

/// One query to send to the search backend, tagged with where its contacts
/// will be said to come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub source: ContactSource,
}

/// Queries for one entity, most specific first.
///
/// Always a targeted and a broad query; a company-site query only when the
/// entity lists a website.
#[must_use]
pub fn search_queries(entity: &RegistryEntity) -> Vec<SearchQuery> {
    let name = normalize(&entity.name);
    let mut queries = vec![
        SearchQuery {
            text: format!("\"{name}\" compliance officer site:linkedin.com/in"),
            source: ContactSource::Search,
        },
        SearchQuery {
            text: format!("{name} compliance OR AML OR MLRO"),
            source: ContactSource::BroadSearch,
        },
    ];
    if let Some(domain) = website_domain(&entity.website) {
        queries.push(SearchQuery {
            text: format!("site:{domain} compliance"),
            source: ContactSource::CompanySite,
        });
    }
    queries
}

/// Bare host of a website field: no scheme, `www.`, path, or port.
#[must_use]
pub fn website_domain(website: &str) -> Option<String> {
    let trimmed = website.trim();
    let without_scheme = trimmed
        .split_once("://")
        .map_or(trimmed, |(_, rest)| rest);
    let host = without_scheme
        .split(['/', '?', '#', ':'])
        .next()
        .unwrap_or_default()
        .trim_start_matches("www.")
        .to_lowercase();
    (host.contains('.') && !host.contains(char::is_whitespace)).then_some(host)
}
