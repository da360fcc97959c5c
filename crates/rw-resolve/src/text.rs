//! Small string helpers shared by the matchers.

/// Terms this short (acronyms such as `cco`, `aml`) only match whole words.
const SHORT_TERM_CHARS: usize = 4;

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercased, whitespace-collapsed form used for comparisons and keys.
pub fn fold(text: &str) -> String {
    collapse_whitespace(text).to_lowercase()
}

/// `true` when `needle` occurs in `haystack` with no alphanumeric character
/// directly on either side.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Substring match for ordinary terms, whole-word match for short ones.
///
/// Both arguments are expected to be lowercase already.
pub fn matches_term(haystack: &str, term: &str) -> bool {
    if term.chars().count() <= SHORT_TERM_CHARS {
        contains_word(haystack, term)
    } else {
        haystack.contains(term)
    }
}
