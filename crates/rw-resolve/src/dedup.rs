//! Cross-entity contact deduplication.
//!
//! The same person often turns up in the search results of several
//! companies. The first entity (in run order) to claim a person keeps them;
//! every later claim under a different entity is kept but flagged so a
//! reviewer can see the collision.

use std::collections::HashMap;

use rw_core::entities::{CandidateContact, Prospect};

use crate::text::fold;

/// Identity of a contact across entities.
///
/// The normalized profile URL when there is one, else folded
/// `name|title`.
#[must_use]
pub fn contact_key(contact: &CandidateContact) -> String {
    match contact.linkedin_url.as_deref().map(normalize_profile_url) {
        Some(url) if !url.is_empty() => url,
        _ => format!("{}|{}", fold(&contact.name), fold(&contact.title)),
    }
}

/// Lowercase a profile URL and drop its scheme, `www.`, query, fragment, and
/// trailing slash.
#[must_use]
pub fn normalize_profile_url(url: &str) -> String {
    let lowered = url.trim().to_lowercase();
    let without_scheme = lowered
        .split_once("://")
        .map_or(lowered.as_str(), |(_, rest)| rest);
    let without_www = without_scheme.strip_prefix("www.").unwrap_or(without_scheme);
    let without_query = without_www
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    without_query.trim_end_matches('/').to_string()
}

/// Flag contacts already claimed by an earlier prospect.
///
/// Existing flags are cleared first, so running this again over the same
/// prospects gives the same result. List lengths never change. Returns the
/// number of contacts flagged.
pub fn dedup_across(prospects: &mut [Prospect]) -> usize {
    let mut owners: HashMap<String, String> = HashMap::new();
    let mut flagged = 0;

    for prospect in prospects.iter_mut() {
        let entity_name = prospect.entity.name.clone();
        for verified in &mut prospect.contacts {
            verified.low_confidence = false;
            verified.duplicate_of = None;

            let key = contact_key(&verified.contact);
            match owners.get(&key) {
                None => {
                    owners.insert(key, entity_name.clone());
                }
                Some(owner) if *owner == entity_name => {}
                Some(owner) => {
                    tracing::debug!(
                        contact = %verified.contact.name,
                        entity = %entity_name,
                        first_seen = %owner,
                        "duplicate contact across entities"
                    );
                    verified.low_confidence = true;
                    verified.duplicate_of = Some(owner.clone());
                    flagged += 1;
                }
            }
        }
    }

    flagged
}
