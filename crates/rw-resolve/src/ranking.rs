//! Seniority ranking of contacts.

use rw_config::RankingConfig;
use rw_core::entities::CandidateContact;

use crate::text::{fold, matches_term};

/// Seniority priority of a job title; lower is more senior.
///
/// Every rule whose pattern the title contains is considered and the most
/// senior one wins, so "Chief Compliance Officer" ranks as chief compliance
/// even though it also contains "compliance officer". Short patterns such as
/// `cco` only match as whole words.
#[must_use]
pub fn priority_for(title: &str, config: &RankingConfig) -> u32 {
    let title = fold(title);
    config
        .seniority
        .iter()
        .filter(|rule| matches_term(&title, &fold(&rule.pattern)))
        .map(|rule| rule.priority)
        .min()
        .unwrap_or(config.unranked_priority)
}

/// Assign priorities and sort most senior first.
///
/// The sort is stable: contacts of equal seniority keep their input order.
#[must_use]
pub fn rank(mut contacts: Vec<CandidateContact>, config: &RankingConfig) -> Vec<CandidateContact> {
    for contact in &mut contacts {
        contact.priority = priority_for(&contact.title, config);
    }
    contacts.sort_by_key(|contact| contact.priority);
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use rw_config::SeniorityRule;
    use rw_core::enums::ContactSource;

    fn contacts(titles: &[&str]) -> Vec<CandidateContact> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| CandidateContact::new(format!("Person {i}"), *title, ContactSource::Search))
            .collect()
    }

    #[test]
    fn ranks_by_seniority() {
        let ranked = rank(
            contacts(&["Software Engineer", "Head of Compliance", "CCO", "MLRO"]),
            &RankingConfig::default(),
        );
        let titles: Vec<&str> = ranked.iter().map(|c| c.title.as_str()).collect();
        let priorities: Vec<u32> = ranked.iter().map(|c| c.priority).collect();
        assert_eq!(titles, vec!["CCO", "MLRO", "Head of Compliance", "Software Engineer"]);
        assert_eq!(priorities, vec![1, 2, 3, 99]);
    }

    #[rstest]
    #[case("Chief Compliance Officer", 1)]
    #[case("Group CCO & MLRO", 1)]
    #[case("Money Laundering Reporting Officer", 2)]
    #[case("VP Compliance, APAC", 4)]
    #[case("Vice President, Compliance", 4)]
    #[case("Director of Compliance", 5)]
    #[case("Senior Compliance Manager", 6)]
    #[case("Compliance Officer", 7)]
    #[case("Accounting Manager", 99)]
    #[case("", 99)]
    fn priority_table(#[case] title: &str, #[case] expected: u32) {
        assert_eq!(priority_for(title, &RankingConfig::default()), expected);
    }

    #[test]
    fn equal_priorities_keep_input_order() {
        let ranked = rank(
            contacts(&["Compliance Officer", "Analyst", "Compliance Officer", "Intern"]),
            &RankingConfig::default(),
        );
        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Person 0", "Person 2", "Person 1", "Person 3"]);
    }

    #[test]
    fn custom_table_replaces_defaults() {
        let config = RankingConfig {
            seniority: vec![SeniorityRule::new("Risk", 1)],
            unranked_priority: 50,
        };
        assert_eq!(priority_for("Head of Risk", &config), 1);
        assert_eq!(priority_for("CCO", &config), 50);
    }
}
