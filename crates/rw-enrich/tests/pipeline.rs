//! Enrichment runs against canned search answers and a temp state file.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use pretty_assertions::assert_eq;
use rw_config::{FallbackContact, FallbackDirectory, RankingConfig, ScoringConfig};
use rw_core::entities::{CandidateContact, RegistryEntity, SearchHit};
use rw_core::enums::{ContactSource, EnrichmentStatus};
use rw_enrich::{Enricher, RunOptions, StateStore};
use rw_resolve::Scorer;
use rw_search::{SearchSession, StaticSearchProvider};

fn entity(name: &str, website: &str) -> RegistryEntity {
    RegistryEntity {
        website: website.into(),
        license_types: BTreeSet::from(["Major Payment Institution".to_string()]),
        ..RegistryEntity::new(name)
    }
}

fn entities() -> Vec<RegistryEntity> {
    vec![
        entity("ARIANA INVESTMENT PTE. LTD.", "https://ariana.sg"),
        entity("BETA PAY PTE LTD", ""),
        entity("GAMMA LABS PTE LTD", ""),
    ]
}

fn ariana_hits() -> Vec<SearchHit> {
    vec![
        SearchHit::new(
            "Ariana Lobo - Compliance Manager - XYZ Corp",
            "https://www.linkedin.com/in/arianalobo",
            "Works at XYZ Corp",
        ),
        SearchHit::new(
            "Mei Lin - Compliance Officer - Ariana Investment",
            "https://www.linkedin.com/in/meilin",
            "Compliance Officer at Ariana Investment",
        ),
        SearchHit::new(
            "John Smith - CCO - Ariana Investment",
            "https://sg.linkedin.com/in/johnsmith",
            "Chief Compliance Officer at Ariana Investment",
        ),
        SearchHit::new(
            "John Smith - Chief Compliance Officer | LinkedIn",
            "https://sg.linkedin.com/in/johnsmith/",
            "Ariana Investment. CCO since 2021",
        ),
    ]
}

fn provider() -> StaticSearchProvider {
    StaticSearchProvider::new()
        .with_results("ariana", ariana_hits())
        .with_failure("beta pay", 503)
}

fn enricher() -> Enricher {
    let fallback = FallbackDirectory {
        default: Vec::new(),
        companies: BTreeMap::from([(
            "Gamma Labs".to_string(),
            vec![FallbackContact {
                name: "Grace Goh".into(),
                title: "Head of Compliance".into(),
                email: Some("grace@gammalabs.sg".into()),
                linkedin_url: None,
            }],
        )]),
    };
    Enricher::new(
        Scorer::new(ScoringConfig::default()),
        RankingConfig::default(),
        fallback,
    )
}

fn state_store() -> (tempfile::TempDir, StateStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = StateStore::open(dir.path().join("enrichment.jsonl")).expect("state store");
    (dir, store)
}

#[tokio::test]
async fn run_enriches_persists_and_isolates_failures() {
    let (_dir, store) = state_store();
    let provider = provider();
    let mut session = SearchSession::open(&provider, Duration::ZERO, 10);
    let mut observed = Vec::new();

    let report = enricher()
        .run(&entities(), &mut session, &store, RunOptions::default(), |record| {
            observed.push(record.entity_name.clone());
        })
        .await
        .expect("run");

    assert_eq!(report.attempted, 3);
    assert_eq!(report.completed, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.high_confidence, 2);
    assert_eq!(observed.len(), 3);
    // Targeted query answers Ariana; Gamma falls through targeted and broad.
    assert_eq!(provider.queries().len(), 4);

    let state = store.load().expect("load");
    let ariana = state.get("ARIANA INVESTMENT PTE. LTD.").expect("ariana record");
    let prospect = ariana.prospect.as_ref().expect("prospect");
    let names: Vec<&str> = prospect.contacts.iter().map(|c| c.contact.name.as_str()).collect();
    assert_eq!(names, vec!["John Smith", "Mei Lin"]);
    assert_eq!(prospect.contacts[0].contact.priority, 1);
    assert!(prospect.high_confidence);

    let beta = state.get("BETA PAY PTE LTD").expect("beta record");
    assert_eq!(beta.status, EnrichmentStatus::Failed);
    assert!(beta.error.as_deref().is_some_and(|e| e.contains("503")));

    let gamma = state.get("GAMMA LABS PTE LTD").expect("gamma record");
    let gamma_contacts = &gamma.prospect.as_ref().expect("prospect").contacts;
    assert_eq!(gamma_contacts.len(), 1);
    assert_eq!(gamma_contacts[0].contact.name, "Grace Goh");
    assert_eq!(gamma_contacts[0].contact.source, ContactSource::CompanySite);
    assert_eq!(gamma_contacts[0].contact.priority, 3);
}

#[tokio::test]
async fn rerun_skips_complete_and_retries_failed() {
    let (_dir, store) = state_store();
    let provider = provider();
    let enricher = enricher();
    {
        let mut session = SearchSession::open(&provider, Duration::ZERO, 10);
        enricher
            .run(&entities(), &mut session, &store, RunOptions::default(), |_| {})
            .await
            .expect("first run");
    }

    let mut session = SearchSession::open(&provider, Duration::ZERO, 10);
    let second = enricher
        .run(&entities(), &mut session, &store, RunOptions::default(), |_| {})
        .await
        .expect("second run");
    assert_eq!(second.skipped, 2);
    assert_eq!(second.attempted, 1);
    assert_eq!(second.failed, 1);

    let forced = enricher
        .run(
            &entities(),
            &mut session,
            &store,
            RunOptions {
                force: true,
                limit: None,
            },
            |_| {},
        )
        .await
        .expect("forced run");
    assert_eq!(forced.skipped, 0);
    assert_eq!(forced.attempted, 3);
    assert_eq!(store.load().expect("load").len(), 3);
}

#[tokio::test]
async fn limit_caps_attempts() {
    let (_dir, store) = state_store();
    let provider = provider();
    let mut session = SearchSession::open(&provider, Duration::ZERO, 10);

    let report = enricher()
        .run(
            &entities(),
            &mut session,
            &store,
            RunOptions {
                force: false,
                limit: Some(1),
            },
            |_| {},
        )
        .await
        .expect("run");

    assert_eq!(report.attempted, 1);
    let state = store.load().expect("load");
    assert_eq!(state.len(), 1);
    assert!(state.is_complete("ARIANA INVESTMENT PTE. LTD."));
}

#[tokio::test]
async fn offline_session_uses_fallback_directory_only() {
    let (_dir, store) = state_store();
    let offline = StaticSearchProvider::new();
    let mut session = SearchSession::open(&offline, Duration::ZERO, 10);

    let report = enricher()
        .run(&entities(), &mut session, &store, RunOptions::default(), |_| {})
        .await
        .expect("run");

    assert_eq!(report.completed, 3);
    let state = store.load().expect("load");
    let ariana = state.get("ARIANA INVESTMENT PTE. LTD.").and_then(|r| r.prospect.as_ref());
    assert!(ariana.is_some_and(|p| p.contacts.is_empty()));
    // Entity-only score: license and website.
    assert!(ariana.is_some_and(|p| (p.confidence - 0.5).abs() < 1e-9));
}

#[test]
fn dedup_flags_shared_contact_and_rescoring_follows() {
    let (_dir, store) = state_store();
    let enricher = enricher();
    let shared = || {
        CandidateContact::new("John Smith", "CCO", ContactSource::Search)
            .with_linkedin_url("https://www.linkedin.com/in/johnsmith")
    };

    let alpha = enricher.build_prospect(&entity("ALPHA PAY PTE LTD", "alpha.sg"), vec![shared()]);
    let beta = enricher.build_prospect(&entity("BETA PAY PTE LTD", "beta.sg"), vec![shared()]);
    assert!((beta.confidence - 1.0).abs() < 1e-9);
    store
        .append(&rw_core::entities::EnrichmentRecord::complete(alpha))
        .expect("append");
    store
        .append(&rw_core::entities::EnrichmentRecord::complete(beta))
        .expect("append");

    let response = enricher.dedup(&store).expect("dedup");
    assert_eq!(response.entities, 2);
    assert_eq!(response.contacts, 2);
    assert_eq!(response.duplicates_flagged, 1);

    let state = store.load().expect("load");
    let beta = state
        .get("BETA PAY PTE LTD")
        .and_then(|r| r.prospect.as_ref())
        .expect("beta prospect");
    assert_eq!(beta.contacts.len(), 1);
    assert_eq!(beta.contacts[0].duplicate_of.as_deref(), Some("ALPHA PAY PTE LTD"));
    assert!(beta.contacts[0].low_confidence);
    assert!((beta.confidence - 0.5).abs() < 1e-9);
    assert!(!beta.high_confidence);

    let raw = std::fs::read_to_string(store.path()).expect("state file");
    assert_eq!(raw.lines().count(), 2);
}
