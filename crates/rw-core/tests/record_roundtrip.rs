//! Serde roundtrip and JsonSchema validation tests for persisted record types.

use std::collections::BTreeSet;

use chrono::Utc;
use pretty_assertions::assert_eq;
use rw_core::entities::*;
use rw_core::enums::*;
use rw_core::responses::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_entity() -> RegistryEntity {
    RegistryEntity {
        id: Some("PS20200001".into()),
        name: "HASHKEY DIGITAL ASSET GROUP PTE. LTD.".into(),
        address: "1 Raffles Place".into(),
        phone: "+65 6000 0000".into(),
        website: "https://hashkey.com".into(),
        sector: "Payments".into(),
        license_types: BTreeSet::from(["Major Payment Institution".to_string()]),
        activities: BTreeSet::from([
            "Digital payment token service".to_string(),
            "Cross-border money transfer service".to_string(),
        ]),
    }
}

fn sample_contact() -> VerifiedContact {
    CandidateContact::new("Jane Tan", "Chief Compliance Officer", ContactSource::Search)
        .with_employer("HashKey Group")
        .with_linkedin_url("https://sg.linkedin.com/in/janetan")
        .into()
}

roundtrip_and_validate!(entity_roundtrip, RegistryEntity, sample_entity());

roundtrip_and_validate!(
    snapshot_roundtrip,
    Snapshot,
    Snapshot::new(Utc::now(), vec![sample_entity(), RegistryEntity::new("Beta")])
);

roundtrip_and_validate!(
    diff_roundtrip,
    Diff,
    Diff {
        added: vec![sample_entity()],
        removed: Vec::new(),
    }
);

roundtrip_and_validate!(verified_contact_roundtrip, VerifiedContact, sample_contact());

roundtrip_and_validate!(
    prospect_roundtrip,
    Prospect,
    Prospect {
        entity: sample_entity(),
        contacts: vec![sample_contact()],
        confidence: 0.75,
        high_confidence: true,
        enriched_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    failed_record_roundtrip,
    EnrichmentRecord,
    EnrichmentRecord::failed("Beta", "registry fetch failed")
);

roundtrip_and_validate!(
    capture_response_roundtrip,
    CaptureResponse,
    CaptureResponse {
        snapshot_id: "20261018T120000000000Z-0000".into(),
        previous_snapshot_id: None,
        count: 2,
        added: vec!["Alpha".into(), "Beta".into()],
        removed: Vec::new(),
        skipped_rows: 1,
    }
);

roundtrip_and_validate!(
    enrich_run_response_roundtrip,
    EnrichRunResponse,
    EnrichRunResponse {
        attempted: 3,
        completed: 2,
        failed: 1,
        skipped: 4,
        high_confidence: 1,
        duplicates_flagged: 1,
    }
);
