//! Snapshot store and capture behavior against a real directory.

use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use rw_core::entities::RegistryEntity;
use rw_snapshot::{SnapshotError, SnapshotStore, capture, diff_latest};

fn entity(name: &str, license: &str) -> RegistryEntity {
    RegistryEntity {
        website: format!("https://{}.example", name.to_lowercase()),
        license_types: BTreeSet::from([license.to_string()]),
        activities: BTreeSet::from(["Account issuance service".to_string()]),
        ..RegistryEntity::new(name)
    }
}

fn open_store() -> (tempfile::TempDir, SnapshotStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = SnapshotStore::open(dir.path()).expect("store opens");
    (dir, store)
}

#[test]
fn save_then_load_latest_roundtrips() {
    let (_dir, store) = open_store();
    let entities = vec![
        entity("Gamma", "Major Payment Institution"),
        entity("Alpha", "Standard Payment Institution"),
        entity("Beta", "Money-changing"),
    ];

    let id = store.save(&entities).expect("save");
    let latest = store.load_latest().expect("load").expect("present");

    assert_eq!(latest.id, id);
    assert_eq!(latest.snapshot.count, entities.len());
    assert_eq!(latest.snapshot.entities, entities);
}

#[test]
fn file_uses_institutions_field() {
    let (_dir, store) = open_store();
    let id = store.save(&[entity("Alpha", "MPI")]).expect("save");

    let raw = std::fs::read_to_string(store.dir().join(format!("snapshot-{id}.json")))
        .expect("file exists");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value["count"], 1);
    assert_eq!(value["institutions"][0]["name"], "Alpha");
    assert!(value["timestamp"].as_str().is_some_and(|ts| ts.starts_with("20")));
}

#[rstest]
#[case(1, 1)]
#[case(2, 2)]
#[case(5, 3)]
fn load_n_previous_is_descending(#[case] n: usize, #[case] expected: usize) {
    let (_dir, store) = open_store();
    for (hour, name) in [(9, "First"), (10, "Second"), (11, "Third")] {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, hour, 0, 0).unwrap();
        store.save_at(at, &[entity(name, "MPI")]).expect("save");
    }

    let recent = store.load_n_previous(n).expect("load");
    assert_eq!(recent.len(), expected);
    assert_eq!(recent[0].snapshot.entities[0].name, "Third");
    let ids: Vec<&String> = recent.iter().map(|s| &s.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);
}

#[test]
fn latest_is_decided_by_id_not_write_order() {
    let (_dir, store) = open_store();
    let later = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
    let earlier = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();

    store.save_at(later, &[entity("Later", "MPI")]).expect("save");
    store.save_at(earlier, &[entity("Earlier", "MPI")]).expect("save");

    let latest = store.load_latest().expect("load").expect("present");
    assert_eq!(latest.snapshot.entities[0].name, "Later");
}

#[test]
fn empty_capture_leaves_history_untouched() {
    let (_dir, store) = open_store();
    store.save(&[entity("Alpha", "MPI")]).expect("save");

    let err = capture(&store, &[]).unwrap_err();
    assert!(matches!(err, SnapshotError::EmptyCapture));
    assert_eq!(store.list().expect("list").len(), 1);
}

#[test]
fn failed_write_surfaces_io_error_and_stores_nothing() {
    let (_dir, store) = open_store();
    std::fs::remove_dir_all(store.dir()).expect("remove store dir");

    let err = store.save(&[entity("Alpha", "MPI")]).unwrap_err();
    assert!(matches!(err, SnapshotError::Io(_)), "unexpected error: {err:?}");

    std::fs::create_dir_all(store.dir()).expect("recreate store dir");
    assert!(store.list().expect("list").is_empty());
    assert!(store.load_latest().expect("load").is_none());
}

#[test]
fn failed_capture_keeps_earlier_snapshots() {
    let (_dir, store) = open_store();
    let first = capture(&store, &[entity("Alpha", "MPI")]).expect("capture");

    let moved = store.dir().with_extension("moved");
    std::fs::rename(store.dir(), &moved).expect("move store dir");
    std::fs::write(store.dir(), b"not a directory").expect("block store dir");

    let err = capture(&store, &[entity("Beta", "SPI")]).unwrap_err();
    assert!(matches!(err, SnapshotError::Io(_)), "unexpected error: {err:?}");

    std::fs::remove_file(store.dir()).expect("unblock store dir");
    std::fs::rename(&moved, store.dir()).expect("restore store dir");
    assert_eq!(store.list().expect("list"), vec![first.snapshot_id]);
}

#[test]
fn first_capture_reports_everything_added() {
    let (_dir, store) = open_store();
    let outcome = capture(&store, &[entity("Alpha", "MPI"), entity("Beta", "SPI")]).expect("capture");

    assert!(outcome.previous_id.is_none());
    assert_eq!(outcome.count, 2);
    assert_eq!(outcome.diff.added.len(), 2);
    assert!(outcome.diff.removed.is_empty());
}

#[test]
fn second_capture_diffs_against_first() {
    let (_dir, store) = open_store();
    let first = capture(&store, &[entity("Alpha", "MPI"), entity("Beta", "SPI")]).expect("capture");
    let second = capture(&store, &[entity("Alpha", "MPI"), entity("Gamma", "MPI")]).expect("capture");

    assert_eq!(second.previous_id.as_deref(), Some(first.snapshot_id.as_str()));
    assert_eq!(second.diff.added, vec![entity("Gamma", "MPI")]);
    assert_eq!(second.diff.removed, vec![entity("Beta", "SPI")]);

    let latest = diff_latest(&store).expect("diff");
    assert_eq!(latest.current_id.as_deref(), Some(second.snapshot_id.as_str()));
    assert_eq!(latest.diff, second.diff);
}

#[test]
fn diff_latest_on_empty_store_is_empty() {
    let (_dir, store) = open_store();
    let latest = diff_latest(&store).expect("diff");
    assert!(latest.current_id.is_none());
    assert!(latest.diff.is_empty());
}
