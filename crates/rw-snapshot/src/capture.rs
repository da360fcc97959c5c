//! Capture runs: save a new snapshot and diff it against the one before.

use rw_core::entities::{Diff, RegistryEntity};

use crate::diff::diff;
use crate::error::SnapshotError;
use crate::store::SnapshotStore;

/// What one capture produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOutcome {
    pub snapshot_id: String,
    pub previous_id: Option<String>,
    pub count: usize,
    pub diff: Diff,
}

/// Diff between the two most recent snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestDiff {
    pub current_id: Option<String>,
    pub previous_id: Option<String>,
    pub diff: Diff,
}

/// Save `entities` as a new snapshot and diff it against the previous one.
///
/// With no previous snapshot every entity counts as added.
///
/// # Errors
///
/// Returns [`SnapshotError::EmptyCapture`] without touching the store when
/// `entities` is empty, or any store error from loading or saving.
pub fn capture(
    store: &SnapshotStore,
    entities: &[RegistryEntity],
) -> Result<CaptureOutcome, SnapshotError> {
    if entities.is_empty() {
        return Err(SnapshotError::EmptyCapture);
    }

    let previous = store.load_latest()?;
    let snapshot_id = store.save(entities)?;

    let (previous_id, diff) = match previous {
        Some(previous) => (Some(previous.id), diff(entities, &previous.snapshot.entities)),
        None => (
            None,
            Diff {
                added: entities.to_vec(),
                removed: Vec::new(),
            },
        ),
    };

    tracing::info!(
        snapshot = %snapshot_id,
        added = diff.added.len(),
        removed = diff.removed.len(),
        "registry captured"
    );

    Ok(CaptureOutcome {
        snapshot_id,
        previous_id,
        count: entities.len(),
        diff,
    })
}

/// Diff the two most recent snapshots in `store`.
///
/// A single snapshot diffs against nothing (everything added); an empty
/// store yields an empty diff.
///
/// # Errors
///
/// Returns [`SnapshotError`] if either snapshot cannot be read.
pub fn diff_latest(store: &SnapshotStore) -> Result<LatestDiff, SnapshotError> {
    let mut recent = store.load_n_previous(2)?.into_iter();
    let Some(current) = recent.next() else {
        return Ok(LatestDiff::default());
    };

    Ok(match recent.next() {
        Some(previous) => LatestDiff {
            diff: diff(&current.snapshot.entities, &previous.snapshot.entities),
            current_id: Some(current.id),
            previous_id: Some(previous.id),
        },
        None => LatestDiff {
            current_id: Some(current.id),
            previous_id: None,
            diff: Diff {
                added: current.snapshot.entities,
                removed: Vec::new(),
            },
        },
    })
}
