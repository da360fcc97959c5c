//! Append-only snapshot store.
//!
//! Each capture is one pretty-printed JSON file named
//! `snapshot-<YYYYMMDDTHHMMSSffffffZ>-<NNNN>.json`. The id (the part between
//! `snapshot-` and `.json`) sorts lexically in capture order, so "latest"
//! never depends on filesystem mtimes.
//!
//! Writes go to a hidden temp file in the same directory and are then linked
//! into place without clobbering. A crash mid-write leaves only a temp file,
//! which listing ignores.

use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rw_core::entities::{RegistryEntity, Snapshot};

use crate::error::SnapshotError;

const FILE_PREFIX: &str = "snapshot-";
const FILE_SUFFIX: &str = ".json";
const MAX_SEQUENCE: u32 = 10_000;

/// A snapshot together with the id it was stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSnapshot {
    pub id: String,
    pub snapshot: Snapshot,
}

/// Directory-backed store of immutable registry captures.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Open (and create if needed) a store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist `entities` as a new snapshot stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the snapshot cannot be written.
    pub fn save(&self, entities: &[RegistryEntity]) -> Result<String, SnapshotError> {
        self.save_at(Utc::now(), entities)
    }

    /// Persist `entities` as a new snapshot stamped with `timestamp`.
    ///
    /// Never replaces an existing file: a second save with the same timestamp
    /// takes the next sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the snapshot cannot be written.
    pub fn save_at(
        &self,
        timestamp: DateTime<Utc>,
        entities: &[RegistryEntity],
    ) -> Result<String, SnapshotError> {
        let snapshot = Snapshot::new(timestamp, entities.to_vec());

        let mut tmp = tempfile::Builder::new()
            .prefix(".snapshot-")
            .suffix(".tmp")
            .tempfile_in(&self.dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, &snapshot)?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;

        let stamp = timestamp.format("%Y%m%dT%H%M%S%6fZ").to_string();
        for sequence in 0..MAX_SEQUENCE {
            let id = format!("{stamp}-{sequence:04}");
            match tmp.persist_noclobber(self.path_for(&id)) {
                Ok(_) => {
                    tracing::info!(snapshot = %id, count = snapshot.count, "snapshot saved");
                    return Ok(id);
                }
                Err(error) if error.error.kind() == ErrorKind::AlreadyExists => {
                    tmp = error.file;
                }
                Err(error) => return Err(SnapshotError::Io(error.error)),
            }
        }
        Err(SnapshotError::IdExhausted(stamp))
    }

    /// Ids of every stored snapshot, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the directory cannot be read.
    pub fn list(&self) -> Result<Vec<String>, SnapshotError> {
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if let Some(id) = name
                .strip_prefix(FILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(FILE_SUFFIX))
                .filter(|id| !id.is_empty())
            {
                ids.push(id.to_string());
            }
        }
        ids.sort_unstable_by(|a, b| b.cmp(a));
        Ok(ids)
    }

    /// Load one snapshot by id.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::NotFound`] for an unknown id, or a parse or
    /// consistency error for a damaged file.
    pub fn load(&self, id: &str) -> Result<Snapshot, SnapshotError> {
        let path = self.path_for(id);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Err(SnapshotError::NotFound(id.to_string()));
            }
            Err(error) => return Err(error.into()),
        };
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        snapshot.validate().map_err(|e| SnapshotError::Corrupt {
            id: id.to_string(),
            reason: e.to_string(),
        })?;
        Ok(snapshot)
    }

    /// The most recent snapshot, or `None` for an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the latest snapshot cannot be read.
    pub fn load_latest(&self) -> Result<Option<StoredSnapshot>, SnapshotError> {
        Ok(self.load_n_previous(1)?.into_iter().next())
    }

    /// The `n` most recent snapshots, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if any of them cannot be read.
    pub fn load_n_previous(&self, n: usize) -> Result<Vec<StoredSnapshot>, SnapshotError> {
        self.list()?
            .into_iter()
            .take(n)
            .map(|id| {
                let snapshot = self.load(&id)?;
                Ok(StoredSnapshot { id, snapshot })
            })
            .collect()
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{FILE_PREFIX}{id}{FILE_SUFFIX}"))
    }
}
