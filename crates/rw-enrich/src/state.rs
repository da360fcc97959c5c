//! Append-only JSONL enrichment state.
//!
//! One [`EnrichmentRecord`] per line, appended after each entity finishes.
//! Loading replays the file and keeps the last record per entity name. A
//! line that does not parse (a write cut short by a crash) is skipped with a
//! warning instead of failing the load.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rw_core::entities::{EnrichmentRecord, Prospect};

use crate::error::StateError;

/// Handle to the state file.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Point at `path`, creating its parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Io`] if the directory cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StateError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Io`] if the write fails.
    pub fn append(&self, record: &EnrichmentRecord) -> Result<(), StateError> {
        serde_jsonlines::append_json_lines(&self.path, [record])?;
        Ok(())
    }

    /// Replay the file into its current state. A missing file is an empty state.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Io`] if the file exists but cannot be read.
    pub fn load(&self) -> Result<EnrichmentState, StateError> {
        let lines = match serde_jsonlines::json_lines::<EnrichmentRecord, _>(&self.path) {
            Ok(lines) => lines,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Ok(EnrichmentState::default());
            }
            Err(error) => return Err(error.into()),
        };

        let mut state = EnrichmentState::default();
        for (number, line) in lines.enumerate() {
            match line {
                Ok(record) => state.upsert(record),
                Err(error)
                    if matches!(error.kind(), ErrorKind::InvalidData | ErrorKind::UnexpectedEof) =>
                {
                    tracing::warn!(line = number + 1, %error, "skipping unreadable state line");
                    state.skipped_lines += 1;
                }
                Err(error) => return Err(error.into()),
            }
        }
        Ok(state)
    }

    /// Replace the file with exactly `state`'s records.
    ///
    /// Written to a temp file beside the state file and renamed over it, so a
    /// crash leaves either the old file or the new one.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the temp file cannot be written or renamed.
    pub fn compact(&self, state: &EnrichmentState) -> Result<(), StateError> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let tmp = tempfile::Builder::new()
            .prefix(".enrichment-")
            .suffix(".tmp")
            .tempfile_in(dir)?;
        serde_jsonlines::write_json_lines(tmp.path(), state.records())?;
        tmp.persist(&self.path).map_err(|e| StateError::Persist {
            path: self.path.display().to_string(),
            source: e.error,
        })?;
        Ok(())
    }
}

/// Latest record per entity, in order of each entity's first appearance.
#[derive(Debug, Clone, Default)]
pub struct EnrichmentState {
    records: Vec<EnrichmentRecord>,
    index: HashMap<String, usize>,
    /// Lines that could not be parsed during load.
    pub skipped_lines: usize,
}

impl EnrichmentState {
    /// Insert or replace the record for `record.entity_name`.
    pub fn upsert(&mut self, record: EnrichmentRecord) {
        match self.index.get(&record.entity_name) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.index.insert(record.entity_name.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    #[must_use]
    pub fn get(&self, entity_name: &str) -> Option<&EnrichmentRecord> {
        self.index.get(entity_name).map(|&slot| &self.records[slot])
    }

    /// `true` when the entity's latest record is complete.
    #[must_use]
    pub fn is_complete(&self, entity_name: &str) -> bool {
        self.get(entity_name).is_some_and(|r| r.status.is_settled())
    }

    #[must_use]
    pub fn records(&self) -> &[EnrichmentRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut EnrichmentRecord> {
        self.records.iter_mut()
    }

    /// Prospects of complete records, in state order.
    pub fn prospects(&self) -> impl Iterator<Item = &Prospect> {
        self.records.iter().filter_map(|r| r.prospect.as_ref())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rw_core::entities::RegistryEntity;
    use rw_core::enums::EnrichmentStatus;

    fn complete(name: &str, confidence: f64) -> EnrichmentRecord {
        EnrichmentRecord::complete(Prospect {
            entity: RegistryEntity::new(name),
            contacts: Vec::new(),
            confidence,
            high_confidence: false,
            enriched_at: Utc::now(),
        })
    }

    fn store() -> (tempfile::TempDir, StateStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::open(dir.path().join("data/enrichment.jsonl")).unwrap();
        (dir, store)
    }

    #[test]
    fn missing_file_is_empty_state() {
        let (_dir, store) = store();
        let state = store.load().unwrap();
        assert!(state.is_empty());
        assert_eq!(state.skipped_lines, 0);
    }

    #[test]
    fn last_write_wins_and_first_position_is_kept() {
        let (_dir, store) = store();
        store.append(&EnrichmentRecord::failed("Alpha", "timeout")).unwrap();
        store.append(&complete("Beta", 0.5)).unwrap();
        store.append(&complete("Alpha", 0.8)).unwrap();

        let state = store.load().unwrap();
        assert_eq!(state.len(), 2);
        assert_eq!(state.records()[0].entity_name, "Alpha");
        assert_eq!(state.records()[0].status, EnrichmentStatus::Complete);
        assert!(state.is_complete("Alpha"));
        assert!(state.is_complete("Beta"));
        assert!(!state.is_complete("Gamma"));
    }

    #[test]
    fn failed_latest_record_is_not_complete() {
        let (_dir, store) = store();
        store.append(&complete("Alpha", 0.8)).unwrap();
        store.append(&EnrichmentRecord::failed("Alpha", "search down")).unwrap();
        assert!(!store.load().unwrap().is_complete("Alpha"));
    }

    #[test]
    fn torn_line_is_skipped() {
        let (_dir, store) = store();
        store.append(&complete("Alpha", 0.8)).unwrap();
        let mut raw = std::fs::read_to_string(store.path()).unwrap();
        raw.push_str("{\"entity_name\":\"Beta\",\"sta\n");
        std::fs::write(store.path(), raw).unwrap();
        store.append(&complete("Gamma", 0.4)).unwrap();

        let state = store.load().unwrap();
        assert_eq!(state.skipped_lines, 1);
        assert!(state.is_complete("Alpha"));
        assert!(state.is_complete("Gamma"));
        assert!(state.get("Beta").is_none());
    }

    #[test]
    fn compact_rewrites_one_line_per_entity() {
        let (_dir, store) = store();
        for confidence in [0.1, 0.2, 0.3] {
            store.append(&complete("Alpha", confidence)).unwrap();
        }
        let state = store.load().unwrap();
        store.compact(&state).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw.lines().count(), 1);
        let reloaded = store.load().unwrap();
        let confidence = reloaded.prospects().next().map(|p| p.confidence);
        assert_eq!(confidence, Some(0.3));
    }
}
