//! Registry row normalization.
//!
//! The registry prints one row per (license, activity) combination, so one
//! company appears on several rows. Normalization maps each row's cells onto
//! a [`RegistryRow`] using the configured [`RowLayout`] and merges rows that
//! share a canonical name into a single [`RegistryEntity`].
//!
//! Malformed rows are skipped, never fatal. Every skip is counted in
//! [`SkipCounts`] so a source-format break surfaces as a number an operator
//! can see.

use std::collections::HashMap;

use rw_config::RowLayout;
use rw_core::entities::RegistryEntity;
use serde::Serialize;

/// One raw registry row mapped onto named fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryRow {
    pub id: Option<String>,
    pub name: String,
    pub license_type: String,
    pub activity: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub sector: String,
}

/// Why a row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDefect {
    EmptyName,
    ColumnMismatch { expected: usize, found: usize },
}

/// Rows dropped during one normalization pass, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    pub empty_name: usize,
    pub column_mismatch: usize,
}

impl SkipCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.empty_name + self.column_mismatch
    }

    const fn record(&mut self, defect: RowDefect) {
        match defect {
            RowDefect::EmptyName => self.empty_name += 1,
            RowDefect::ColumnMismatch { .. } => self.column_mismatch += 1,
        }
    }
}

/// Merged entities plus what was dropped on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub entities: Vec<RegistryEntity>,
    pub rows_seen: usize,
    pub skipped: SkipCounts,
}

impl RegistryRow {
    /// Map raw cells onto fields.
    ///
    /// # Errors
    ///
    /// Returns a [`RowDefect`] when the cell count does not match the layout
    /// or the name cell is blank.
    pub fn from_cells(cells: &[String], layout: &RowLayout) -> Result<Self, RowDefect> {
        if cells.len() != layout.columns {
            return Err(RowDefect::ColumnMismatch {
                expected: layout.columns,
                found: cells.len(),
            });
        }

        let cell = |index: usize| cells.get(index).map_or("", |c| c.trim()).to_string();
        let optional = |index: Option<usize>| index.map(cell).unwrap_or_default();

        let name = cell(layout.name);
        if name.is_empty() {
            return Err(RowDefect::EmptyName);
        }

        Ok(Self {
            id: layout.id.map(cell).filter(|id| !id.is_empty()),
            name,
            license_type: cell(layout.license_type),
            activity: cell(layout.activity),
            address: optional(layout.address),
            phone: optional(layout.phone),
            website: optional(layout.website),
            sector: optional(layout.sector),
        })
    }
}

/// Normalize raw rows (already split into cells) into merged entities.
pub fn normalize_rows<I>(rows: I, layout: &RowLayout) -> NormalizeReport
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut skipped = SkipCounts::default();
    let mut rows_seen = 0;
    let parsed = rows
        .into_iter()
        .filter_map(|cells| {
            rows_seen += 1;
            RegistryRow::from_cells(&cells, layout)
                .inspect_err(|defect| {
                    tracing::debug!(?defect, cells = cells.len(), "skipping registry row");
                    skipped.record(*defect);
                })
                .ok()
        })
        .collect::<Vec<_>>();

    let entities = merge_rows(parsed);

    if skipped.total() > 0 {
        tracing::warn!(
            rows_seen,
            empty_name = skipped.empty_name,
            column_mismatch = skipped.column_mismatch,
            "registry rows skipped during normalization"
        );
    }

    NormalizeReport {
        entities,
        rows_seen,
        skipped,
    }
}

/// Merge rows into one entity per canonical name, in first-seen order.
///
/// License types and activities are unioned. Scalar fields keep the first
/// non-empty value seen for that name.
pub fn merge_rows<I>(rows: I) -> Vec<RegistryEntity>
where
    I: IntoIterator<Item = RegistryRow>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entities: Vec<RegistryEntity> = Vec::new();

    for row in rows {
        if row.name.is_empty() {
            continue;
        }
        let slot = *index.entry(row.name.clone()).or_insert_with(|| {
            entities.push(RegistryEntity::new(row.name.clone()));
            entities.len() - 1
        });
        let entity = &mut entities[slot];

        fill_blank(&mut entity.address, row.address);
        fill_blank(&mut entity.phone, row.phone);
        fill_blank(&mut entity.website, row.website);
        fill_blank(&mut entity.sector, row.sector);
        if entity.id.is_none() {
            entity.id = row.id;
        }
        if !row.license_type.is_empty() {
            entity.license_types.insert(row.license_type);
        }
        if !row.activity.is_empty() {
            entity.activities.insert(row.activity);
        }
    }

    entities
}

fn fill_blank(slot: &mut String, value: String) {
    if slot.is_empty() && !value.is_empty() {
        *slot = value;
    }
}
