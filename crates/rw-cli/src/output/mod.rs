use rw_core::entities::EnrichmentRecord;
use rw_core::responses::{
    CaptureResponse, DedupResponse, DiffResponse, EnrichRunResponse, ProspectListResponse,
    SnapshotListResponse,
};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A response that can also be laid out as a table.
pub trait Tabular {
    fn headers(&self) -> Vec<&'static str>;
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Render a response in the requested format.
pub fn render<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let rows = value.rows();
            if rows.is_empty() {
                return Ok(String::from("(no rows)"));
            }
            Ok(table::render_table(&value.headers(), &rows, ui::prefs().term_width))
        }
    }
}

/// Print a response to stdout in the requested format.
pub fn output<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn pair(key: &str, value: impl ToString) -> Vec<String> {
    vec![key.to_string(), value.to_string()]
}

fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

impl Tabular for CaptureResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["key", "value"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![
            pair("snapshot_id", &self.snapshot_id),
            pair("previous_snapshot_id", or_dash(self.previous_snapshot_id.as_deref())),
            pair("count", self.count),
            pair("added", self.added.len()),
            pair("removed", self.removed.len()),
            pair("skipped_rows", self.skipped_rows),
        ]
    }
}

impl Tabular for DiffResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["change", "id", "name", "licenses"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let added = self.diff.added.iter().map(|entity| ("added", entity));
        let removed = self.diff.removed.iter().map(|entity| ("removed", entity));
        added
            .chain(removed)
            .map(|(change, entity)| {
                vec![
                    change.to_string(),
                    or_dash(entity.id.as_deref()),
                    entity.name.clone(),
                    entity.license_types.iter().cloned().collect::<Vec<_>>().join(", "),
                ]
            })
            .collect()
    }
}

impl Tabular for SnapshotListResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["snapshot_id"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.snapshots.iter().map(|id| vec![id.clone()]).collect()
    }
}

impl Tabular for EnrichRunResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["key", "value"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![
            pair("attempted", self.attempted),
            pair("completed", self.completed),
            pair("failed", self.failed),
            pair("skipped", self.skipped),
            pair("high_confidence", self.high_confidence),
            pair("duplicates_flagged", self.duplicates_flagged),
        ]
    }
}

impl Tabular for DedupResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["key", "value"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![
            pair("entities", self.entities),
            pair("contacts", self.contacts),
            pair("duplicates_flagged", self.duplicates_flagged),
        ]
    }
}

impl Tabular for ProspectListResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["entity", "status", "confidence", "contact", "title", "profile"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(record_row).collect()
    }
}

fn record_row(record: &EnrichmentRecord) -> Vec<String> {
    let prospect = record.prospect.as_ref();
    let primary = prospect.and_then(|p| p.primary_contact()).map(|c| &c.contact);
    vec![
        record.entity_name.clone(),
        record.status.as_str().to_string(),
        prospect.map_or_else(|| String::from("-"), |p| format!("{:.2}", p.confidence)),
        or_dash(primary.map(|c| c.name.as_str())),
        or_dash(primary.map(|c| c.title.as_str()).or(record.error.as_deref())),
        or_dash(primary.and_then(|c| c.linkedin_url.as_deref())),
    ]
}

#[cfg(test)]
mod tests {
    use rw_core::entities::{CandidateContact, Prospect, RegistryEntity};
    use rw_core::enums::ContactSource;

    use super::*;

    fn capture() -> CaptureResponse {
        CaptureResponse {
            snapshot_id: "20261018T120000000000Z-0000".into(),
            previous_snapshot_id: None,
            count: 2,
            added: vec!["Alpha".into(), "Beta".into()],
            removed: Vec::new(),
            skipped_rows: 1,
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&capture(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["count"], 2);
        assert_eq!(parsed["added"][1], "Beta");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&capture(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(serde_json::from_str::<serde_json::Value>(&out).is_ok());
    }

    #[test]
    fn table_render_uses_key_value_rows() {
        let out = render(&capture(), OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("previous_snapshot_id  -"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let list = SnapshotListResponse {
            snapshots: Vec::new(),
            total: 0,
        };
        assert_eq!(render(&list, OutputFormat::Table).expect("render"), "(no rows)");
    }

    #[test]
    fn record_rows_show_primary_contact_or_error() {
        let entity = RegistryEntity::new("Alpha Pte Ltd");
        let contact = CandidateContact::new("John Smith", "CCO", ContactSource::Search)
            .with_linkedin_url("https://sg.linkedin.com/in/johnsmith");
        let prospect = Prospect {
            entity,
            contacts: vec![contact.into()],
            confidence: 0.8,
            high_confidence: true,
            enriched_at: chrono::Utc::now(),
        };
        let list = ProspectListResponse {
            records: vec![
                EnrichmentRecord::complete(prospect),
                EnrichmentRecord::failed("Beta", "search API error (503)"),
            ],
            total: 2,
        };

        let rows = list.rows();
        assert_eq!(rows[0][1], "complete");
        assert_eq!(rows[0][2], "0.80");
        assert_eq!(rows[0][3], "John Smith");
        assert_eq!(rows[1][1], "failed");
        assert_eq!(rows[1][4], "search API error (503)");
    }
}
