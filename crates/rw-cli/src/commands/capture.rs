use anyhow::{Context, bail};
use rw_core::entities::RegistryEntity;
use rw_core::responses::CaptureResponse;
use rw_registry::{NormalizeReport, RegistryClient};
use rw_snapshot::CaptureOutcome;

use crate::cli::{CaptureArgs, GlobalFlags};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `rwatch capture`.
pub async fn handle(args: &CaptureArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = match &args.from_file {
        Some(path) => {
            let page = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read registry page {path}"))?;
            rw_registry::parse_page(&page, &ctx.config.registry.layout)
        }
        None => {
            let progress = Progress::spinner("Fetching registry");
            let client = RegistryClient::new(&ctx.config.registry);
            let fetched = client.fetch_entities().await;
            progress.finish_clear();
            fetched.context("failed to fetch registry page")?
        }
    };

    let response = capture_report(ctx, report)?;
    output(&response, flags.format)
}

/// Store a normalized page as a snapshot and summarize the change.
pub fn capture_report(ctx: &AppContext, report: NormalizeReport) -> anyhow::Result<CaptureResponse> {
    if report.entities.is_empty() {
        bail!(
            "registry page yielded no entities ({} rows seen, {} skipped); nothing captured",
            report.rows_seen,
            report.skipped.total()
        );
    }

    let outcome = rw_snapshot::capture(&ctx.snapshots, &report.entities)
        .context("failed to store snapshot")?;
    Ok(to_response(outcome, report.skipped.total()))
}

fn to_response(outcome: CaptureOutcome, skipped_rows: usize) -> CaptureResponse {
    CaptureResponse {
        snapshot_id: outcome.snapshot_id,
        previous_snapshot_id: outcome.previous_id,
        count: outcome.count,
        added: names(outcome.diff.added),
        removed: names(outcome.diff.removed),
        skipped_rows,
    }
}

fn names(entities: Vec<RegistryEntity>) -> Vec<String> {
    entities.into_iter().map(|entity| entity.name).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rw_registry::SkipCounts;

    use super::*;
    use crate::commands::test_support::context;

    fn report(names: &[&str]) -> NormalizeReport {
        NormalizeReport {
            entities: names.iter().map(|name| RegistryEntity::new(*name)).collect(),
            rows_seen: names.len() + 1,
            skipped: SkipCounts {
                empty_name: 1,
                column_mismatch: 0,
            },
        }
    }

    #[test]
    fn first_capture_reports_everything_added() {
        let (_dir, ctx) = context();
        let response = capture_report(&ctx, report(&["Alpha", "Beta"])).expect("capture");

        assert_eq!(response.count, 2);
        assert_eq!(response.previous_snapshot_id, None);
        assert_eq!(response.added, vec!["Alpha", "Beta"]);
        assert!(response.removed.is_empty());
        assert_eq!(response.skipped_rows, 1);
    }

    #[test]
    fn second_capture_reports_the_change() {
        let (_dir, ctx) = context();
        let first = capture_report(&ctx, report(&["Alpha", "Beta"])).expect("first capture");
        let second = capture_report(&ctx, report(&["Alpha", "Gamma"])).expect("second capture");

        assert_eq!(second.previous_snapshot_id, Some(first.snapshot_id));
        assert_eq!(second.added, vec!["Gamma"]);
        assert_eq!(second.removed, vec!["Beta"]);
    }

    #[test]
    fn empty_page_is_an_error_and_stores_nothing() {
        let (_dir, ctx) = context();
        let err = capture_report(&ctx, report(&[])).unwrap_err();

        assert!(err.to_string().contains("no entities"));
        assert!(ctx.snapshots.list().expect("list").is_empty());
    }
}
