use anyhow::Context;
use rw_core::entities::EnrichmentRecord;
use rw_core::responses::ProspectListResponse;

use crate::cli::{GlobalFlags, ShowArgs};
use crate::commands::limit_of;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rwatch show`.
pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = ctx.state.load().context("failed to load enrichment state")?;
    if state.skipped_lines > 0 {
        tracing::warn!(skipped = state.skipped_lines, "unreadable lines in enrichment state");
    }
    let response = select(
        state.records(),
        args.entity.as_deref(),
        args.review,
        limit_of(flags.limit),
    );
    output(&response, flags.format)
}

/// Records matching the filters, in state order. `total` counts matches
/// before the limit.
fn select(
    records: &[EnrichmentRecord],
    entity: Option<&str>,
    review: bool,
    limit: Option<usize>,
) -> ProspectListResponse {
    let mut records: Vec<EnrichmentRecord> = records
        .iter()
        .filter(|record| entity.is_none_or(|name| record.entity_name == name))
        .filter(|record| !review || needs_review(record))
        .cloned()
        .collect();
    let total = records.len();
    if let Some(limit) = limit {
        records.truncate(limit);
    }
    ProspectListResponse { records, total }
}

/// Failed records and prospects under the confidence threshold.
fn needs_review(record: &EnrichmentRecord) -> bool {
    record
        .prospect
        .as_ref()
        .is_none_or(|prospect| !prospect.high_confidence)
}
