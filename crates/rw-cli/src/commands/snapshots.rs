use anyhow::Context;
use rw_core::responses::SnapshotListResponse;

use crate::cli::GlobalFlags;
use crate::commands::limit_of;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rwatch snapshots`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = list(ctx, limit_of(flags.limit))?;
    output(&response, flags.format)
}

fn list(ctx: &AppContext, limit: Option<usize>) -> anyhow::Result<SnapshotListResponse> {
    let mut snapshots = ctx.snapshots.list().context("failed to list snapshots")?;
    let total = snapshots.len();
    if let Some(limit) = limit {
        snapshots.truncate(limit);
    }
    Ok(SnapshotListResponse { snapshots, total })
}
