use anyhow::Context;
use rw_core::responses::DiffResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rwatch diff`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let latest = rw_snapshot::diff_latest(&ctx.snapshots).context("failed to diff snapshots")?;
    output(
        &DiffResponse {
            current_snapshot_id: latest.current_id,
            previous_snapshot_id: latest.previous_id,
            diff: latest.diff,
        },
        flags.format,
    )
}
