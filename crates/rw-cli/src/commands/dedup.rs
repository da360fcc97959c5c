use anyhow::Context;
use rw_enrich::Enricher;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rwatch dedup`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = Enricher::from_config(&ctx.config)
        .dedup(&ctx.state)
        .context("failed to deduplicate enrichment state")?;
    output(&response, flags.format)
}
