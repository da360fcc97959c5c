use std::time::Duration;

use anyhow::{Context, anyhow, bail};
use rw_core::entities::RegistryEntity;
use rw_core::responses::EnrichRunResponse;
use rw_enrich::{Enricher, RunOptions};
use rw_search::{HttpSearchProvider, SearchProvider, SearchSession, StaticSearchProvider};

use crate::cli::{EnrichArgs, GlobalFlags};
use crate::commands::limit_of;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `rwatch enrich`.
pub async fn handle(args: &EnrichArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entities = targets(ctx, args.all)?;
    let options = RunOptions {
        force: args.force,
        limit: limit_of(flags.limit),
    };

    let response = if args.dry_run {
        enrich(ctx, &entities, offline_session(ctx), options).await?
    } else {
        let provider = HttpSearchProvider::new(&ctx.config.search)
            .context("search is not configured; set search.endpoint or pass --dry-run")?;
        let session = SearchSession::from_config(provider, &ctx.config.search);
        enrich(ctx, &entities, session, options).await?
    };

    output(&response, flags.format)
}

/// Entities to enrich: the latest capture's additions, or with `all` the
/// whole latest snapshot.
fn targets(ctx: &AppContext, all: bool) -> anyhow::Result<Vec<RegistryEntity>> {
    const NO_SNAPSHOTS: &str = "no snapshots stored yet; run `rwatch capture` first";

    if all {
        let latest = ctx
            .snapshots
            .load_latest()
            .context("failed to load latest snapshot")?;
        return latest
            .map(|stored| stored.snapshot.entities)
            .ok_or_else(|| anyhow!(NO_SNAPSHOTS));
    }

    let latest = rw_snapshot::diff_latest(&ctx.snapshots).context("failed to diff snapshots")?;
    if latest.current_id.is_none() {
        bail!(NO_SNAPSHOTS);
    }
    Ok(latest.diff.added)
}

/// A session that never hits the network: every entity falls through to the
/// fallback directory.
fn offline_session(ctx: &AppContext) -> SearchSession<StaticSearchProvider> {
    SearchSession::open(
        StaticSearchProvider::new(),
        Duration::ZERO,
        ctx.config.search.results_per_query,
    )
}

/// Run the pipeline, then flag contacts shared across entities if anything
/// new was persisted.
async fn enrich<P: SearchProvider>(
    ctx: &AppContext,
    entities: &[RegistryEntity],
    mut session: SearchSession<P>,
    options: RunOptions,
) -> anyhow::Result<EnrichRunResponse> {
    let enricher = Enricher::from_config(&ctx.config);
    let progress = Progress::bar(u64::try_from(entities.len()).unwrap_or(u64::MAX), "Enriching");

    let result = enricher
        .run(entities, &mut session, &ctx.state, options, |record| {
            progress.inc(1);
            progress.set_message(&record.entity_name);
        })
        .await;

    let stats = session.close();
    match &result {
        Ok(report) => progress.finish_ok(&format!(
            "{} enriched, {} failed, {} searches",
            report.completed, report.failed, stats.queries
        )),
        Err(_) => progress.finish_clear(),
    }
    let mut report = result.context("failed to persist enrichment state")?;

    if report.completed > 0 {
        report.duplicates_flagged = enricher
            .dedup(&ctx.state)
            .context("failed to deduplicate enrichment state")?
            .duplicates_flagged;
    }
    Ok(report)
}
