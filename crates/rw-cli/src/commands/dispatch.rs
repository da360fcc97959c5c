use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to its handler.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Capture(args) => commands::capture::handle(&args, ctx, flags).await,
        Commands::Diff => commands::diff::handle(ctx, flags),
        Commands::Snapshots => commands::snapshots::handle(ctx, flags),
        Commands::Enrich(args) => commands::enrich::handle(&args, ctx, flags).await,
        Commands::Dedup => commands::dedup::handle(ctx, flags),
        Commands::Show(args) => commands::show::handle(&args, ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
