use rw_core::entities::{EnrichmentRecord, Snapshot};

use crate::cli::{GlobalFlags, OutputFormat, SchemaArgs, SchemaKind};

/// Handle `rwatch schema`. Always JSON; `--format raw` prints it on one line.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.kind {
        SchemaKind::Snapshot => schemars::schema_for!(Snapshot),
        SchemaKind::Record => schemars::schema_for!(EnrichmentRecord),
    };
    let rendered = if flags.format == OutputFormat::Raw {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{rendered}");
    Ok(())
}
