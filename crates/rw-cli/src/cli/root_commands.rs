use clap::{Args, Subcommand, ValueEnum};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the registry, store a snapshot, and report what changed
    Capture(CaptureArgs),
    /// Diff the two most recent snapshots
    Diff,
    /// List stored snapshot ids, newest first
    Snapshots,
    /// Find compliance contacts for newly registered entities, then flag
    /// contacts shared across entities
    Enrich(EnrichArgs),
    /// Flag contacts that appear under more than one entity
    Dedup,
    /// Print persisted prospects
    Show(ShowArgs),
    /// Print the JSON Schema of a stored file format
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CaptureArgs {
    /// Parse a saved registry page instead of fetching it
    #[arg(long, value_name = "HTML")]
    pub from_file: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct EnrichArgs {
    /// Re-enrich entities that already have a complete record
    #[arg(long)]
    pub force: bool,

    /// Use the fallback directory only; no search requests are made
    #[arg(long)]
    pub dry_run: bool,

    /// Enrich every entity in the latest snapshot, not only the newly added ones
    #[arg(long)]
    pub all: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Only show the record for this entity (exact registry name)
    #[arg(long)]
    pub entity: Option<String>,

    /// Only show prospects below the confidence threshold
    #[arg(long)]
    pub review: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    Snapshot,
    Record,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Which file format to describe
    #[arg(value_enum)]
    pub kind: SchemaKind,
}
