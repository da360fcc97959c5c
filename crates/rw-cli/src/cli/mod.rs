use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{CaptureArgs, Commands, EnrichArgs, SchemaArgs, SchemaKind, ShowArgs};

/// Top-level CLI parser for the `rwatch` binary.
#[derive(Debug, Parser)]
#[command(
    name = "rwatch",
    version,
    about = "regwatch - licensed-entity registry watcher and compliance contact finder"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max items to list or entities to enrich
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data directory (overrides storage.data_dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Extra config file layered above the project config
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            data_dir: self.data_dir.clone(),
            config: self.config.clone(),
        }
    }
}
