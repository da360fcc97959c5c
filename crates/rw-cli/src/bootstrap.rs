use std::path::Path;

use anyhow::Context;
use rw_config::WatchConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, with `--config` slotted in above the project
/// file when given.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<WatchConfig> {
    match &flags.config {
        Some(path) => WatchConfig::load_with_file(Path::new(path))
            .with_context(|| format!("failed to load configuration with {path}")),
        None => WatchConfig::load_with_dotenv().context("failed to load configuration"),
    }
}
