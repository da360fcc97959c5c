use std::path::PathBuf;

use anyhow::Context;
use rw_config::WatchConfig;
use rw_enrich::StateStore;
use rw_snapshot::SnapshotStore;

use crate::cli::GlobalFlags;

/// Resources every data command needs, opened once at startup.
pub struct AppContext {
    pub config: WatchConfig,
    pub snapshots: SnapshotStore,
    pub state: StateStore,
}

impl AppContext {
    /// Open the snapshot store and state file under the data directory.
    ///
    /// `--data-dir` wins over `storage.data_dir`.
    pub fn init(mut config: WatchConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if let Some(dir) = &flags.data_dir {
            config.storage.data_dir = PathBuf::from(dir);
        }

        let snapshot_dir = config.storage.snapshot_dir();
        let snapshots = SnapshotStore::open(&snapshot_dir).with_context(|| {
            format!("failed to open snapshot store at {}", snapshot_dir.display())
        })?;

        let state_path = config.storage.enrichment_state_path();
        let state = StateStore::open(&state_path).with_context(|| {
            format!("failed to open enrichment state at {}", state_path.display())
        })?;

        Ok(Self {
            config,
            snapshots,
            state,
        })
    }
}
