//! # rw-config
//!
//! Layered configuration loading for regwatch using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RWATCH_*` prefix, `__` as separator)
//! 2. Project-level `.regwatch/config.toml`
//! 3. User-level `~/.config/regwatch/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RWATCH_SEARCH__ENDPOINT` -> `search.endpoint`,
//! `RWATCH_SCORING__THRESHOLD` -> `scoring.threshold`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use rw_config::WatchConfig;
//!
//! let config = WatchConfig::load_with_dotenv().expect("config");
//! if config.search.is_configured() {
//!     println!("search endpoint: {}", config.search.endpoint);
//! }
//! ```

mod error;
mod fallback;
mod ranking;
mod registry;
mod scoring;
mod search;
mod storage;

pub use error::ConfigError;
pub use fallback::{FallbackContact, FallbackDirectory};
pub use ranking::{RankingConfig, SeniorityRule};
pub use registry::{RegistryConfig, RowLayout};
pub use scoring::ScoringConfig;
pub use search::SearchConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WatchConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub fallback: FallbackDirectory,
}

impl WatchConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with one extra TOML file layered above the
    /// project file and below environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let config: Self = Self::base_figment()
            .merge(Toml::file(path))
            .merge(Self::env_provider())
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::base_figment().merge(Self::env_provider())
    }

    /// Reject values that would make scoring or parsing meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.registry.layout.validate()?;
        self.search.validate()?;
        self.scoring.validate()?;
        Ok(())
    }

    /// Defaults, then the user-global file, then the project file.
    fn base_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".regwatch/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    fn env_provider() -> Env {
        Env::prefixed("RWATCH_").split("__")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("regwatch").join("config.toml"))
    }
}
