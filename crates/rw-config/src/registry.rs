//! Registry source configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// URL of the registry listing page.
    #[serde(default)]
    pub url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Column layout of a registry table row.
    #[serde(default)]
    pub layout: RowLayout,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: default_timeout_secs(),
            layout: RowLayout::default(),
        }
    }
}

impl RegistryConfig {
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Where each field sits in a registry table row.
///
/// A row whose cell count differs from `columns` is treated as malformed and
/// skipped, so a change in the source's table shape shows up as skip counts
/// rather than garbled entities.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RowLayout {
    pub columns: usize,
    pub name: usize,
    pub license_type: usize,
    pub activity: usize,
    pub address: Option<usize>,
    pub phone: Option<usize>,
    pub website: Option<usize>,
    pub sector: Option<usize>,
    /// Column carrying a registry-assigned identifier, if any.
    pub id: Option<usize>,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            columns: 7,
            name: 0,
            license_type: 1,
            activity: 2,
            address: Some(3),
            phone: Some(4),
            website: Some(5),
            sector: Some(6),
            id: None,
        }
    }
}

impl RowLayout {
    /// Every index the layout refers to.
    fn indices(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        [
            ("name", Some(self.name)),
            ("license_type", Some(self.license_type)),
            ("activity", Some(self.activity)),
            ("address", self.address),
            ("phone", self.phone),
            ("website", self.website),
            ("sector", self.sector),
            ("id", self.id),
        ]
        .into_iter()
        .filter_map(|(field, index)| index.map(|i| (field, i)))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if any column index falls outside
    /// `columns`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::InvalidValue {
                field: "registry.layout.columns".into(),
                reason: "must be at least 1".into(),
            });
        }
        for (field, index) in self.indices() {
            if index >= self.columns {
                return Err(ConfigError::InvalidValue {
                    field: format!("registry.layout.{field}"),
                    reason: format!("column {index} is outside a {}-column row", self.columns),
                });
            }
        }
        Ok(())
    }
}
