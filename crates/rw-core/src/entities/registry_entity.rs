use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One registrant, merged from every registry row that carries its name.
///
/// `name` is the canonical key exactly as the registry prints it
/// (case-sensitive). License types and activities are sets so that merging
/// rows is order-independent and capture files stay byte-stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RegistryEntity {
    /// Registry-assigned identifier, when the source exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub license_types: BTreeSet<String>,
    #[serde(default)]
    pub activities: BTreeSet<String>,
}

/// Stable identity of an entity across captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKey<'a> {
    Id(&'a str),
    Name(&'a str),
}

/// Which field identifies entities within one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    Id,
    Name,
}

impl KeyMode {
    /// `Id` when every entity in `entities` carries a registry id, else `Name`.
    ///
    /// One mode must cover both sides of a diff; mixing id keys and name
    /// keys would report an unchanged entity as both added and removed.
    pub fn for_entities<'a, I>(entities: I) -> Self
    where
        I: IntoIterator<Item = &'a RegistryEntity>,
    {
        if entities.into_iter().all(|entity| entity.registry_id().is_some()) {
            Self::Id
        } else {
            Self::Name
        }
    }
}

impl RegistryEntity {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Registry id, when present and non-blank.
    #[must_use]
    pub fn registry_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }

    /// This entity's key under `mode`.
    ///
    /// Under [`KeyMode::Id`] an entity without a registry id still falls
    /// back to its name; callers pick `Id` only when every entity has one.
    #[must_use]
    pub fn key(&self, mode: KeyMode) -> EntityKey<'_> {
        match (mode, self.registry_id()) {
            (KeyMode::Id, Some(id)) => EntityKey::Id(id),
            _ => EntityKey::Name(&self.name),
        }
    }

    #[must_use]
    pub fn has_website(&self) -> bool {
        !self.website.trim().is_empty()
    }
}
