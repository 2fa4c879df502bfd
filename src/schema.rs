//! Records of generated entities, kept under each theme in the project
//! configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ConfigStore;
use crate::constants::THEMES_KEY;
use crate::error::Result;
use crate::value::ConfigPath;

/// Kind of entity recorded under `themes.<theme>.<kind>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    PostType,
    Taxonomy,
    Menu,
    Service,
}

impl EntityKind {
    /// Configuration key of the list holding this kind.
    pub fn key(self) -> &'static str {
        match self {
            Self::PostType => "post-types",
            Self::Taxonomy => "taxonomies",
            Self::Menu => "menus",
            Self::Service => "services",
        }
    }

    /// Path of the list of this kind for `theme`.
    pub fn path(self, theme: &str) -> Result<ConfigPath> {
        ConfigPath::from_segments([THEMES_KEY, theme, self.key()])
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDescriptor {
    pub location: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub namespace: String,
    pub route: String,
    pub method: String,
}

/// Appends entity descriptors to the configuration store.
pub struct SchemaRegistry<'a> {
    store: &'a mut ConfigStore,
}

impl<'a> SchemaRegistry<'a> {
    pub fn new(store: &'a mut ConfigStore) -> Self {
        Self { store }
    }

    /// Appends `descriptor` to `themes.<theme>.<kind>`.
    ///
    /// Scalar descriptors (plain keys) are stored once. Map descriptors are
    /// not deduplicated: recording the same map twice stores it twice.
    pub fn record<T: Serialize>(&mut self, theme: &str, kind: EntityKind, descriptor: &T) -> Result<bool> {
        let value = serde_json::to_value(descriptor)?;
        self.store.add(&kind.path(theme)?, value)
    }

    /// Recorded entries of `kind` for `theme`, empty when none were recorded.
    pub fn entries(&self, theme: &str, kind: EntityKind) -> Result<Vec<Value>> {
        let entries = self.store.get(&kind.path(theme)?);
        Ok(entries.as_array().cloned().unwrap_or_default())
    }
}
