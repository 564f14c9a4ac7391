//! Override records and the override store
//!
//! The store maps unique identifiers to [`OverrideRecord`]s and keeps them in
//! document order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Manifest, Result};

/// A named partial manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideRecord {
    /// Human-readable summary shown during selection
    #[serde(default)]
    pub description: String,

    /// Partial manifest merged onto the base manifest
    #[serde(default)]
    pub manifest: Manifest,
}

impl OverrideRecord {
    /// Create a record with an empty partial manifest.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            manifest: Manifest::new(),
        }
    }
}

/// Mapping from identifier to override record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideStore {
    records: IndexMap<String, OverrideRecord>,
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&OverrideRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OverrideRecord)> {
        self.records.iter().map(|(id, record)| (id.as_str(), record))
    }

    /// Append a new record with an empty partial manifest.
    ///
    /// Existing identifiers are never overwritten.
    pub fn add(&mut self, id: impl Into<String>, description: impl Into<String>) -> Result<()> {
        self.insert(id, OverrideRecord::new(description))
    }

    /// Append a fully populated record.
    pub fn insert(&mut self, id: impl Into<String>, record: OverrideRecord) -> Result<()> {
        let id = id.into();
        if self.records.contains_key(&id) {
            return Err(Error::DuplicateIdentifier { id });
        }
        self.records.insert(id, record);
        Ok(())
    }
}
