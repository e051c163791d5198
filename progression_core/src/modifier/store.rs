//! PermanentModifiers - Durable backing store for permanent origins

use crate::config::ConfigError;
use crate::modifier::{LedgerError, ModifierRecord};
use crate::types::Origin;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Persisted set of permanent modifiers, keyed by origin
///
/// Order within each list is preserved across a save/load cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermanentModifiers(BTreeMap<Origin, Vec<ModifierRecord>>);

impl PermanentModifiers {
    pub fn new() -> Self {
        PermanentModifiers(BTreeMap::new())
    }

    /// Wrap lists already known to hold only permanent origins
    pub(crate) fn from_durable(lists: BTreeMap<Origin, Vec<ModifierRecord>>) -> Self {
        PermanentModifiers(lists)
    }

    /// Append a record to its origin's list
    pub fn push(&mut self, record: ModifierRecord) -> Result<(), LedgerError> {
        if !record.origin.is_permanent() {
            return Err(LedgerError::NoBackingStore(record.origin));
        }
        self.0.entry(record.origin).or_default().push(record);
        Ok(())
    }

    /// Records stored for an origin
    pub fn records(&self, origin: Origin) -> &[ModifierRecord] {
        self.0.get(&origin).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over every non-empty origin list
    pub fn iter(&self) -> impl Iterator<Item = (Origin, &[ModifierRecord])> {
        self.0
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(origin, records)| (*origin, records.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON, rejecting records under non-permanent origins
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let store: PermanentModifiers = serde_json::from_str(content)?;
        for (origin, records) in &store.0 {
            if !origin.is_permanent() {
                return Err(ConfigError::ValidationError(format!(
                    "origin {:?} cannot hold permanent modifiers",
                    origin
                )));
            }
            if let Some(stray) = records.iter().find(|r| r.origin != *origin) {
                return Err(ConfigError::ValidationError(format!(
                    "record for {:?} stored under {:?}",
                    stray.origin, origin
                )));
            }
        }
        Ok(store)
    }
}
