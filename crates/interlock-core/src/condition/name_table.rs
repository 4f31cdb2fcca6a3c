//! Name table mapping configured device names to condition types

use super::types::ConditionType;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lookup table from device name to category
///
/// Loaded once by a configuration collaborator and then only read. The parser
/// borrows it for the duration of a call, so a single table can be shared
/// across threads behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "HashMap<String, ConditionType>",
    into = "HashMap<String, ConditionType>"
)]
pub struct NameTable {
    entries: HashMap<String, ConditionType>,
}

impl NameTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, type)` pairs given as strings
    ///
    /// Later entries override earlier ones with the same name.
    pub fn from_pairs<I, N, T>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: AsRef<str>,
    {
        let mut table = Self::new();
        for (name, kind) in pairs {
            let name = name.into();
            let kind = kind.as_ref().parse::<ConditionType>().map_err(|e| CoreError::InvalidEntry {
                name: name.clone(),
                message: e.to_string(),
            })?;
            table.insert(name, kind)?;
        }
        Ok(table)
    }

    /// Add or replace an entry
    ///
    /// `Or` is reserved for nodes synthesized by the parser.
    pub fn insert(&mut self, name: impl Into<String>, kind: ConditionType) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::InvalidEntry {
                name,
                message: "empty name".to_string(),
            });
        }
        if kind == ConditionType::Or {
            return Err(CoreError::InvalidEntry {
                name,
                message: "'or' is reserved for parsed alternatives".to_string(),
            });
        }

        if let Some(previous) = self.entries.insert(name.clone(), kind) {
            log::debug!("name table entry '{}' overrides previous type {}", name, previous);
        }
        Ok(())
    }

    /// Merge another table into this one; entries of `other` win
    pub fn extend(&mut self, other: NameTable) {
        self.entries.extend(other.entries);
    }

    /// Look up the category of a name
    pub fn get(&self, name: &str) -> Option<&ConditionType> {
        self.entries.get(name)
    }

    /// Check if a name is declared
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries (unordered)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConditionType)> {
        self.entries.iter().map(|(name, kind)| (name.as_str(), kind))
    }
}

impl TryFrom<HashMap<String, ConditionType>> for NameTable {
    type Error = CoreError;

    fn try_from(entries: HashMap<String, ConditionType>) -> Result<Self> {
        let mut table = Self::new();
        for (name, kind) in entries {
            table.insert(name, kind)?;
        }
        Ok(table)
    }
}

impl From<NameTable> for HashMap<String, ConditionType> {
    fn from(table: NameTable) -> Self {
        table.entries
    }
}
