//! Leaf classification
//!
//! Resolves a stripped leaf token to its category: the name table first,
//! then the naming conventions for track circuits and timers.

use interlock_core::{ConditionType, NameTable};

/// Suffix marking a track circuit name
pub const TRACK_SUFFIX: char = 'T';

/// Default suffix marking a timer in seconds
pub const DEFAULT_SECONDS_SUFFIX: &str = "秒";

/// Classifies leaf names against a borrowed name table
#[derive(Debug, Clone)]
pub struct LeafClassifier<'t> {
    table: &'t NameTable,
    seconds_suffix: String,
}

impl<'t> LeafClassifier<'t> {
    pub fn new(table: &'t NameTable) -> Self {
        Self::with_seconds_suffix(table, DEFAULT_SECONDS_SUFFIX)
    }

    pub fn with_seconds_suffix(table: &'t NameTable, seconds_suffix: impl Into<String>) -> Self {
        Self {
            table,
            seconds_suffix: seconds_suffix.into(),
        }
    }

    /// Classify a leaf, returning its category and the name to record
    ///
    /// Timer names lose their seconds suffix (`30秒` becomes `30`). Names
    /// matching no rule come back as `Null`.
    pub fn classify(&self, name: &str) -> (ConditionType, String) {
        if let Some(kind) = self.table.get(name) {
            return (kind.clone(), name.to_string());
        }

        if name.ends_with(TRACK_SUFFIX) {
            return (ConditionType::Track, name.to_string());
        }

        if !self.seconds_suffix.is_empty() {
            if let Some(seconds) = name.strip_suffix(self.seconds_suffix.as_str()) {
                return (ConditionType::Timer, seconds.to_string());
            }
        }

        (ConditionType::Null, name.to_string())
    }

    /// Check if the name table declares `name`, whatever its category
    pub fn is_declared(&self, name: &str) -> bool {
        self.table.contains(name)
    }
}
