//! Builder pattern for ConditionEngine

use crate::config::EngineConfig;
use crate::engine::ConditionEngine;
use crate::error::Result;
use crate::loader::load_name_tables;
use interlock_core::NameTable;
use interlock_parser::ParserOptions;
use std::path::PathBuf;

/// Builder for ConditionEngine
///
/// # Example
///
/// ```rust,ignore
/// use interlock_sdk::ConditionEngineBuilder;
///
/// // From name table files
/// let engine = ConditionEngineBuilder::new()
///     .add_name_table_file("config/names.yaml")
///     .build()
///     .await?;
///
/// // Inline entries (for tests)
/// let engine = ConditionEngineBuilder::new()
///     .add_name("21", "point")
///     .add_name("1R", "signal")
///     .build()
///     .await?;
/// ```
pub struct ConditionEngineBuilder {
    config: EngineConfig,
}

impl ConditionEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
        }
    }

    /// Start from an existing configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Add a name table file
    pub fn add_name_table_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.name_table_files.push(path.into());
        self
    }

    /// Add multiple name table files
    pub fn add_name_table_files(mut self, paths: Vec<PathBuf>) -> Self {
        self.config.name_table_files.extend(paths);
        self
    }

    /// Add a name table entry directly (alternative to a file)
    ///
    /// # Arguments
    /// * `name` - Device name as written in formulas
    /// * `kind` - Type name, e.g. `point`, `signal`, `track`
    pub fn add_name(mut self, name: impl Into<String>, kind: impl Into<String>) -> Self {
        self.config.name_table_entries.push((name.into(), kind.into()));
        self
    }

    /// Set parser options
    pub fn with_parser_options(mut self, options: ParserOptions) -> Self {
        self.config.parser = options;
        self
    }

    /// Set the recursion limit
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.parser.max_depth = max_depth;
        self
    }

    /// Set the suffix marking timer leaves
    pub fn seconds_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.parser.seconds_suffix = suffix.into();
        self
    }

    /// Enable tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.config.enable_tracing = enable;
        self
    }

    /// Build the condition engine
    ///
    /// Name table files are loaded in order, then inline entries are applied
    /// on top.
    pub async fn build(self) -> Result<ConditionEngine> {
        self.config.validate()?;

        let mut table = load_name_tables(&self.config.name_table_files).await?;
        table.extend(NameTable::from_pairs(self.config.name_table_entries.iter().cloned())?);

        tracing::info!(
            "Condition engine ready: {} names from {} file(s)",
            table.len(),
            self.config.name_table_files.len()
        );

        Ok(ConditionEngine::new(table, self.config.parser).with_trace(self.config.enable_tracing))
    }
}

impl Default for ConditionEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
