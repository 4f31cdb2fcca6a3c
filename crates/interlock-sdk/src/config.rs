//! Configuration types for ConditionEngine

use crate::error::{Result, SdkError};
use interlock_parser::ParserOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Name table file path(s), merged in order
    pub name_table_files: Vec<PathBuf>,

    /// Inline name table entries (name, type) - applied after the files
    #[serde(skip)]
    pub name_table_entries: Vec<(String, String)>,

    /// Parser options
    pub parser: ParserOptions,

    /// Log every parse result at debug level
    pub enable_tracing: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            name_table_files: Vec::new(),
            name_table_entries: Vec::new(),
            parser: ParserOptions::default(),
            enable_tracing: false,
        }
    }

    /// Add a name table file
    pub fn with_name_table_file(mut self, path: PathBuf) -> Self {
        self.name_table_files.push(path);
        self
    }

    /// Set parser options
    pub fn with_parser_options(mut self, options: ParserOptions) -> Self {
        self.parser = options;
        self
    }

    /// Enable tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.enable_tracing = enable;
        self
    }

    /// Check the configuration before building an engine
    pub fn validate(&self) -> Result<()> {
        if self.parser.max_depth == 0 {
            return Err(SdkError::Config("parser.max_depth must be at least 1".to_string()));
        }
        if self.parser.seconds_suffix.trim().is_empty() {
            return Err(SdkError::Config("parser.seconds_suffix must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_builder() {
        let config = EngineConfig::new()
            .with_name_table_file(PathBuf::from("names.yaml"))
            .enable_tracing(true);

        assert_eq!(config.name_table_files.len(), 1);
        assert!(config.enable_tracing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let config = EngineConfig::new().with_parser_options(ParserOptions {
            max_depth: 0,
            ..ParserOptions::default()
        });

        assert!(matches!(config.validate(), Err(SdkError::Config(_))));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let yaml = r#"
name_table_files:
  - stations/tokyo.yaml
parser:
  max_depth: 16
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.name_table_files, vec![PathBuf::from("stations/tokyo.yaml")]);
        assert_eq!(config.parser.max_depth, 16);
        assert_eq!(config.parser.seconds_suffix, "秒");
        assert!(!config.enable_tracing);
    }
}
