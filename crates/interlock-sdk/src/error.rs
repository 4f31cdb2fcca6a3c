//! SDK error types

use std::path::PathBuf;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid name table data
    #[error("Name table error: {0}")]
    NameTable(#[from] interlock_core::CoreError),

    /// Parser error
    #[error("Parser error: {0}")]
    Parse(#[from] interlock_parser::ParseError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML name table could not be read
    #[error("YAML error in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON name table could not be read
    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Name table file with an unknown extension
    #[error("Unsupported name table format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
