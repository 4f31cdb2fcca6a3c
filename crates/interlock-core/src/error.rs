//! Error types for Interlock Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid name table entry '{name}': {message}")]
    InvalidEntry { name: String, message: String },

    #[error("Invalid condition type: {0}")]
    InvalidType(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
