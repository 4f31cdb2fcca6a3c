//! Interlock SDK
//!
//! High-level API for parsing interlocking condition formulas: loads the
//! name table once and exposes the expression and route-lock parsers.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;

// Re-export main types
pub use builder::ConditionEngineBuilder;
pub use config::EngineConfig;
pub use engine::ConditionEngine;
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use interlock_core::{ConditionNode, ConditionType, NameTable};
pub use interlock_parser::{Diagnostic, DiagnosticKind, ParseReport, ParserOptions, Severity};
