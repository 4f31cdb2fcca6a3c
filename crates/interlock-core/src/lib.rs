//! Interlock Core - Core types for the interlocking condition parser
//!
//! This crate provides the fundamental types shared by the parser and the SDK:
//! - Condition tree nodes produced by a parse
//! - Condition categories (track, timer, point, signal, ...)
//! - The name table that maps configured device names to categories
//! - Error types

pub mod condition;
pub mod error;

// Re-export commonly used types
pub use condition::{ConditionNode, ConditionType, NameTable};
pub use error::CoreError;
