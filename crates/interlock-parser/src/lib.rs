//! Interlock Parser - condition-expression parser for interlocking formulas
//!
//! This crate turns compact textual formulas (`21 22但30秒`, `X[Y]`,
//! `(P1)((P2))` ...) into ordered lists of
//! [`ConditionNode`](interlock_core::ConditionNode)s.
//!
//! Two entry points are provided:
//! - [`ExpressionParser`] for a single condition expression
//! - [`RouteLockParser`] for route-lock formulas made of parenthesized clauses

pub mod classifier;
pub mod diagnostics;
pub mod error;
pub mod expression_parser;
pub mod route_lock_parser;
pub mod splitter;

// Re-export main parser types
pub use classifier::LeafClassifier;
pub use diagnostics::{Diagnostic, DiagnosticKind, ParseReport, Severity};
pub use error::{ParseError, Result};
pub use expression_parser::{ExpressionParser, ParserOptions};
pub use route_lock_parser::RouteLockParser;
