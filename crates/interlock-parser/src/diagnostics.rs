//! Diagnostics aggregated per parse call

use crate::error::ParseError;
use interlock_core::ConditionNode;
use serde::Serialize;
use std::fmt;

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Parsing continued; the result is usable
    Warning,
    /// The clause was dropped
    Error,
}

/// What a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MalformedExpression,
    ExpressionTooDeep,
    /// Leaf matched neither the name table nor a suffix rule
    UnclassifiedLeaf,
    /// A `但` clause with nothing before it to attach to
    DetachedContinuation,
}

/// A single finding from a parse call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub message: String,
    /// The text the diagnostic refers to
    pub fragment: String,
    /// Byte offset within the parsed clause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Index of the top-level clause, for multi-clause input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause: Option<usize>,
}

impl Diagnostic {
    /// Create a warning
    pub fn warning(
        kind: DiagnosticKind,
        message: impl Into<String>,
        fragment: impl Into<String>,
        position: Option<usize>,
    ) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            message: message.into(),
            fragment: fragment.into(),
            position,
            clause: None,
        }
    }

    /// Tag the diagnostic with the clause it came from
    pub fn in_clause(mut self, clause: usize) -> Self {
        self.clause = Some(clause);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(error: &ParseError) -> Self {
        let kind = match error {
            ParseError::MalformedExpression { .. } => DiagnosticKind::MalformedExpression,
            ParseError::ExpressionTooDeep { .. } => DiagnosticKind::ExpressionTooDeep,
        };
        Self {
            kind,
            severity: Severity::Error,
            message: error.to_string(),
            fragment: error.fragment().to_string(),
            position: error.position(),
            clause: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match self.clause {
            Some(clause) => write!(f, "{} (clause {}): {}", level, clause, self.message),
            None => write!(f, "{}: {}", level, self.message),
        }
    }
}

/// Nodes and diagnostics of one top-level parse call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub nodes: Vec<ConditionNode>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    /// Check if any clause was dropped
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Check if the parse produced no diagnostics at all
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    /// Names that fell through every classification rule
    pub fn unclassified_names(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::UnclassifiedLeaf)
            .map(|d| d.fragment.as_str())
            .collect()
    }
}
