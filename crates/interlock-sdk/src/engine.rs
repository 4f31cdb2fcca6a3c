//! Condition engine
//!
//! Owns the name table and parser options and hands out parsers for each
//! call. Parsing itself is synchronous and needs only `&self`, so an engine
//! can be shared across threads behind an `Arc`.

use crate::error::Result;
use interlock_core::{ConditionNode, NameTable};
use interlock_parser::{ExpressionParser, ParseReport, ParserOptions, RouteLockParser};
use std::sync::Arc;

/// Parse facade over a loaded name table
#[derive(Debug, Clone)]
pub struct ConditionEngine {
    table: Arc<NameTable>,
    options: ParserOptions,
    trace: bool,
}

impl ConditionEngine {
    /// Create an engine from an already loaded name table
    pub fn new(table: NameTable, options: ParserOptions) -> Self {
        Self::from_shared(Arc::new(table), options)
    }

    /// Create an engine sharing a name table with other owners
    pub fn from_shared(table: Arc<NameTable>, options: ParserOptions) -> Self {
        Self {
            table,
            options,
            trace: false,
        }
    }

    pub(crate) fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn name_table(&self) -> &NameTable {
        &self.table
    }

    /// A handle to the shared name table
    pub fn shared_name_table(&self) -> Arc<NameTable> {
        Arc::clone(&self.table)
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse a single condition expression, failing on malformed input
    pub fn parse(&self, formula: &str) -> Result<Vec<ConditionNode>> {
        let nodes = self.expression_parser().parse(formula)?;
        if self.trace {
            tracing::debug!(formula, nodes = nodes.len(), "parsed condition expression");
        }
        Ok(nodes)
    }

    /// Parse a single condition expression, collecting diagnostics
    pub fn parse_report(&self, formula: &str) -> ParseReport {
        let report = self.expression_parser().parse_report(formula);
        self.trace_report("condition expression", formula, &report);
        report
    }

    /// Parse a route-lock formula made of parenthesized clauses
    pub fn parse_route_lock(&self, formula: &str) -> ParseReport {
        let parser = RouteLockParser::with_options(&self.table, &self.options);
        let report = parser.parse_clauses(formula);
        self.trace_report("route lock", formula, &report);
        report
    }

    /// Parse many independent expressions
    pub fn parse_many<S: AsRef<str>>(&self, formulas: &[S]) -> Vec<ParseReport> {
        let parser = self.expression_parser();
        formulas
            .iter()
            .map(|formula| {
                let formula = formula.as_ref();
                let report = parser.parse_report(formula);
                self.trace_report("condition expression", formula, &report);
                report
            })
            .collect()
    }

    fn expression_parser(&self) -> ExpressionParser<'_> {
        ExpressionParser::with_options(&self.table, &self.options)
    }

    fn trace_report(&self, what: &str, formula: &str, report: &ParseReport) {
        for error in report.errors() {
            tracing::warn!(formula, "{} rejected: {}", what, error);
        }
        if self.trace {
            tracing::debug!(
                formula,
                nodes = report.nodes.len(),
                diagnostics = report.diagnostics.len(),
                "parsed {}",
                what
            );
        }
    }
}
