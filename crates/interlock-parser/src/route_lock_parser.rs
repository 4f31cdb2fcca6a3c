//! Route-lock clause parser
//!
//! Route-lock formulas are a list of parenthesized clauses, e.g.
//! `(21 22)(10T但30秒)`. Each clause is an independent condition expression.

use crate::diagnostics::{Diagnostic, ParseReport};
use crate::expression_parser::{ExpressionParser, ParserOptions};
use interlock_core::NameTable;

const CLAUSE_SEPARATOR: &str = ")(";
const SPACED_SEPARATOR: &str = ") (";

/// Parser for multi-clause route-lock formulas
#[derive(Debug, Clone)]
pub struct RouteLockParser<'t> {
    expression: ExpressionParser<'t>,
}

impl<'t> RouteLockParser<'t> {
    pub fn new(table: &'t NameTable) -> Self {
        Self {
            expression: ExpressionParser::new(table),
        }
    }

    pub fn with_options(table: &'t NameTable, options: &ParserOptions) -> Self {
        Self {
            expression: ExpressionParser::with_options(table, options),
        }
    }

    /// Split a formula into its top-level clauses
    ///
    /// The outer parens are removed, `") ("` is treated as `")("`, and the
    /// rest is split on `")("`. Blank clauses are dropped.
    pub fn split_clauses(input: &str) -> Vec<String> {
        let trimmed = input.trim();
        let unwrapped = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        unwrapped
            .replace(SPACED_SEPARATOR, CLAUSE_SEPARATOR)
            .split(CLAUSE_SEPARATOR)
            .filter(|clause| !clause.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Parse every clause independently and concatenate the results
    ///
    /// Each clause starts at station depth 0 without partial lock. A clause
    /// that fails contributes an error diagnostic and no nodes; the other
    /// clauses are still parsed.
    pub fn parse_clauses(&self, input: &str) -> ParseReport {
        let mut report = ParseReport::default();

        for (index, clause) in Self::split_clauses(input).iter().enumerate() {
            let mut diagnostics = Vec::new();
            match self.expression.parse_scoped(clause, 0, false, &mut diagnostics) {
                Ok(nodes) => report.nodes.extend(nodes),
                Err(e) => {
                    log::warn!("dropping route-lock clause {} '{}': {}", index, clause, e);
                    diagnostics.push(Diagnostic::from(&e));
                }
            }
            report
                .diagnostics
                .extend(diagnostics.into_iter().map(|d| d.in_clause(index)));
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;

    #[test]
    fn test_split_clauses() {
        assert_eq!(RouteLockParser::split_clauses("(A)(B)"), vec!["A", "B"]);
        assert_eq!(RouteLockParser::split_clauses(" (A) (B C)(D) "), vec!["A", "B C", "D"]);
        assert_eq!(RouteLockParser::split_clauses("A"), vec!["A"]);
        assert!(RouteLockParser::split_clauses("()").is_empty());
        assert!(RouteLockParser::split_clauses("").is_empty());
    }

    #[test]
    fn test_clauses_match_individual_parses() {
        let table = NameTable::from_pairs([("A", "point"), ("B", "signal")]).unwrap();
        let route = RouteLockParser::new(&table);
        let expression = ExpressionParser::new(&table);

        let report = route.parse_clauses("(A)(B)");

        let mut expected = expression.parse("A").unwrap();
        expected.extend(expression.parse("B").unwrap());
        assert_eq!(report.nodes, expected);
        assert!(report.is_clean());
    }

    #[test]
    fn test_failed_clause_does_not_stop_siblings() {
        let table = NameTable::from_pairs([("A", "point"), ("B", "signal")]).unwrap();
        let route = RouteLockParser::new(&table);

        let report = route.parse_clauses("(A)(X}) (B)");

        let names: Vec<&str> = report.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(report.has_errors());

        let error = report.errors().next().unwrap();
        assert_eq!(error.kind, DiagnosticKind::MalformedExpression);
        assert_eq!(error.clause, Some(1));
    }

    #[test]
    fn test_station_depth_resets_per_clause() {
        let table = NameTable::new();
        let route = RouteLockParser::new(&table);

        let report = route.parse_clauses("([10T])(20T)");

        let stations: Vec<u32> = report.nodes.iter().map(|n| n.station).collect();
        assert_eq!(stations, vec![1, 0]);
    }
}
