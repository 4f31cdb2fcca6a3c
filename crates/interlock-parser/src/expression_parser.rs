//! Condition expression parser
//!
//! Decomposes an interlocking formula into an ordered list of
//! [`ConditionNode`]s by locating delimiters from the right.
//!
//! Precedence, loosest first:
//! - `{..}` grouping, `[..]` station scope, `但` exception clause
//!   (whichever occurs furthest right is split first)
//! - `又は` alternatives
//! - space (sequence)
//! - `<..>` partial lock
//! - `(..)(..)` adjacent decorated leaves
//! - leaf: `name`, `(name)` reverse position, `((name))` summary control
//!
//! Station scope depth is written as repeated brackets: `[A]` is depth 1,
//! `[[A]]` is depth 2.

use crate::classifier::{LeafClassifier, DEFAULT_SECONDS_SUFFIX};
use crate::diagnostics::{Diagnostic, DiagnosticKind, ParseReport};
use crate::error::{ParseError, Result};
use crate::splitter::{
    rightmost_delimiter, segments, split_at_last_token, split_between_last_pair,
    split_between_last_run, strip_wrapping, trailing_repeat_count,
};
use interlock_core::{ConditionNode, NameTable};
use serde::{Deserialize, Serialize};

const GROUP_OPEN: &str = "{";
const GROUP_CLOSE: &str = "}";
const STATION_OPEN: &str = "[";
const STATION_CLOSE: &str = "]";
const EXCEPTION: &str = "但";
const OR: &str = "又は";
const SEQUENCE: &str = " ";
const PARTIAL_OPEN: &str = "<";
const PARTIAL_CLOSE: &str = ">";
const REVERSE_OPEN: &str = "(";
const REVERSE_CLOSE: &str = ")";
const ADJACENT: &str = ")(";
const SUMMARY_OPEN: &str = "((";
const SUMMARY_CLOSE: &str = "))";

/// Default recursion limit
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Parser options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Maximum recursion depth before a clause is rejected
    pub max_depth: usize,

    /// Suffix marking a timer leaf
    pub seconds_suffix: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            seconds_suffix: DEFAULT_SECONDS_SUFFIX.to_string(),
        }
    }
}

/// Values threaded through the recursion
#[derive(Debug, Clone, Copy)]
struct Scope {
    station: u32,
    partial_lock: bool,
    depth: usize,
    /// Byte offset of the current slice within the top-level input
    offset: usize,
}

impl Scope {
    fn root(station: u32, partial_lock: bool) -> Self {
        Self {
            station,
            partial_lock,
            depth: 0,
            offset: 0,
        }
    }

    /// A slice enclosed by the current delimiter, one level deeper
    fn child(self, local_offset: usize) -> Self {
        Self {
            depth: self.depth + 1,
            offset: self.offset + local_offset,
            ..self
        }
    }

    /// A slice beside the current delimiter, at the same level
    fn sibling(self, local_offset: usize) -> Self {
        Self {
            offset: self.offset + local_offset,
            ..self
        }
    }

    fn with_station(mut self, station: u32) -> Self {
        self.station = station;
        self
    }

    fn with_partial_lock(mut self, partial_lock: bool) -> Self {
        self.partial_lock = partial_lock;
        self
    }
}

/// Recursive-descent parser for condition formulas
///
/// Borrows the name table; holds no other state, so one parser can serve any
/// number of calls.
#[derive(Debug, Clone)]
pub struct ExpressionParser<'t> {
    classifier: LeafClassifier<'t>,
    max_depth: usize,
}

impl<'t> ExpressionParser<'t> {
    /// Create a parser with default options
    pub fn new(table: &'t NameTable) -> Self {
        Self::with_options(table, &ParserOptions::default())
    }

    /// Create a parser with explicit options
    pub fn with_options(table: &'t NameTable, options: &ParserOptions) -> Self {
        Self {
            classifier: LeafClassifier::with_seconds_suffix(table, options.seconds_suffix.clone()),
            max_depth: options.max_depth,
        }
    }

    /// Parse a formula at station depth 0 without partial lock
    ///
    /// Warnings are logged and discarded; use [`parse_report`](Self::parse_report)
    /// to inspect them.
    pub fn parse(&self, input: &str) -> Result<Vec<ConditionNode>> {
        let mut diagnostics = Vec::new();
        let nodes = self.parse_scoped(input, 0, false, &mut diagnostics)?;
        for diagnostic in &diagnostics {
            log::debug!("{}", diagnostic);
        }
        Ok(nodes)
    }

    /// Parse a formula at the given station depth and lock mode
    ///
    /// Non-fatal findings are appended to `diagnostics`.
    pub fn parse_scoped(
        &self,
        input: &str,
        station_depth: u32,
        partial_lock: bool,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Vec<ConditionNode>> {
        self.parse_at(input, Scope::root(station_depth, partial_lock), diagnostics)
    }

    /// Parse a formula, turning a failure into an error diagnostic
    pub fn parse_report(&self, input: &str) -> ParseReport {
        let mut diagnostics = Vec::new();
        match self.parse_scoped(input, 0, false, &mut diagnostics) {
            Ok(nodes) => ParseReport { nodes, diagnostics },
            Err(e) => {
                log::warn!("failed to parse '{}': {}", input, e);
                diagnostics.push(Diagnostic::from(&e));
                ParseReport {
                    nodes: Vec::new(),
                    diagnostics,
                }
            }
        }
    }

    fn parse_at(&self, input: &str, scope: Scope, diagnostics: &mut Vec<Diagnostic>) -> Result<Vec<ConditionNode>> {
        if input.trim().is_empty() {
            return Ok(Vec::new());
        }
        if scope.depth > self.max_depth {
            return Err(ParseError::ExpressionTooDeep {
                limit: self.max_depth,
                fragment: input.to_string(),
            });
        }

        match rightmost_delimiter(input, &[GROUP_CLOSE, STATION_CLOSE, EXCEPTION]) {
            Some(GROUP_CLOSE) => self.parse_group(input, scope, diagnostics),
            Some(STATION_CLOSE) => self.parse_station_scope(input, scope, diagnostics),
            Some(EXCEPTION) => self.parse_exception(input, scope, diagnostics),
            _ => self.parse_undelimited(input, scope, diagnostics),
        }
    }

    /// `before{between}after`
    fn parse_group(&self, input: &str, scope: Scope, diagnostics: &mut Vec<Diagnostic>) -> Result<Vec<ConditionNode>> {
        let split = split_between_last_pair(input, GROUP_OPEN, GROUP_CLOSE)
            .ok_or_else(|| malformed(input, GROUP_CLOSE, scope))?;

        let mut nodes = self.parse_at(split.before, scope.sibling(0), diagnostics)?;
        nodes.extend(self.parse_at(split.between, scope.child(split.between_at), diagnostics)?);
        nodes.extend(self.parse_at(split.after, scope.sibling(split.after_at), diagnostics)?);
        Ok(nodes)
    }

    /// `before[between]after`, where `n` repeated brackets mean depth `n`
    fn parse_station_scope(
        &self,
        input: &str,
        scope: Scope,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Vec<ConditionNode>> {
        let n = trailing_repeat_count(input, STATION_CLOSE);
        let split = split_between_last_run(input, STATION_OPEN, STATION_CLOSE, n)
            .ok_or_else(|| malformed(input, &STATION_CLOSE.repeat(n), scope))?;

        // A run never lowers the depth of an enclosing scope.
        let depth = u32::try_from(n).unwrap_or(u32::MAX);
        let inner = scope.station.max(depth);

        let mut nodes = self.parse_at(split.before, scope.sibling(0), diagnostics)?;
        nodes.extend(self.parse_at(
            split.between,
            scope.child(split.between_at).with_station(inner),
            diagnostics,
        )?);
        nodes.extend(self.parse_at(split.after, scope.sibling(split.after_at), diagnostics)?);
        Ok(nodes)
    }

    /// `before但after`: `after` is attached to every branch of `before`
    fn parse_exception(
        &self,
        input: &str,
        scope: Scope,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Vec<ConditionNode>> {
        let split = split_at_last_token(input, EXCEPTION).ok_or_else(|| malformed(input, EXCEPTION, scope))?;

        let mut before = self.parse_at(split.before, scope.sibling(0), diagnostics)?;
        let after = self.parse_at(split.after, scope.sibling(split.after_at), diagnostics)?;

        if before.is_empty() && !after.is_empty() {
            diagnostics.push(Diagnostic::warning(
                DiagnosticKind::DetachedContinuation,
                format!("'{}' clause has nothing to attach to in '{}'", EXCEPTION, input),
                split.after,
                Some(scope.offset + split.token_at),
            ));
        }

        attach_continuation(&mut before, &after);
        Ok(before)
    }

    fn parse_undelimited(
        &self,
        input: &str,
        scope: Scope,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Vec<ConditionNode>> {
        if input.contains(OR) {
            let mut alternatives = Vec::new();
            for (offset, segment) in segments(input, OR) {
                alternatives.extend(self.parse_at(segment, scope.child(offset), diagnostics)?);
            }
            return Ok(vec![ConditionNode::or(input, scope.station, scope.partial_lock, alternatives)]);
        }

        if input.contains(SEQUENCE) {
            let mut nodes = Vec::new();
            for (offset, segment) in segments(input, SEQUENCE) {
                nodes.extend(self.parse_at(segment, scope.sibling(offset), diagnostics)?);
            }
            return Ok(nodes);
        }

        if input.contains(PARTIAL_CLOSE) {
            return self.parse_partial_lock(input, scope, diagnostics);
        }

        if input.contains(ADJACENT) {
            return self.parse_adjacent(input, scope, diagnostics);
        }

        Ok(vec![self.leaf(input, scope, diagnostics)?])
    }

    /// `before<between>after`: only `between` is under partial lock
    fn parse_partial_lock(
        &self,
        input: &str,
        scope: Scope,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Vec<ConditionNode>> {
        let split = split_between_last_pair(input, PARTIAL_OPEN, PARTIAL_CLOSE)
            .ok_or_else(|| malformed(input, PARTIAL_CLOSE, scope))?;

        let mut nodes = self.parse_at(split.before, scope.sibling(0).with_partial_lock(false), diagnostics)?;
        nodes.extend(self.parse_at(
            split.between,
            scope.child(split.between_at).with_partial_lock(true),
            diagnostics,
        )?);
        nodes.extend(self.parse_at(
            split.after,
            scope.sibling(split.after_at).with_partial_lock(false),
            diagnostics,
        )?);
        Ok(nodes)
    }

    /// `(A)((B))`: peel off the last decorated leaf, keeping its parens
    fn parse_adjacent(&self, input: &str, scope: Scope, diagnostics: &mut Vec<Diagnostic>) -> Result<Vec<ConditionNode>> {
        let n = trailing_repeat_count(input, REVERSE_OPEN);
        let split = split_between_last_run(input, REVERSE_OPEN, REVERSE_CLOSE, n)
            .ok_or_else(|| malformed(input, ADJACENT, scope))?;

        let wrapped = format!("{}{}{}", REVERSE_OPEN.repeat(n), split.between, REVERSE_CLOSE.repeat(n));

        let mut nodes = self.parse_at(split.before, scope.sibling(0), diagnostics)?;
        nodes.extend(self.parse_at(&wrapped, scope.child(split.open_at), diagnostics)?);
        nodes.extend(self.parse_at(split.after, scope.sibling(split.after_at), diagnostics)?);
        Ok(nodes)
    }

    fn leaf(&self, input: &str, scope: Scope, diagnostics: &mut Vec<Diagnostic>) -> Result<ConditionNode> {
        let (token, teihan, sokatsu) = if let Some(inner) = strip_wrapping(input, SUMMARY_OPEN, SUMMARY_CLOSE) {
            (inner, false, true)
        } else if let Some(inner) = strip_wrapping(input, REVERSE_OPEN, REVERSE_CLOSE) {
            (inner, true, false)
        } else {
            (input, false, false)
        };

        if token.trim().is_empty() {
            let close = if sokatsu { SUMMARY_CLOSE } else { REVERSE_CLOSE };
            return Err(malformed(input, close, scope));
        }

        let (kind, name) = self.classifier.classify(token);
        if kind.is_null() && !self.classifier.is_declared(token) {
            diagnostics.push(Diagnostic::warning(
                DiagnosticKind::UnclassifiedLeaf,
                format!("'{}' is not in the name table and matches no suffix rule", token),
                token,
                Some(scope.offset),
            ));
        }

        Ok(ConditionNode::leaf(kind, name, scope.station)
            .with_teihan(teihan)
            .with_sokatsu(sokatsu)
            .with_kata(scope.partial_lock))
    }
}

/// Append `continuation` to the alternatives of a leading `Or` node, or else
/// to every node
fn attach_continuation(nodes: &mut [ConditionNode], continuation: &[ConditionNode]) {
    if continuation.is_empty() {
        return;
    }

    match nodes.first_mut() {
        Some(first) if first.is_or() => {
            for alternative in &mut first.execute {
                alternative.execute.extend_from_slice(continuation);
            }
        }
        _ => {
            for node in nodes.iter_mut() {
                node.execute.extend_from_slice(continuation);
            }
        }
    }
}

fn malformed(input: &str, delimiter: &str, scope: Scope) -> ParseError {
    let local = input.rfind(delimiter).unwrap_or(0);
    ParseError::MalformedExpression {
        fragment: input.to_string(),
        delimiter: delimiter.to_string(),
        position: scope.offset + local,
    }
}
