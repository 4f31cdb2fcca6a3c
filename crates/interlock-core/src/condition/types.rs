//! Condition node types

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a condition node
///
/// The built-in categories cover what the parser itself can infer. Any other
/// category only exists because the name table declares it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ConditionType {
    /// Track circuit (names ending in `T` by convention)
    Track,
    /// Time delay (names ending in the seconds suffix)
    Timer,
    /// Point (switch)
    Point,
    /// Signal
    Signal,
    /// Lever
    Lever,
    /// Synthetic node grouping alternatives
    Or,
    /// Unclassified leaf
    Null,
    /// Category declared by the name table only
    Declared(String),
}

impl ConditionType {
    /// Configuration spelling of this category
    pub fn as_str(&self) -> &str {
        match self {
            ConditionType::Track => "track",
            ConditionType::Timer => "timer",
            ConditionType::Point => "point",
            ConditionType::Signal => "signal",
            ConditionType::Lever => "lever",
            ConditionType::Or => "or",
            ConditionType::Null => "null",
            ConditionType::Declared(name) => name,
        }
    }

    /// Whether the leaf could not be classified
    pub fn is_null(&self) -> bool {
        matches!(self, ConditionType::Null)
    }
}

impl FromStr for ConditionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidType("empty type name".to_string()));
        }

        let kind = match trimmed.to_ascii_lowercase().as_str() {
            "track" => ConditionType::Track,
            "timer" => ConditionType::Timer,
            "point" => ConditionType::Point,
            "signal" => ConditionType::Signal,
            "lever" => ConditionType::Lever,
            "or" => ConditionType::Or,
            "null" => ConditionType::Null,
            _ => ConditionType::Declared(trimmed.to_string()),
        };
        Ok(kind)
    }
}

impl TryFrom<String> for ConditionType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ConditionType> for String {
    fn from(kind: ConditionType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of a parsed condition tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionNode {
    /// Category of the node
    #[serde(rename = "type")]
    pub kind: ConditionType,

    /// Station scope depth (0 = own station)
    pub station: u32,

    /// Device name, with any timer suffix removed
    pub name: String,

    /// Required in reverse position, written `(name)`
    pub teihan: bool,

    /// Summary control over a group, written `((name))`
    pub sokatsu: bool,

    /// Evaluated under partial-lock rules, written `<...>`
    pub kata: bool,

    /// Alternatives of an `Or` node and/or the continuation attached by `但`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub execute: Vec<ConditionNode>,
}

impl ConditionNode {
    /// Create a leaf node without decorations
    pub fn leaf(kind: ConditionType, name: impl Into<String>, station: u32) -> Self {
        Self {
            kind,
            station,
            name: name.into(),
            teihan: false,
            sokatsu: false,
            kata: false,
            execute: Vec::new(),
        }
    }

    /// Create an `Or` node holding the given alternatives
    pub fn or(name: impl Into<String>, station: u32, kata: bool, alternatives: Vec<ConditionNode>) -> Self {
        Self {
            kind: ConditionType::Or,
            station,
            name: name.into(),
            teihan: false,
            sokatsu: false,
            kata,
            execute: alternatives,
        }
    }

    /// Mark the node as required in reverse position
    pub fn with_teihan(mut self, teihan: bool) -> Self {
        self.teihan = teihan;
        self
    }

    /// Mark the node as a summary control
    pub fn with_sokatsu(mut self, sokatsu: bool) -> Self {
        self.sokatsu = sokatsu;
        self
    }

    /// Mark the node as evaluated under partial lock
    pub fn with_kata(mut self, kata: bool) -> Self {
        self.kata = kata;
        self
    }

    /// Attach child nodes to `execute`
    pub fn with_execute(mut self, execute: Vec<ConditionNode>) -> Self {
        self.execute = execute;
        self
    }

    /// Check if this is an `Or` node
    pub fn is_or(&self) -> bool {
        self.kind == ConditionType::Or
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.execute.is_empty()
    }

    /// All nodes reachable from this one (depth-first, self included)
    pub fn descendants(&self) -> Vec<&ConditionNode> {
        let mut result = Vec::new();
        self.collect(&mut result);
        result
    }

    /// All non-`Or` nodes reachable from this one (depth-first)
    pub fn leaves(&self) -> Vec<&ConditionNode> {
        self.descendants()
            .into_iter()
            .filter(|node| !node.is_or())
            .collect()
    }

    fn collect<'a>(&'a self, result: &mut Vec<&'a ConditionNode>) {
        result.push(self);
        for child in &self.execute {
            child.collect(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_type_from_str() {
        assert_eq!("track".parse::<ConditionType>().unwrap(), ConditionType::Track);
        assert_eq!("Signal".parse::<ConditionType>().unwrap(), ConditionType::Signal);
        assert_eq!(
            "crossing".parse::<ConditionType>().unwrap(),
            ConditionType::Declared("crossing".to_string())
        );
        assert!("  ".parse::<ConditionType>().is_err());
    }

    #[test]
    fn test_condition_type_display() {
        assert_eq!(ConditionType::Timer.to_string(), "timer");
        assert_eq!(ConditionType::Declared("crossing".to_string()).to_string(), "crossing");
    }

    #[test]
    fn test_node_serde() {
        let node = ConditionNode::leaf(ConditionType::Point, "21", 1).with_teihan(true);
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["type"], "point");
        assert_eq!(json["station"], 1);
        assert_eq!(json["teihan"], true);
        assert!(json.get("execute").is_none());

        let back: ConditionNode = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_leaves_skip_or_nodes() {
        let continuation = ConditionNode::leaf(ConditionType::Track, "10T", 0);
        let node = ConditionNode::or(
            "A又はB",
            0,
            false,
            vec![
                ConditionNode::leaf(ConditionType::Null, "A", 0).with_execute(vec![continuation.clone()]),
                ConditionNode::leaf(ConditionType::Null, "B", 0),
            ],
        );

        let names: Vec<&str> = node.leaves().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["A", "10T", "B"]);
        assert_eq!(node.descendants().len(), 4);
        assert!(node.is_or());
        assert!(!node.is_leaf());
    }
}
