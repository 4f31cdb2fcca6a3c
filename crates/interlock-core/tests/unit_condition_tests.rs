//! Unit tests for condition tree types
//!
//! Tests the node and name table structures shared by the parser and SDK

use interlock_core::*;

// =============================================================================
// ConditionNode Tests
// =============================================================================

#[test]
fn test_leaf_defaults() {
    let node = ConditionNode::leaf(ConditionType::Track, "100T", 0);

    assert_eq!(node.name, "100T");
    assert_eq!(node.station, 0);
    assert!(!node.teihan);
    assert!(!node.sokatsu);
    assert!(!node.kata);
    assert!(node.execute.is_empty());
    assert!(node.is_leaf());
    assert!(!node.is_or());
}

#[test]
fn test_or_node_holds_alternatives() {
    let node = ConditionNode::or(
        "A又はB",
        2,
        true,
        vec![
            ConditionNode::leaf(ConditionType::Point, "A", 2),
            ConditionNode::leaf(ConditionType::Point, "B", 2),
        ],
    );

    assert!(node.is_or());
    assert_eq!(node.kind, ConditionType::Or);
    assert_eq!(node.station, 2);
    assert!(node.kata);
    assert_eq!(node.execute.len(), 2);
}

#[test]
fn test_node_json_shape() -> anyhow::Result<()> {
    let node = ConditionNode::leaf(ConditionType::Signal, "1R", 1)
        .with_kata(true)
        .with_execute(vec![ConditionNode::leaf(ConditionType::Timer, "30", 1)]);

    let json = serde_json::to_string(&node)?;
    assert!(json.contains(r#""type":"signal""#));
    assert!(json.contains(r#""type":"timer""#));

    let back: ConditionNode = serde_json::from_str(&json)?;
    assert_eq!(back, node);
    Ok(())
}

#[test]
fn test_descendants_are_depth_first() {
    let node = ConditionNode::leaf(ConditionType::Point, "21", 0).with_execute(vec![
        ConditionNode::leaf(ConditionType::Track, "10T", 0)
            .with_execute(vec![ConditionNode::leaf(ConditionType::Timer, "30", 0)]),
        ConditionNode::leaf(ConditionType::Track, "11T", 0),
    ]);

    let names: Vec<&str> = node.descendants().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["21", "10T", "30", "11T"]);
}

// =============================================================================
// NameTable Tests
// =============================================================================

#[test]
fn test_name_table_insert_and_extend() -> anyhow::Result<()> {
    let mut table = NameTable::new();
    assert!(table.is_empty());

    table.insert("21", ConditionType::Point)?;
    let other = NameTable::from_pairs([("21", "lever"), ("1R", "signal")])?;
    table.extend(other);

    assert_eq!(table.len(), 2);
    assert!(table.contains("1R"));
    assert_eq!(table.get("21"), Some(&ConditionType::Lever));

    let mut names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["1R", "21"]);
    Ok(())
}

#[test]
fn test_name_table_rejects_or() {
    let mut table = NameTable::new();
    let err = table.insert("A", ConditionType::Or).unwrap_err();
    assert!(matches!(err, CoreError::InvalidEntry { .. }));
}
