//! Tests for direct lookups: children and parent

use rstest::{fixture, rstest};
use serde_json::json;

use fasttree::util::testing::{category_records, init_test_setup};
use fasttree::{NodeId, OptionList, Record, RecordSet, TreeEngine};

#[fixture]
fn engine() -> TreeEngine {
    init_test_setup();
    TreeEngine::new(category_records())
}

fn ids(records: &[&Record]) -> Vec<NodeId> {
    records.iter().filter_map(|r| r.id()).collect()
}

// ============================================================
// Children
// ============================================================

#[rstest]
fn given_parent_with_children_when_getting_children_then_returns_them_in_scan_order(
    engine: TreeEngine,
) {
    assert_eq!(ids(&engine.children(1)), vec![NodeId::Int(3), NodeId::Int(4)]);
    assert_eq!(ids(&engine.children(0)), vec![NodeId::Int(1), NodeId::Int(2)]);
}

#[rstest]
#[case(json!(1))]
#[case(json!("1"))]
#[case(json!(1.0))]
fn given_mixed_id_types_when_getting_children_then_matches_loosely(
    engine: TreeEngine,
    #[case] id: serde_json::Value,
) {
    let id = NodeId::from_value(&id).unwrap();
    assert_eq!(engine.children(id).len(), 2);
}

#[rstest]
fn given_leaf_or_unknown_id_when_getting_children_then_empty(engine: TreeEngine) {
    assert!(engine.children(7).is_empty());
    assert!(engine.children("nope").is_empty());
}

#[test]
fn given_records_without_id_when_getting_children_then_they_are_skipped() {
    let engine = TreeEngine::new(
        RecordSet::from_value(json!([
            {"pid": 0, "name": "anonymous"},
            {"id": null, "pid": 0, "name": "null id"},
            {"id": 1, "pid": 0, "name": "A"},
        ]))
        .unwrap(),
    );
    assert_eq!(ids(&engine.children(0)), vec![NodeId::Int(1)]);
}

#[test]
fn given_duplicate_ids_when_getting_children_then_both_match() {
    let engine = TreeEngine::new(
        RecordSet::from_value(json!([
            {"id": 1, "pid": 0, "name": "first"},
            {"id": 1, "pid": 0, "name": "second"},
        ]))
        .unwrap(),
    );
    let names: Vec<_> = engine
        .children(0)
        .iter()
        .filter_map(|r| r.text("name"))
        .collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn given_custom_pid_name_when_getting_children_then_uses_that_field() {
    let records = RecordSet::from_value(json!([
        {"id": 1, "parent": 0, "pid": 9},
        {"id": 2, "parent": 1, "pid": 0},
    ]))
    .unwrap();
    let engine = TreeEngine::init(records, Some("parent"), None).unwrap();
    assert_eq!(ids(&engine.children(1)), vec![NodeId::Int(2)]);
    assert_eq!(ids(&engine.children(0)), vec![NodeId::Int(1)]);
}

#[test]
fn given_missing_parent_field_when_getting_root_children_then_treated_as_top_level() {
    let engine = TreeEngine::new(RecordSet::from_value(json!([{"id": 1}])).unwrap());
    assert_eq!(ids(&engine.children(0)), vec![NodeId::Int(1)]);
}

// ============================================================
// Parent
// ============================================================

#[rstest]
#[case(6, Some(3))]
#[case(3, Some(1))]
#[case(5, Some(2))]
#[case(1, None)]
#[case(99, None)]
fn given_node_when_getting_parent_then_returns_single_parent(
    engine: TreeEngine,
    #[case] id: i64,
    #[case] expected: Option<i64>,
) {
    let parent = engine.parent(id).and_then(Record::id);
    assert_eq!(parent, expected.map(NodeId::Int));
}

#[test]
fn given_dangling_parent_reference_when_getting_parent_then_none() {
    let engine = TreeEngine::new(RecordSet::from_value(json!([{"id": 1, "pid": 42}])).unwrap());
    assert!(engine.parent(1).is_none());
}

// ============================================================
// Ids beyond the i64 range
// ============================================================

fn wide_id_engine() -> TreeEngine {
    TreeEngine::new(
        RecordSet::from_value(json!([
            {"id": 10000000000000000000u64, "pid": 0, "name": "P"},
            {"id": 10000000000000000001u64, "pid": 0, "name": "Q"},
            {"id": 1, "pid": 10000000000000000000u64, "name": "child-of-P"},
        ]))
        .unwrap(),
    )
}

#[test]
fn given_neighbouring_wide_ids_when_getting_children_then_only_exact_parent_matches() {
    let engine = wide_id_engine();
    let names = |id: &str| -> Vec<String> {
        engine
            .children(id)
            .iter()
            .filter_map(|r| r.text("name"))
            .collect()
    };
    assert_eq!(names("10000000000000000000"), vec!["child-of-P"]);
    assert!(names("10000000000000000001").is_empty());
}

#[test]
fn given_wide_selected_id_when_rendering_options_then_only_that_node_is_selected() {
    let request = OptionList::new("@name=@selected;").selected("10000000000000000000");
    let out = wide_id_engine().option_list(0, &request).unwrap();
    assert_eq!(out, "P=selected;child-of-P=;Q=;");
}
