//! Tests for the graph construction algorithm: termination, identity
//! assignment, and malformed-input tolerance.
mod common;
use common::*;
use nagare::prelude::*;

#[test]
fn test_cycle_terminates_with_one_link_node() {
    init_tracing();
    let mut session = FlowSession::default();
    session.parse_flow(&cyclic_flow());

    // Start, Branch, and one link for the back-edge into the start.
    assert_eq!(session.node_count(), 3);
    assert_eq!(session.link_node_ids().len(), 1);

    let link_id = session.link_node_ids()[0];
    let link = session
        .node(link_id)
        .and_then(|n| n.as_link())
        .expect("link node is registered in the node table");
    assert_eq!(link.linked_operation(), Some(1));
}

#[test]
fn test_identities_are_assigned_in_post_order() {
    let mut session = FlowSession::default();
    session.parse_flow(&linear_flow());

    // Exits resolve depth-first, so the leaf completes first and the start
    // completes last.
    assert_eq!(session.node_count(), 3);
    assert_eq!(session.node(1).unwrap().type_name(), "End");
    assert_eq!(session.node(2).unwrap().type_name(), "Task");
    assert_eq!(session.node(3).unwrap().type_name(), "Start");
    assert_eq!(session.start_node_id(), Some(3));
}

#[test]
fn test_identities_are_unique_and_increasing() {
    let mut session = FlowSession::default();
    session.parse_flow(&diamond_flow());

    let ids: Vec<NodeId> = session
        .nodes_in_creation_order()
        .iter()
        .map(|n| n.node_id())
        .collect();
    assert!(!ids.is_empty());
    for pair in ids.windows(2) {
        assert!(pair[0] < pair[1], "ids must be strictly increasing");
    }
}

#[test]
fn test_first_start_record_in_key_order_wins() {
    let mut session = FlowSession::default();
    session.parse_flow(&flow_from(vec![
        op(1, "Task", vec![]),
        op(2, "Start", vec![]),
        op(3, "Start", vec![]),
    ]));

    let start = session.start_node().expect("a start node was chosen");
    let original = start.original_config().expect("start keeps its record");
    assert_eq!(original.id, 2);
}

#[test]
fn test_dangling_exit_resolves_to_empty_slot() {
    init_tracing();
    let mut session = FlowSession::default();
    session.parse_flow(&flow_from(vec![op(1, "Start", vec![Some(99)])]));

    let start = session.start_node().expect("parse succeeded");
    let exits = start.exits().expect("start supports exits");
    assert_eq!(exits.len(), 1);
    assert_eq!(exits.get(0), None);
    assert_eq!(session.node_count(), 1);
}

#[test]
fn test_null_exit_entries_leave_slots_empty() {
    let mut session = FlowSession::default();
    session.parse_flow(&flow_from(vec![
        op(1, "Start", vec![None, Some(2)]),
        op(2, "End", vec![]),
    ]));

    let start = session.start_node().unwrap();
    let exits = start.exits().unwrap();
    assert_eq!(exits.len(), 2);
    assert_eq!(exits.get(0), None);
    assert_eq!(exits.get(1), Some(1));
}

#[test]
fn test_diamond_creates_one_node_and_one_link_for_convergence() {
    let mut session = FlowSession::default();
    session.parse_flow(&diamond_flow());

    // Operation 4 is reached twice but expanded once.
    let real_nodes_for_op4 = session
        .nodes_in_creation_order()
        .iter()
        .filter(|n| n.as_link().is_none())
        .filter(|n| n.original_config().map(|o| o.id) == Some(4))
        .count();
    assert_eq!(real_nodes_for_op4, 1);

    assert_eq!(session.link_node_ids().len(), 1);
    let link = session
        .node(session.link_node_ids()[0])
        .and_then(|n| n.as_link())
        .unwrap();
    assert_eq!(link.linked_operation(), Some(4));

    // 4 real nodes + 1 link.
    assert_eq!(session.node_count(), 5);
}

#[test]
fn test_unknown_type_falls_back_to_undefined_node() {
    let mut session = FlowSession::default();
    session.parse_flow(&flow_from(vec![
        op(1, "Start", vec![Some(2)]),
        op(2, "Frobnicate", vec![Some(3), None]),
        op(3, "End", vec![]),
    ]));

    let undefined = session
        .nodes_in_creation_order()
        .into_iter()
        .find(|n| n.as_undefined().is_some())
        .expect("unrecognized type produced an undefined node");

    assert_eq!(undefined.type_name(), "Frobnicate");
    let raw = undefined
        .as_undefined()
        .unwrap()
        .raw_config()
        .expect("raw record was handed over before wiring");
    assert_eq!(raw.id, 2);

    // Undefined nodes grow one slot per declared exit.
    let exits = undefined.exits().unwrap();
    assert_eq!(exits.len(), 2);
    assert_eq!(exits.get(0), Some(1));
    assert_eq!(exits.get(1), None);
}

#[test]
fn test_fixed_arity_nodes_do_not_grow() {
    init_tracing();
    let mut session = FlowSession::default();
    // Task has one slot; the record declares two exits.
    session.parse_flow(&flow_from(vec![
        op(1, "Start", vec![Some(2)]),
        op(2, "Task", vec![Some(3), Some(4)]),
        op(3, "End", vec![]),
        op(4, "End", vec![]),
    ]));

    let task = session
        .nodes_in_creation_order()
        .into_iter()
        .find(|n| n.type_name() == "Task")
        .unwrap();
    let exits = task.exits().unwrap();
    assert_eq!(exits.len(), 1);
    assert_eq!(exits.get(0), Some(1));
}

#[test]
fn test_reparsing_the_same_flow_value_is_stable() {
    let flow = cyclic_flow();
    let mut session = FlowSession::default();

    session.parse_flow(&flow);
    let first_count = session.node_count();
    let first_start = session.start_node_id();

    // The input is never mutated, so a second parse of the same value
    // rebuilds the same graph with ids starting from 1 again.
    session.parse_flow(&flow);
    assert_eq!(session.node_count(), first_count);
    assert_eq!(session.start_node_id(), first_start);
    assert_eq!(session.link_node_ids().len(), 1);
}

#[test]
fn test_custom_name_is_only_kept_when_it_differs_from_type() {
    let mut named = op(1, "Start", vec![]);
    named.name = "Intake".to_string();
    let mut same_as_type = op(2, "Start", vec![]);
    same_as_type.name = "Start".to_string();

    let mut session = FlowSession::default();
    session.parse_flow(&flow_from(vec![named]));
    let start = session.start_node().unwrap();
    assert_eq!(start.custom_name(), Some("Intake"));
    assert_eq!(start.display_name(), "Intake");

    let mut session = FlowSession::default();
    session.parse_flow(&flow_from(vec![same_as_type]));
    let start = session.start_node().unwrap();
    assert_eq!(start.custom_name(), None);
    assert_eq!(start.display_name(), "Start");
}

#[test]
fn test_notes_are_attached_to_the_node() {
    let mut with_notes = op(1, "Start", vec![]);
    with_notes.notes = vec!["first".to_string(), "second".to_string()];

    let mut session = FlowSession::default();
    session.parse_flow(&flow_from(vec![with_notes]));

    let start = session.start_node().unwrap();
    assert_eq!(start.notes(), ["first", "second"]);
}
