//! The graph builder: turns the operation map of a serialized flow into a
//! live node graph, starting from the start record and following exits.
//!
//! Every operation is expanded at most once. An exit pointing at an already
//! expanded operation becomes a [`LinkNode`](crate::node::LinkNode) instead
//! of a second expansion, which is what bounds the recursion on cyclic and
//! re-converging flows.

pub mod factory;

pub use factory::*;

use crate::flow::{OperationConfig, OperationId};
use crate::node::{FlowNode, NodeId};
use ahash::{AHashMap, AHashSet};
use std::collections::BTreeMap;
use tracing::{debug, error};

/// The result of one full parse: the node table, the start node, and the
/// link nodes created for back-edges.
pub(crate) struct ParsedGraph {
    pub(crate) nodes: AHashMap<NodeId, Box<dyn FlowNode>>,
    pub(crate) start: Option<NodeId>,
    pub(crate) link_nodes: Vec<NodeId>,
}

/// Responsible for building the node graph from an operation map. One
/// builder performs exactly one parse; counters and visited state are fresh
/// per instance.
pub(crate) struct GraphBuilder<'a> {
    operations: &'a BTreeMap<OperationId, OperationConfig>,
    factory: &'a NodeFactory,
    nodes: AHashMap<NodeId, Box<dyn FlowNode>>,
    link_nodes: Vec<NodeId>,
    visited: AHashSet<OperationId>,
    next_id: NodeId,
}

impl<'a> GraphBuilder<'a> {
    pub(crate) fn new(
        operations: &'a BTreeMap<OperationId, OperationConfig>,
        factory: &'a NodeFactory,
    ) -> Self {
        Self {
            operations,
            factory,
            nodes: AHashMap::new(),
            link_nodes: Vec::new(),
            visited: AHashSet::new(),
            next_id: 1,
        }
    }

    /// Builds the graph from the start record. The start is marked visited
    /// before expansion, so a cycle back into it becomes a link node like
    /// any other back-edge.
    pub(crate) fn build(mut self, start_id: OperationId, start: &'a OperationConfig) -> ParsedGraph {
        self.visited.insert(start_id);
        let start_node = self.parse_node(start);
        debug!(
            nodes = self.nodes.len(),
            links = self.link_nodes.len(),
            "Parsed flow graph"
        );
        ParsedGraph {
            nodes: self.nodes,
            start: start_node,
            link_nodes: self.link_nodes,
        }
    }

    /// Recursively parses one operation record into a node.
    ///
    /// Exits are resolved depth-first before the node itself receives its
    /// synthetic id, so ids are assigned in post-order of completion.
    fn parse_node(&mut self, operation: &OperationConfig) -> Option<NodeId> {
        let mut node = self.factory.create_node(&operation.op_type);
        node.set_node_note(operation.notes.clone());
        if !operation.name.is_empty() && operation.name != operation.op_type {
            node.set_custom_name(operation.name.clone());
        }
        // Undefined nodes learn their shape from the raw record, which has
        // to arrive before any exit wiring.
        if let Some(undefined) = node.as_undefined_mut() {
            undefined.set_raw_config(operation);
        }

        if node.exits().is_some() && !operation.exits.is_empty() {
            for (exit_idx, exit_entry) in operation.exits.iter().enumerate() {
                if let Some(exits) = node.exits_mut() {
                    if exits.is_dynamic() {
                        exits.add_slot();
                    }
                }

                // Exit to be wired into the current slot. Empty is valid.
                let mut exit: Option<NodeId> = None;

                if let Some(exit_id) = *exit_entry {
                    let operations = self.operations;
                    if let Some(exit_operation) = operations.get(&exit_id) {
                        if self.visited.contains(&exit_id) {
                            match self.make_link_node(exit_id) {
                                Some(link_id) => exit = Some(link_id),
                                // The offending slot stays unresolved; the
                                // rest of the node still parses.
                                None => continue,
                            }
                        } else {
                            // Marked before recursing, so the record can
                            // never be expanded a second time.
                            self.visited.insert(exit_id);
                            exit = self.parse_node(exit_operation);
                        }
                    } else {
                        debug!(
                            operation = exit_id,
                            "Exit references a missing operation; leaving the slot empty"
                        );
                    }
                }

                if let Some(exits) = node.exits_mut() {
                    exits.set(exit, exit_idx);
                }
            }
        }

        let id = self.next_id;
        node.set_node_id(id);
        node.set_original_config(operation.clone());
        if !operation.config.is_empty() {
            node.init_from_config(&operation.config);
        }
        self.nodes.insert(id, node);
        self.next_id += 1;
        Some(id)
    }

    /// Creates a link node pointing back at `target` and registers it.
    fn make_link_node(&mut self, target: OperationId) -> Option<NodeId> {
        let mut node = self.factory.create_node(LINK_NODE_TYPE);
        let Some(link) = node.as_link_mut() else {
            error!("Node factory did not produce a link node; skipping back-edge");
            return None;
        };
        link.set_linked_operation(target);

        let id = self.next_id;
        node.set_node_id(id);
        self.link_nodes.push(id);
        self.nodes.insert(id, node);
        self.next_id += 1;
        Some(id)
    }
}
