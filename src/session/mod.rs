//! The flow editing session: the node table produced by a parse, the current
//! selection, the renderer registry, and the session's change notifications.

pub mod component;
pub mod signal;

pub use component::*;
pub use signal::*;

use crate::builder::{GraphBuilder, NodeFactory, START_NODE_TYPE};
use crate::flow::FlowConfig;
use crate::node::{FlowNode, NodeId};
use ahash::AHashMap;
use itertools::Itertools;
use tracing::{error, warn};

/// Holds the live graph and editing state for one flow.
///
/// A session is explicitly constructed (the node factory is injected) and
/// fully rebuilt by every successful [`parse_flow`](Self::parse_flow); there
/// is no incremental update path. All methods run synchronously on the
/// caller's thread — a concurrent embedding must serialize access.
pub struct FlowSession {
    factory: NodeFactory,
    nodes: AHashMap<NodeId, Box<dyn FlowNode>>,
    start_node: Option<NodeId>,
    selected_node: Option<NodeId>,
    link_nodes: Vec<NodeId>,
    components: AHashMap<NodeId, Box<dyn NodeComponent>>,
    start_node_changed: Signal<Option<NodeId>>,
    selection_changed: Signal<Option<NodeId>>,
    focus_changed: Signal<FocusPoint>,
}

impl FlowSession {
    pub fn new(factory: NodeFactory) -> Self {
        Self {
            factory,
            nodes: AHashMap::new(),
            start_node: None,
            selected_node: None,
            link_nodes: Vec::new(),
            components: AHashMap::new(),
            start_node_changed: Signal::new(None),
            selection_changed: Signal::new(None),
            focus_changed: Signal::new(FocusPoint::default()),
        }
    }

    pub fn factory(&self) -> &NodeFactory {
        &self.factory
    }

    /// Parses a serialized flow into a fresh node graph and makes it the
    /// session's current one.
    ///
    /// A flow without operations, or without a record of type `Start`, is
    /// treated as invalid: the call logs, leaves the existing graph and
    /// selection untouched, and emits nothing. On success the previous
    /// graph is replaced wholesale, the start node becomes the selection,
    /// and selection-changed then start-node-changed fire.
    pub fn parse_flow(&mut self, flow: &FlowConfig) {
        let Some(operations) = flow.operations.as_ref().filter(|ops| !ops.is_empty()) else {
            warn!("Flow has no operations; keeping the current graph");
            return;
        };

        // First record with the start type, in ascending id order.
        let start = operations
            .iter()
            .find(|(_, op)| op.op_type == START_NODE_TYPE);
        let Some((&start_id, start_operation)) = start else {
            warn!("Flow has no start operation; keeping the current graph");
            return;
        };

        let graph = GraphBuilder::new(operations, &self.factory).build(start_id, start_operation);

        // The outgoing selection's deselect hook has to run against the old
        // table, before the swap invalidates its id.
        if let Some(previous) = self.selected_node.take() {
            if let Some(node) = self.nodes.get_mut(&previous) {
                node.set_selected(false);
            }
        }

        self.nodes = graph.nodes;
        self.link_nodes = graph.link_nodes;
        self.start_node = graph.start;

        self.select_node(self.start_node);
        self.start_node_changed.emit(self.start_node);
    }

    /// Changes the selection, running the deselect hook of the previous node
    /// and the select hook of the new one. Reselecting the already selected
    /// node still runs both hooks; callers rely on the re-invocation.
    /// Passing `None` clears the selection.
    pub fn select_node(&mut self, node: Option<NodeId>) {
        if let Some(previous) = self.selected_node {
            if let Some(prev_node) = self.nodes.get_mut(&previous) {
                prev_node.set_selected(false);
            }
        }

        self.selected_node = node;
        if let Some(id) = node {
            if let Some(next_node) = self.nodes.get_mut(&id) {
                next_node.set_selected(true);
            }
        }
        self.selection_changed.emit(self.selected_node);
    }

    /// Stores the renderer handle for a node id, replacing any previous one.
    pub fn register_flow_node_component(&mut self, node_id: NodeId, component: Box<dyn NodeComponent>) {
        self.components.insert(node_id, component);
    }

    /// Removes the renderer handle for a node id. Unregistered ids are a
    /// no-op.
    pub fn unregister_flow_node_component(&mut self, node_id: NodeId) {
        self.components.remove(&node_id);
    }

    /// The renderer handle registered for a node id, if any.
    pub fn get_node_component_from_id(&self, node_id: NodeId) -> Option<&dyn NodeComponent> {
        self.components.get(&node_id).map(|c| c.as_ref())
    }

    /// Publishes the registered renderer position of a node as a focus
    /// change, so the rendering layer can scroll it into view. Without a
    /// registered component this logs and emits nothing.
    pub fn focus_on_node(&mut self, node_id: NodeId) {
        let Some(component) = self.components.get(&node_id) else {
            error!(node = node_id, "No node component found for this id");
            return;
        };

        let bounds = component.bounding_box();
        self.focus_changed.emit(FocusPoint {
            top: bounds.top,
            left: bounds.left,
        });
    }

    pub fn start_node_id(&self) -> Option<NodeId> {
        self.start_node
    }

    pub fn start_node(&self) -> Option<&dyn FlowNode> {
        self.start_node.and_then(|id| self.node(id))
    }

    pub fn node(&self, id: NodeId) -> Option<&dyn FlowNode> {
        self.nodes.get(&id).map(|n| n.as_ref())
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut (dyn FlowNode + 'static)> {
        self.nodes.get_mut(&id).map(|n| n.as_mut())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn selected_node_id(&self) -> Option<NodeId> {
        self.selected_node
    }

    pub fn selected_node(&self) -> Option<&dyn FlowNode> {
        self.selected_node.and_then(|id| self.node(id))
    }

    /// Ids of the link nodes created by the last parse, in creation order.
    pub fn link_node_ids(&self) -> &[NodeId] {
        &self.link_nodes
    }

    /// All nodes sorted by synthetic id, which is their order of
    /// construction completion.
    pub fn nodes_in_creation_order(&self) -> Vec<&dyn FlowNode> {
        self.nodes
            .keys()
            .sorted()
            .map(|id| self.nodes[id].as_ref())
            .collect()
    }

    /// Subscribes to start-node changes; the latest value is replayed
    /// immediately.
    pub fn subscribe_start_node(
        &mut self,
        subscriber: impl FnMut(&Option<NodeId>) + 'static,
    ) -> SubscriptionId {
        self.start_node_changed.subscribe(subscriber)
    }

    pub fn unsubscribe_start_node(&mut self, subscription: SubscriptionId) {
        self.start_node_changed.unsubscribe(subscription);
    }

    /// Subscribes to selection changes; the latest value is replayed
    /// immediately.
    pub fn subscribe_selection(
        &mut self,
        subscriber: impl FnMut(&Option<NodeId>) + 'static,
    ) -> SubscriptionId {
        self.selection_changed.subscribe(subscriber)
    }

    pub fn unsubscribe_selection(&mut self, subscription: SubscriptionId) {
        self.selection_changed.unsubscribe(subscription);
    }

    /// Subscribes to focus changes; the latest value is replayed
    /// immediately.
    pub fn subscribe_focus(
        &mut self,
        subscriber: impl FnMut(&FocusPoint) + 'static,
    ) -> SubscriptionId {
        self.focus_changed.subscribe(subscriber)
    }

    pub fn unsubscribe_focus(&mut self, subscription: SubscriptionId) {
        self.focus_changed.unsubscribe(subscription);
    }
}

impl Default for FlowSession {
    fn default() -> Self {
        Self::new(NodeFactory::default())
    }
}
