//! The node abstraction: a capability interface shared by every node kind,
//! plus the concrete kinds the parser produces.
//!
//! Kind dispatch is done through explicit capability queries
//! ([`FlowNode::exits`], [`FlowNode::as_link`], [`FlowNode::as_undefined`])
//! instead of downcasting, so custom kinds registered through the factory
//! participate on equal footing with the built-in ones.

pub mod basic;
pub mod exits;
pub mod link;
pub mod undefined;

pub use basic::*;
pub use exits::*;
pub use link::*;
pub use undefined::*;

use crate::flow::OperationConfig;

/// Synthetic identity of a live node, assigned by the graph builder in
/// post-order of construction. Unrelated to the operation id in the input.
pub type NodeId = u32;

/// State shared by every node kind. Concrete kinds embed a `NodeCore` and
/// hand it out through [`FlowNode::core`] / [`FlowNode::core_mut`]; the
/// trait's provided methods do the rest.
#[derive(Debug, Clone, Default)]
pub struct NodeCore {
    pub id: NodeId,
    pub type_name: String,
    pub custom_name: Option<String>,
    pub notes: Vec<String>,
    pub original: Option<OperationConfig>,
    pub selected: bool,
}

impl NodeCore {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }
}

/// The live, typed vertex of a parsed flow graph.
///
/// The graph builder owns the lifecycle: it instantiates nodes through the
/// factory, attaches notes and names, wires exits, and assigns the synthetic
/// id exactly once, after all exits have been resolved.
pub trait FlowNode {
    fn core(&self) -> &NodeCore;
    fn core_mut(&mut self) -> &mut NodeCore;

    /// The operation type this node was instantiated for.
    fn type_name(&self) -> &str {
        &self.core().type_name
    }

    /// The synthetic identity. Zero until the builder assigns one.
    fn node_id(&self) -> NodeId {
        self.core().id
    }

    fn set_node_id(&mut self, id: NodeId) {
        self.core_mut().id = id;
    }

    /// The name the editor should display: the custom name when one was set,
    /// the type name otherwise.
    fn display_name(&self) -> &str {
        let core = self.core();
        core.custom_name.as_deref().unwrap_or(&core.type_name)
    }

    fn custom_name(&self) -> Option<&str> {
        self.core().custom_name.as_deref()
    }

    fn set_custom_name(&mut self, name: String) {
        self.core_mut().custom_name = Some(name);
    }

    fn notes(&self) -> &[String] {
        &self.core().notes
    }

    fn set_node_note(&mut self, notes: Vec<String>) {
        self.core_mut().notes = notes;
    }

    /// Snapshot of the operation record this node was built from.
    fn original_config(&self) -> Option<&OperationConfig> {
        self.core().original.as_ref()
    }

    fn set_original_config(&mut self, config: OperationConfig) {
        self.core_mut().original = Some(config);
    }

    fn is_selected(&self) -> bool {
        self.core().selected
    }

    /// Selection hook, invoked by the session on every selection change.
    /// Kinds that need to react to selection override this; overrides must
    /// keep `core.selected` in sync.
    fn set_selected(&mut self, selected: bool) {
        self.core_mut().selected = selected;
    }

    /// Hands the node its operation-specific configuration once the builder
    /// has finished wiring it. What a kind does with it is its own business;
    /// the default is to ignore it.
    fn init_from_config(&mut self, _config: &serde_json::Map<String, serde_json::Value>) {}

    /// Capability query: the node's exit slots, when the kind supports exits.
    fn exits(&self) -> Option<&ExitSlots> {
        None
    }

    fn exits_mut(&mut self) -> Option<&mut ExitSlots> {
        None
    }

    /// Capability query: the link kind, used by the builder to terminate
    /// recursion on back-edges.
    fn as_link(&self) -> Option<&LinkNode> {
        None
    }

    fn as_link_mut(&mut self) -> Option<&mut LinkNode> {
        None
    }

    /// Capability query: the fallback kind for unrecognized operation types.
    fn as_undefined(&self) -> Option<&UndefinedNode> {
        None
    }

    fn as_undefined_mut(&mut self) -> Option<&mut UndefinedNode> {
        None
    }
}
