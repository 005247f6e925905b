use super::{FlowNode, NodeCore};
use crate::flow::OperationId;

/// A placeholder vertex marking a back-edge or convergent edge.
///
/// When the builder encounters an exit pointing at an operation it has
/// already expanded, it inserts a link node instead of recursing again. The
/// link references the *operation id* of its target, not a synthetic node
/// id, so the rendered graph can draw the edge back to the existing node.
#[derive(Debug, Clone)]
pub struct LinkNode {
    core: NodeCore,
    linked: Option<OperationId>,
}

impl LinkNode {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            core: NodeCore::new(type_name),
            linked: None,
        }
    }

    /// The operation id this link points back to.
    pub fn linked_operation(&self) -> Option<OperationId> {
        self.linked
    }

    pub fn set_linked_operation(&mut self, operation: OperationId) {
        self.linked = Some(operation);
    }
}

impl FlowNode for LinkNode {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn as_link(&self) -> Option<&LinkNode> {
        Some(self)
    }

    fn as_link_mut(&mut self) -> Option<&mut LinkNode> {
        Some(self)
    }
}
