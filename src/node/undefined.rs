use super::{ExitSlots, FlowNode, NodeCore};
use crate::flow::OperationConfig;

/// Fallback kind for operation types the factory does not recognize.
///
/// An undefined node keeps the raw operation record so the editor can still
/// render the operation faithfully, and carries dynamic exits because its
/// arity is only known from the record itself. The builder hands it the raw
/// record before wiring any exits.
#[derive(Debug, Clone)]
pub struct UndefinedNode {
    core: NodeCore,
    exits: ExitSlots,
    raw: Option<OperationConfig>,
}

impl UndefinedNode {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            core: NodeCore::new(type_name),
            exits: ExitSlots::dynamic(),
            raw: None,
        }
    }

    /// Stores the raw operation record. Called by the builder before exit
    /// wiring so the node can learn everything it needs from the record.
    pub fn set_raw_config(&mut self, config: &OperationConfig) {
        self.raw = Some(config.clone());
    }

    /// The raw record this node was created from, if already provided.
    pub fn raw_config(&self) -> Option<&OperationConfig> {
        self.raw.as_ref()
    }
}

impl FlowNode for UndefinedNode {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn exits(&self) -> Option<&ExitSlots> {
        Some(&self.exits)
    }

    fn exits_mut(&mut self) -> Option<&mut ExitSlots> {
        Some(&mut self.exits)
    }

    fn as_undefined(&self) -> Option<&UndefinedNode> {
        Some(self)
    }

    fn as_undefined_mut(&mut self) -> Option<&mut UndefinedNode> {
        Some(self)
    }
}
