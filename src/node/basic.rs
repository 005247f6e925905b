use super::{ExitArity, ExitSlots, FlowNode, NodeCore};

/// A node of any registered operation type. The kind's behavior is described
/// entirely by its type name and exit arity; operation-specific semantics
/// live in the editor layers that consume the graph.
#[derive(Debug, Clone)]
pub struct BasicNode {
    core: NodeCore,
    exits: Option<ExitSlots>,
}

impl BasicNode {
    pub fn new(type_name: impl Into<String>, arity: ExitArity) -> Self {
        let exits = match arity {
            ExitArity::None => None,
            ExitArity::Fixed(n) => Some(ExitSlots::fixed(n)),
            ExitArity::Dynamic => Some(ExitSlots::dynamic()),
        };
        Self {
            core: NodeCore::new(type_name),
            exits,
        }
    }
}

impl FlowNode for BasicNode {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn exits(&self) -> Option<&ExitSlots> {
        self.exits.as_ref()
    }

    fn exits_mut(&mut self) -> Option<&mut ExitSlots> {
        self.exits.as_mut()
    }
}
