use super::NodeId;
use tracing::warn;

/// How many exit slots a node kind carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitArity {
    /// The kind has no outgoing connections.
    None,
    /// A fixed number of slots, pre-sized at instantiation.
    Fixed(usize),
    /// Slots are grown one at a time while the builder wires the node.
    Dynamic,
}

/// The ordered exit slots of a node. Each slot either points at another node
/// by synthetic id or is empty; empty is a valid, renderable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitSlots {
    slots: Vec<Option<NodeId>>,
    dynamic: bool,
}

impl ExitSlots {
    /// Pre-sized slots for a fixed-arity kind. Fixed slots never grow.
    pub fn fixed(arity: usize) -> Self {
        Self {
            slots: vec![None; arity],
            dynamic: false,
        }
    }

    /// An initially empty, growable slot list.
    pub fn dynamic() -> Self {
        Self {
            slots: Vec::new(),
            dynamic: true,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// Appends one empty slot. Only meaningful on dynamic slot lists; a
    /// fixed list ignores the call and logs.
    pub fn add_slot(&mut self) {
        if self.dynamic {
            self.slots.push(None);
        } else {
            warn!("Attempted to grow a fixed exit list; ignoring");
        }
    }

    /// Assigns the target of the slot at `index`. Out-of-range writes are
    /// dropped with a warning rather than growing the list.
    pub fn set(&mut self, target: Option<NodeId>, index: usize) {
        match self.slots.get_mut(index) {
            Some(slot) => *slot = target,
            None => warn!(
                index,
                len = self.slots.len(),
                "Exit index out of range; dropping connection"
            ),
        }
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.slots.get(index).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates the slots in order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = Option<NodeId>> + '_ {
        self.slots.iter().copied()
    }
}
