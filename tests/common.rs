//! Common test utilities for building flow definitions and session doubles.
use nagare::prelude::*;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Installs a test subscriber for log output. Safe to call repeatedly.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Builds one operation record with empty name/notes/config.
#[allow(dead_code)]
pub fn op(id: OperationId, op_type: &str, exits: Vec<Option<OperationId>>) -> OperationConfig {
    OperationConfig {
        id,
        op_type: op_type.to_string(),
        name: String::new(),
        base_node: String::new(),
        notes: Vec::new(),
        config: serde_json::Map::new(),
        exits,
    }
}

/// Wraps operation records into a `FlowConfig`, keyed by their ids.
#[allow(dead_code)]
pub fn flow_from(operations: Vec<OperationConfig>) -> FlowConfig {
    let operations: BTreeMap<_, _> = operations.into_iter().map(|o| (o.id, o)).collect();
    FlowConfig {
        operations: Some(operations),
        ..FlowConfig::default()
    }
}

/// `Start -> Task -> End` in a straight line.
#[allow(dead_code)]
pub fn linear_flow() -> FlowConfig {
    flow_from(vec![
        op(1, "Start", vec![Some(2)]),
        op(2, "Task", vec![Some(3)]),
        op(3, "End", vec![]),
    ])
}

/// `Start -> Branch -> Start`: the branch cycles back to the entry point.
#[allow(dead_code)]
pub fn cyclic_flow() -> FlowConfig {
    flow_from(vec![
        op(1, "Start", vec![Some(2)]),
        op(2, "Branch", vec![Some(1)]),
    ])
}

/// Two paths from the start re-converge on operation 4.
#[allow(dead_code)]
pub fn diamond_flow() -> FlowConfig {
    flow_from(vec![
        op(1, "Start", vec![Some(2), Some(3)]),
        op(2, "Task", vec![Some(4)]),
        op(3, "Task", vec![Some(4)]),
        op(4, "End", vec![]),
    ])
}

/// A node kind that counts its selection hook invocations, registered under
/// the start type so the session's own selection path exercises it.
#[allow(dead_code)]
pub struct CountingTemplate {
    pub selects: Rc<Cell<u32>>,
    pub deselects: Rc<Cell<u32>>,
}

#[allow(dead_code)]
impl CountingTemplate {
    pub fn new() -> (Self, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let selects = Rc::new(Cell::new(0));
        let deselects = Rc::new(Cell::new(0));
        (
            Self {
                selects: Rc::clone(&selects),
                deselects: Rc::clone(&deselects),
            },
            selects,
            deselects,
        )
    }
}

impl NodeTemplate for CountingTemplate {
    fn type_name(&self) -> &str {
        START_NODE_TYPE
    }

    fn instantiate(&self) -> Box<dyn FlowNode> {
        Box::new(CountingNode {
            core: NodeCore::new(START_NODE_TYPE),
            exits: ExitSlots::dynamic(),
            selects: Rc::clone(&self.selects),
            deselects: Rc::clone(&self.deselects),
        })
    }
}

pub struct CountingNode {
    core: NodeCore,
    exits: ExitSlots,
    selects: Rc<Cell<u32>>,
    deselects: Rc<Cell<u32>>,
}

impl FlowNode for CountingNode {
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

    fn set_selected(&mut self, selected: bool) {
        if selected {
            self.selects.set(self.selects.get() + 1);
        } else {
            self.deselects.set(self.deselects.get() + 1);
        }
        self.core.selected = selected;
    }
}

/// Renderer handle double reporting a fixed bounding box.
#[allow(dead_code)]
pub struct FixedComponent {
    pub bounds: BoundingBox,
}

#[allow(dead_code)]
impl FixedComponent {
    pub fn at(top: f64, left: f64) -> Box<Self> {
        Box::new(Self {
            bounds: BoundingBox {
                top,
                left,
                width: 120.0,
                height: 60.0,
            },
        })
    }
}

impl NodeComponent for FixedComponent {
    fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }
}
