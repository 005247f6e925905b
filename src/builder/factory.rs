use crate::node::{BasicNode, ExitArity, FlowNode, LinkNode, UndefinedNode};
use ahash::AHashMap;

/// Operation type that marks the entry point of a flow.
pub const START_NODE_TYPE: &str = "Start";
/// Operation type the builder requests when it needs a cycle-breaking
/// placeholder.
pub const LINK_NODE_TYPE: &str = "Link";

/// Defines the contract for instantiating nodes of a specific operation type.
pub trait NodeTemplate {
    fn type_name(&self) -> &str;
    fn instantiate(&self) -> Box<dyn FlowNode>;
}

/// Master macro defining the built-in node templates, their registration,
/// and their creation by name.
macro_rules! define_node_templates {
    ( $( ($struct_name:ident, $type_name:expr, $arity:expr) ),* $(,)? ) => {
        // 1. Define a template struct per built-in kind
        $(
            struct $struct_name;
            impl NodeTemplate for $struct_name {
                fn type_name(&self) -> &str { $type_name }
                fn instantiate(&self) -> Box<dyn FlowNode> {
                    Box::new(BasicNode::new($type_name, $arity))
                }
            }
        )*

        // 2. Define the function that registers every default template
        pub(super) fn register_default_templates(
            registry: &mut AHashMap<String, Box<dyn NodeTemplate>>,
        ) {
            $( registry.insert($type_name.to_string(), Box::new($struct_name)); )*
            registry.insert(LINK_NODE_TYPE.to_string(), Box::new(LinkTemplate));
        }

        // 3. Define the function that creates a default template by name
        pub(super) fn create_template_by_name(name: &str) -> Option<Box<dyn NodeTemplate>> {
            $(
                if name == $type_name {
                    return Some(Box::new($struct_name));
                }
            )*
            if name == LINK_NODE_TYPE {
                return Some(Box::new(LinkTemplate));
            }
            None
        }
    };
}

struct LinkTemplate;
impl NodeTemplate for LinkTemplate {
    fn type_name(&self) -> &str {
        LINK_NODE_TYPE
    }
    fn instantiate(&self) -> Box<dyn FlowNode> {
        Box::new(LinkNode::new(LINK_NODE_TYPE))
    }
}

// The built-in editor vocabulary. Flows may branch straight from the start,
// so the start kind grows its exits like a branch does.
define_node_templates! {
    (StartTemplate, START_NODE_TYPE, ExitArity::Dynamic),
    (TaskTemplate, "Task", ExitArity::Fixed(1)),
    (BranchTemplate, "Branch", ExitArity::Dynamic),
    (EndTemplate, "End", ExitArity::None),
}

/// Creates node instances by operation type name.
///
/// Unrecognized type names never fail: they fall back to the
/// [`UndefinedNode`] kind carrying the raw name, so a flow edited against a
/// newer operation catalog still renders.
pub struct NodeFactory {
    registry: AHashMap<String, Box<dyn NodeTemplate>>,
}

impl NodeFactory {
    pub fn new() -> Self {
        let mut registry: AHashMap<String, Box<dyn NodeTemplate>> = AHashMap::new();
        register_default_templates(&mut registry);
        Self { registry }
    }

    /// Registers a template under its own type name, replacing any previous
    /// registration.
    pub fn register(&mut self, template: Box<dyn NodeTemplate>) {
        self.registry
            .insert(template.type_name().to_string(), template);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_template(mut self, template: Box<dyn NodeTemplate>) -> Self {
        self.register(template);
        self
    }

    /// Maps a custom operation type name onto one of the built-in templates.
    pub fn with_type_alias(mut self, user_type_name: &str, builtin_type_name: &str) -> Self {
        if let Some(template) = create_template_by_name(builtin_type_name) {
            self.registry.insert(user_type_name.to_string(), template);
        }
        self
    }

    pub fn is_registered(&self, type_name: &str) -> bool {
        self.registry.contains_key(type_name)
    }

    /// Instantiates a fresh node for the given operation type.
    pub fn create_node(&self, type_name: &str) -> Box<dyn FlowNode> {
        match self.registry.get(type_name) {
            Some(template) => template.instantiate(),
            None => Box::new(UndefinedNode::new(type_name)),
        }
    }
}

impl Default for NodeFactory {
    fn default() -> Self {
        Self::new()
    }
}
