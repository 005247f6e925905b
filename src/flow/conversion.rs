use super::definition::FlowConfig;
use crate::error::FlowConversionError;

/// A trait for custom editor data models that can be converted into a nagare
/// [`FlowConfig`].
///
/// This is the primary extension point for making nagare format-agnostic. By
/// implementing this trait on your own configuration structs, you provide a
/// translation layer that lets the session parse your custom flow format.
///
/// # Example
///
/// ```rust,no_run
/// use nagare::error::FlowConversionError;
/// use nagare::flow::{FlowConfig, IntoFlowConfig, OperationConfig};
/// use std::collections::BTreeMap;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep { id: u32, kind: String, next: Option<u32> }
/// struct MyWorkflow { steps: Vec<MyStep> }
///
/// // 2. Implement `IntoFlowConfig` for your top-level struct.
/// impl IntoFlowConfig for MyWorkflow {
///     fn into_flow_config(self) -> Result<FlowConfig, FlowConversionError> {
///         let mut operations = BTreeMap::new();
///         for step in self.steps {
///             operations.insert(step.id, OperationConfig {
///                 id: step.id,
///                 op_type: step.kind,
///                 name: String::new(),
///                 base_node: String::new(),
///                 notes: Vec::new(),
///                 config: serde_json::Map::new(),
///                 exits: vec![step.next],
///             });
///         }
///
///         Ok(FlowConfig {
///             operations: Some(operations),
///             ..FlowConfig::default()
///         })
///     }
/// }
/// ```
pub trait IntoFlowConfig {
    /// Consumes the object and converts it into a nagare-compatible flow
    /// definition.
    fn into_flow_config(self) -> Result<FlowConfig, FlowConversionError>;
}
