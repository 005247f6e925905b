use crate::error::FlowLoadError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Identifier of an operation record inside a serialized flow. Distinct from
/// the synthetic [`NodeId`](crate::node::NodeId) assigned during parsing.
pub type OperationId = u32;

/// The complete serialized definition of a flow, as produced by the editor
/// backend. This is the input to [`FlowSession::parse_flow`](crate::session::FlowSession::parse_flow).
///
/// Everything except `operations` is editor metadata that the model layer
/// carries but does not interpret.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlowConfig {
    pub id: Option<String>,
    pub name: Option<String>,
    pub version: Option<u32>,
    pub flow_version_id: Option<u32>,
    pub customer_id: Option<u32>,
    pub customer_name: Option<String>,
    pub is_active: Option<bool>,
    pub is_active_in_future: Option<u32>,
    pub change_date: Option<String>,
    pub change_user: Option<String>,
    /// Operation records keyed by operation id. A `BTreeMap` keeps the scan
    /// order deterministic, which start-node selection depends on.
    pub operations: Option<BTreeMap<OperationId, OperationConfig>>,
}

/// One serialized operation record: the definition of a single node in the
/// flow, before parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationConfig {
    pub id: OperationId,
    #[serde(rename = "type")]
    pub op_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub base_node: String,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub config: serde_json::Map<String, serde_json::Value>,
    /// Outgoing connections in slot order. `None` entries are declared but
    /// unconnected slots.
    #[serde(default)]
    pub exits: Vec<Option<OperationId>>,
}

impl FlowConfig {
    /// Deserialize a flow definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FlowLoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a flow definition from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FlowLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Number of operation records in this flow.
    pub fn operation_count(&self) -> usize {
        self.operations.as_ref().map_or(0, BTreeMap::len)
    }
}
