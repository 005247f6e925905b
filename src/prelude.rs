//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! nagare crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use nagare::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let flow = FlowConfig::from_file("path/to/flow.json")?;
//!
//! let mut session = FlowSession::default();
//! session.parse_flow(&flow);
//!
//! if let Some(start) = session.start_node() {
//!     println!("Start node: {}", start.display_name());
//! }
//! # Ok(())
//! # }
//! ```

// Session and builder
pub use crate::builder::{LINK_NODE_TYPE, NodeFactory, NodeTemplate, START_NODE_TYPE};
pub use crate::session::FlowSession;

// Input model
pub use crate::flow::{FlowConfig, IntoFlowConfig, OperationConfig, OperationId};

// Node abstraction
pub use crate::node::{
    BasicNode, ExitArity, ExitSlots, FlowNode, LinkNode, NodeCore, NodeId, UndefinedNode,
};

// Rendering boundary and notifications
pub use crate::session::{BoundingBox, FocusPoint, NodeComponent, Signal, SubscriptionId};

// Error types
pub use crate::error::{FlowConversionError, FlowLoadError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
