//! # Nagare - Flow Graph Model and Editing Session
//!
//! **Nagare** is the in-memory model layer for node-based flow editors: it
//! parses a serialized flow definition (a map of operation records with type,
//! configuration, and exit pointers) into a live graph of typed nodes, and
//! keeps the surrounding editing session — selection, renderer registry, and
//! change notifications — consistent while the user works.
//!
//! The parser is built to survive real editor input. Cyclic and
//! re-converging flows terminate by inserting link placeholders for
//! back-edges, exits pointing at missing operations resolve to empty slots,
//! and unrecognized operation types fall back to an undefined node kind that
//! keeps the raw record around. Malformed flows degrade; they never crash
//! the session.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Flow**: Deserialize a flow definition with
//!     [`FlowConfig::from_json`](flow::FlowConfig::from_json), or implement
//!     [`IntoFlowConfig`](flow::IntoFlowConfig) to translate your own format.
//! 2.  **Build a Session**: Create a [`FlowSession`](session::FlowSession),
//!     optionally with a [`NodeFactory`](builder::NodeFactory) extended by
//!     your own node kinds.
//! 3.  **Parse**: `parse_flow` builds the graph, selects the start node, and
//!     notifies subscribers.
//! 4.  **Wire the UI**: the rendering layer registers a component per node
//!     id and receives focus/selection events back from the session.
//!
//! ## Quick Start
//!
//! ```rust
//! use nagare::prelude::*;
//!
//! # fn run() -> Result<()> {
//! let json = r#"{
//!     "name": "Order intake",
//!     "operations": {
//!         "1": { "id": 1, "type": "Start", "name": "Start", "exits": [2] },
//!         "2": { "id": 2, "type": "End", "name": "Done" }
//!     }
//! }"#;
//!
//! let flow = FlowConfig::from_json(json)?;
//!
//! let mut session = FlowSession::default();
//! session.subscribe_selection(|selected| {
//!     println!("selection is now {selected:?}");
//! });
//! session.parse_flow(&flow);
//!
//! let start = session.start_node().expect("flow has a start node");
//! assert_eq!(start.type_name(), "Start");
//! assert_eq!(start.exits().map(|exits| exits.len()), Some(1));
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

pub mod builder;
pub mod error;
pub mod flow;
pub mod node;
pub mod prelude;
pub mod session;
