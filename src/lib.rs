//! # graphwire - Workflow Format Converter
//!
//! **graphwire** converts node-graph workflows between the two shapes an
//! image-generation pipeline editor deals with:
//!
//! - the **editor format** ([`EditorWorkflow`](model::EditorWorkflow)): nodes with layout,
//!   literal inputs on unconnected sockets, and explicit [`Edge`](model::Edge)s;
//! - the **execution format** ([`ExecutionWorkflow`](model::ExecutionWorkflow)): a flat
//!   map of nodes whose inputs are either literal values or inlined
//!   `["<node id>", <output index>]` connections.
//!
//! ## Connections vs. literals
//!
//! On the wire a connection is just a two element array, which a literal
//! input could also be. The ambiguity is settled exactly once, when JSON is
//! read into an [`InputValue`](model::InputValue): an array of a string or integer
//! node id followed by a non-negative integer is a connection, anything else
//! is a literal. The converter itself only ever looks at the variant.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphwire::prelude::*;
//!
//! let api = ExecutionWorkflow::from_json(
//!     r#"{
//!         "1": { "class_type": "CheckpointLoaderSimple", "inputs": { "ckpt_name": "sd15.safetensors" } },
//!         "3": { "class_type": "KSampler", "inputs": { "seed": 42, "model": ["1", 0] } }
//!     }"#,
//! )?;
//!
//! // Connections become edges; literals stay on the node.
//! let editor = to_editor_format(&api);
//! assert_eq!(editor.edges, vec![Edge::new("1", 0, "3", "model")]);
//!
//! // And back again: the edge is folded into the target input.
//! let restored = to_execution_format(&editor);
//! assert_eq!(restored.get(&NodeId::from("3")).unwrap().inputs, api.get(&NodeId::from("3")).unwrap().inputs);
//!
//! // A strict converter refuses malformed graphs instead of guessing.
//! let strict = Converter::builder().strict(true).build();
//! let mut broken = editor.clone();
//! broken.edges.push(Edge::new("9", 0, "3", "positive"));
//! assert!(matches!(
//!     strict.to_execution_format(&broken),
//!     Err(ValidationError::UnknownSourceNode { .. })
//! ));
//! # Ok::<(), graphwire::error::FormatError>(())
//! ```

pub mod convert;
pub mod error;
pub mod model;
pub mod prelude;
pub mod summary;
pub mod validate;

pub use convert::{Converter, ConverterBuilder, to_editor_format, to_execution_format};
pub use validate::{validate_editor, validate_execution};

#[cfg(feature = "python-bindings")]
mod python;
