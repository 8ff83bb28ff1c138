//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! graphwire crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use graphwire::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let api = ExecutionWorkflow::from_file("path/to/workflow_api.json")?;
//! let editor = Converter::builder().strict(true).build().to_editor_format(&api)?;
//! println!("{}", editor.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

// Conversion
pub use crate::convert::{Converter, ConverterBuilder, to_editor_format, to_execution_format};
pub use crate::validate::{validate_editor, validate_execution};

// Data model
pub use crate::model::{
    ConnectionRef, Edge, EditorNode, EditorWorkflow, ExecutionNode, ExecutionWorkflow,
    InputValue, NodeId, NodeMeta, Position, Size,
};

// Error types
pub use crate::error::{FormatError, ValidationError};

// Summaries
pub use crate::summary::SummaryFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
