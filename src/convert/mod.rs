use crate::error::ValidationError;
use crate::model::{EDITOR_FORMAT_VERSION, EditorWorkflow, ExecutionWorkflow};
use crate::validate::{validate_editor, validate_editor_nodes, validate_execution};
use tracing::warn;

mod decode;
mod encode;

/// Converts workflows between the editor and execution formats.
///
/// A `Converter` holds configuration only, so one instance can be shared
/// freely across threads. The default converter is permissive: malformed
/// graphs are converted on a best-effort basis and each irregularity is
/// logged as a warning. A strict converter returns the first
/// [`ValidationError`] instead.
#[derive(Debug, Clone)]
pub struct Converter {
    strict: bool,
    merge_edges: bool,
    editor_version: f64,
}

/// Configures a [`Converter`]. Start from [`Converter::builder`].
#[derive(Debug, Clone)]
pub struct ConverterBuilder {
    strict: bool,
    merge_edges: bool,
    editor_version: f64,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self {
            strict: false,
            merge_edges: true,
            editor_version: EDITOR_FORMAT_VERSION,
        }
    }

    /// Reject malformed graphs instead of converting them best-effort.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether editor edges are folded into execution inputs.
    ///
    /// With this off, only each node's own `inputs` map is used and `edges`
    /// are ignored, so wires survive only if the producer already stored
    /// them as connection values. Edges are then not validated either.
    pub fn merge_edges(mut self, merge_edges: bool) -> Self {
        self.merge_edges = merge_edges;
        self
    }

    /// Version stamped on synthesized editor workflows.
    pub fn editor_version(mut self, version: f64) -> Self {
        self.editor_version = version;
        self
    }

    pub fn build(self) -> Converter {
        Converter {
            strict: self.strict,
            merge_edges: self.merge_edges,
            editor_version: self.editor_version,
        }
    }
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Converter {
    fn default() -> Self {
        ConverterBuilder::new().build()
    }
}

impl Converter {
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Flattens an editor workflow into the execution format.
    ///
    /// Every node keeps its key. Literal inputs are copied through as they
    /// are, and (unless disabled) each edge becomes a connection on its
    /// target socket. When a socket has both a literal and an edge, or
    /// several edges, the last edge wins.
    pub fn to_execution_format(
        &self,
        workflow: &EditorWorkflow,
    ) -> Result<ExecutionWorkflow, ValidationError> {
        let issues = if self.merge_edges {
            validate_editor(workflow)
        } else {
            validate_editor_nodes(workflow)
        };
        self.screen(issues)?;
        Ok(encode::encode(workflow, self.merge_edges))
    }

    /// Rebuilds an editor workflow from the execution format.
    ///
    /// Connection inputs become edges; literals stay on the node. Layout,
    /// groups and config cannot be recovered and come back as defaults.
    pub fn to_editor_format(
        &self,
        workflow: &ExecutionWorkflow,
    ) -> Result<EditorWorkflow, ValidationError> {
        self.screen(validate_execution(workflow))?;
        Ok(decode::decode(workflow, self.editor_version))
    }

    fn screen(&self, issues: Vec<ValidationError>) -> Result<(), ValidationError> {
        if self.strict {
            match issues.into_iter().next() {
                Some(first) => Err(first),
                None => Ok(()),
            }
        } else {
            log_tolerated(&issues);
            Ok(())
        }
    }
}

fn log_tolerated(issues: &[ValidationError]) {
    for issue in issues {
        warn!(%issue, "converting malformed workflow");
    }
}

/// Converts with the default, permissive settings. Never fails.
pub fn to_execution_format(workflow: &EditorWorkflow) -> ExecutionWorkflow {
    log_tolerated(&validate_editor(workflow));
    encode::encode(workflow, true)
}

/// Converts with the default, permissive settings. Never fails.
pub fn to_editor_format(workflow: &ExecutionWorkflow) -> EditorWorkflow {
    log_tolerated(&validate_execution(workflow));
    decode::decode(workflow, EDITOR_FORMAT_VERSION)
}
