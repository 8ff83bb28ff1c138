use crate::model::NodeId;
use thiserror::Error;

/// Structural problems found in a workflow graph.
///
/// The default converter tolerates all of these and only logs them. A strict
/// converter, or an explicit call to [`crate::validate`], surfaces them so the
/// caller can decide whether to reject the graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Node '{source_node}' not found, which is required by a connection into node '{edge_target}'"
    )]
    UnknownSourceNode {
        source_node: NodeId,
        edge_target: NodeId,
    },

    #[error("Edge targets node '{target_node}' (input '{target_input}'), which does not exist")]
    UnknownTargetNode {
        target_node: NodeId,
        target_input: String,
    },

    #[error("Nodes '{first_key}' and '{second_key}' both declare id {id}")]
    DuplicateNodeId {
        id: i64,
        first_key: NodeId,
        second_key: NodeId,
    },

    #[error("Node '{key}' declares id {id}, which does not match its key")]
    NodeIdMismatch { key: NodeId, id: i64 },

    #[error("Node id '{0}' is not an integer")]
    NonIntegerNodeId(NodeId),

    #[error("Input '{input}' of node '{node_id}' has both a literal value and an incoming edge")]
    InputConflict { node_id: NodeId, input: String },

    #[error("Input '{input}' of node '{node_id}' is fed by more than one edge")]
    DuplicateConnection { node_id: NodeId, input: String },
}

/// Errors raised while reading or writing workflow documents.
#[derive(Error, Debug, Clone)]
pub enum FormatError {
    #[error("Failed to parse workflow JSON: {0}")]
    Json(String),

    #[error("Could not access '{path}': {message}")]
    Io { path: String, message: String },
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::Json(err.to_string())
    }
}
