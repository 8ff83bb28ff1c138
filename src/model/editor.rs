use super::{InputValue, NodeId, deserialize_unique_nodes, null_as_default};
use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Version stamped on editor workflows synthesized from the execution format.
pub const EDITOR_FORMAT_VERSION: f64 = 0.4;

/// Canvas position of a node, serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position(pub f64, pub f64);

impl Position {
    /// Placeholder for nodes whose layout cannot be reconstructed.
    pub const ORIGIN: Position = Position(0.0, 0.0);
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Placeholder for nodes whose layout cannot be reconstructed.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// A node as the visual editor sees it.
///
/// `inputs` only holds sockets that are not wired; wired sockets are
/// described by an [`Edge`] instead. Upstream producers do not always respect
/// that, so a value here may itself be a connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorNode {
    /// Integer form of the node key, `None` when the key is not numeric.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub pos: Position,
    #[serde(default)]
    pub size: Size,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inputs: BTreeMap<String, InputValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub outputs: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Map<String, Value>,
}

impl EditorNode {
    /// A node with default layout and no sockets.
    pub fn new(id: Option<i64>, node_type: impl Into<String>) -> Self {
        Self {
            id,
            node_type: node_type.into(),
            title: String::new(),
            pos: Position::ORIGIN,
            size: Size::ZERO,
            inputs: BTreeMap::new(),
            outputs: BTreeMap::new(),
            properties: Map::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_input(mut self, name: impl Into<String>, value: InputValue) -> Self {
        self.inputs.insert(name.into(), value);
        self
    }

    /// The title to show for this node, falling back to its type.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.node_type
        } else {
            &self.title
        }
    }
}

/// An explicit wire between an output slot and a named input socket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub source_node: NodeId,
    pub source_output: u32,
    pub target_node: NodeId,
    pub target_input: String,
}

impl Edge {
    pub fn new(
        source_node: impl Into<NodeId>,
        source_output: u32,
        target_node: impl Into<NodeId>,
        target_input: impl Into<String>,
    ) -> Self {
        Self {
            source_node: source_node.into(),
            source_output,
            target_node: target_node.into(),
            target_input: target_input.into(),
        }
    }
}

/// The editor's view of a workflow: nodes plus explicit edges.
///
/// `groups` and `config` are editor metadata this crate never interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorWorkflow {
    #[serde(deserialize_with = "deserialize_unique_nodes")]
    pub nodes: BTreeMap<NodeId, EditorNode>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<Edge>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub config: Map<String, Value>,
    #[serde(default = "default_version")]
    pub version: f64,
}

fn default_version() -> f64 {
    EDITOR_FORMAT_VERSION
}

impl Default for EditorWorkflow {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: Vec::new(),
            groups: Vec::new(),
            config: Map::new(),
            version: EDITOR_FORMAT_VERSION,
        }
    }
}

impl EditorWorkflow {
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        super::read_json_file(path.as_ref())
    }

    pub fn to_json_pretty(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
