use super::{InputValue, NodeId, deserialize_unique_nodes, null_as_default};
use crate::error::FormatError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeMeta {
    #[serde(default)]
    pub title: Option<String>,
}

/// A node as the execution backend sees it: a class name and resolved inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub inputs: BTreeMap<String, InputValue>,
    pub class_type: String,
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<NodeMeta>,
}

impl ExecutionNode {
    pub fn new(class_type: impl Into<String>) -> Self {
        Self {
            inputs: BTreeMap::new(),
            class_type: class_type.into(),
            meta: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta = Some(NodeMeta {
            title: Some(title.into()),
        });
        self
    }

    pub fn with_input(mut self, name: impl Into<String>, value: InputValue) -> Self {
        self.inputs.insert(name.into(), value);
        self
    }

    /// The `_meta.title`, or the class name when the title is absent or empty.
    pub fn display_title(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(|m| m.title.as_deref())
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.class_type)
    }
}

/// The execution API format: node id to node, serialized as a bare JSON object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExecutionWorkflow {
    nodes: BTreeMap<NodeId, ExecutionNode>,
}

impl ExecutionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<NodeId>, node: ExecutionNode) -> Option<ExecutionNode> {
        self.nodes.insert(id.into(), node)
    }

    pub fn get(&self, id: &NodeId) -> Option<&ExecutionNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, NodeId, ExecutionNode> {
        self.nodes.iter()
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, ExecutionNode> {
        &self.nodes
    }

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

impl FromIterator<(NodeId, ExecutionNode)> for ExecutionWorkflow {
    fn from_iter<I: IntoIterator<Item = (NodeId, ExecutionNode)>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ExecutionWorkflow {
    type Item = (&'a NodeId, &'a ExecutionNode);
    type IntoIter = btree_map::Iter<'a, NodeId, ExecutionNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl Serialize for ExecutionWorkflow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.nodes.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ExecutionWorkflow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_unique_nodes(deserializer).map(|nodes| Self { nodes })
    }
}
