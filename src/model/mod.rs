//! The two workflow representations and the values that flow between them.

pub mod editor;
pub mod execution;
pub mod node_id;
pub mod value;

pub use editor::*;
pub use execution::*;
pub use node_id::*;
pub use value::*;

use crate::error::FormatError;
use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

/// Guesses whether a parsed document is an editor workflow.
///
/// An editor document has a `nodes` object. An execution workflow with a
/// node keyed `"nodes"` has one too, but that object carries a string
/// `class_type`, which no editor node map does. Callers that know the
/// format should say so instead of relying on this.
pub fn is_editor_document(raw: &Value) -> bool {
    match raw.get("nodes") {
        Some(Value::Object(nodes)) => !nodes.get("class_type").is_some_and(Value::is_string),
        _ => false,
    }
}

/// Reads a node map, rejecting repeated keys instead of keeping the last one.
pub(crate) fn deserialize_unique_nodes<'de, D, V>(
    deserializer: D,
) -> Result<BTreeMap<NodeId, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct UniqueNodesVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueNodesVisitor<V> {
        type Value = BTreeMap<NodeId, V>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of node ids to nodes")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut nodes = BTreeMap::new();
            while let Some((id, node)) = access.next_entry::<NodeId, V>()? {
                if nodes.contains_key(&id) {
                    return Err(de::Error::custom(format!("duplicate node id '{}'", id)));
                }
                nodes.insert(id, node);
            }
            Ok(nodes)
        }
    }

    deserializer.deserialize_map(UniqueNodesVisitor(PhantomData))
}

/// Treats an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, FormatError> {
    let content = std::fs::read_to_string(path).map_err(|e| FormatError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(serde_json::from_str(&content)?)
}
