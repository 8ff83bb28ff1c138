use super::NodeId;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A wire from another node's output slot.
///
/// On the wire this is the two element array `[<node id>, <output index>]`.
/// The node id is written back in the form it was read in, so an integer
/// pair such as `[512, 768]` survives a parse and re-serialize unchanged.
/// Equality and hashing only look at the node and the slot.
#[derive(Debug, Clone)]
pub struct ConnectionRef {
    pub node: NodeId,
    pub output: u32,
    numeric_id: bool,
}

impl ConnectionRef {
    /// A connection whose node id is written as a JSON string.
    pub fn new(node: impl Into<NodeId>, output: u32) -> Self {
        Self {
            node: node.into(),
            output,
            numeric_id: false,
        }
    }

    /// A connection whose node id is written as a JSON integer.
    pub fn numeric(node: i64, output: u32) -> Self {
        Self {
            node: NodeId::from(node),
            output,
            numeric_id: true,
        }
    }

    /// Recognizes the connection shape: exactly two elements, a string or
    /// integer node id followed by a non-negative integer slot index.
    pub fn from_json(value: &Value) -> Option<Self> {
        let [node, output] = value.as_array()?.as_slice() else {
            return None;
        };
        let output = u32::try_from(output.as_u64()?).ok()?;
        match node {
            Value::String(s) => Some(Self::new(s.as_str(), output)),
            Value::Number(n) => Some(Self::numeric(n.as_i64()?, output)),
            _ => None,
        }
    }

    /// Whether the node id was read from, and is written as, a JSON integer.
    pub fn has_numeric_id(&self) -> bool {
        self.numeric_id
    }

    fn wire_node(&self) -> Value {
        let integer = self
            .node
            .as_integer()
            .filter(|n| self.numeric_id && n.to_string() == self.node.as_str());
        match integer {
            Some(n) => Value::from(n),
            None => Value::String(self.node.to_string()),
        }
    }

    pub fn to_json(&self) -> Value {
        Value::Array(vec![self.wire_node(), Value::from(self.output)])
    }
}

impl PartialEq for ConnectionRef {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.output == other.output
    }
}

impl Eq for ConnectionRef {}

impl Hash for ConnectionRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
        self.output.hash(state);
    }
}

impl fmt::Display for ConnectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node, self.output)
    }
}

impl Serialize for ConnectionRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.wire_node())?;
        pair.serialize_element(&self.output)?;
        pair.end()
    }
}

/// The value bound to a node input socket.
///
/// The execution format cannot tell a literal two element array from a
/// connection. That question is answered once, when JSON is read (see
/// [`InputValue::from_json`]); from then on the variant is authoritative.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Literal(Value),
    Connection(ConnectionRef),
}

impl InputValue {
    pub fn literal(value: impl Into<Value>) -> Self {
        InputValue::Literal(value.into())
    }

    pub fn connection(node: impl Into<NodeId>, output: u32) -> Self {
        InputValue::Connection(ConnectionRef::new(node, output))
    }

    /// Classifies an untyped JSON value.
    pub fn from_json(value: Value) -> Self {
        match ConnectionRef::from_json(&value) {
            Some(connection) => InputValue::Connection(connection),
            None => InputValue::Literal(value),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            InputValue::Literal(value) => value.clone(),
            InputValue::Connection(connection) => connection.to_json(),
        }
    }

    pub fn as_connection(&self) -> Option<&ConnectionRef> {
        match self {
            InputValue::Connection(connection) => Some(connection),
            InputValue::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            InputValue::Literal(value) => Some(value),
            InputValue::Connection(_) => None,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, InputValue::Connection(_))
    }
}

impl From<ConnectionRef> for InputValue {
    fn from(connection: ConnectionRef) -> Self {
        InputValue::Connection(connection)
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Literal(value) => write!(f, "{}", value),
            InputValue::Connection(connection) => write!(f, "<- {}", connection),
        }
    }
}

impl Serialize for InputValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            InputValue::Literal(value) => value.serialize(serializer),
            InputValue::Connection(connection) => connection.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for InputValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(InputValue::from_json)
    }
}
