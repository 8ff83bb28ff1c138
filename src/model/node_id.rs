use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Key of a node inside a workflow.
///
/// Node ids are the string form of integers (`"3"`), but nothing upstream
/// guarantees that, so the raw string is kept. Numeric ids order numerically
/// and before any non-numeric id, which keeps iteration deterministic and
/// matches how JavaScript hosts order integer-like object keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The integer this id names, or `None` if it is not numeric.
    ///
    /// The whole id must parse, so `"3abc"` has no integer form.
    pub fn as_integer(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl Ord for NodeId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_integer(), other.as_integer()) {
            // "01" and "1" are distinct keys; fall back to the text to stay consistent with Eq.
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for NodeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Accepts both `"3"` and `3`; hosts are inconsistent about which one they send.
impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NodeIdVisitor;

        impl Visitor<'_> for NodeIdVisitor {
            type Value = NodeId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a node id as a string or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<NodeId, E> {
                Ok(NodeId::from(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<NodeId, E> {
                Ok(NodeId::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<NodeId, E> {
                Ok(NodeId::from(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<NodeId, E> {
                Ok(NodeId(v.to_string()))
            }
        }

        deserializer.deserialize_any(NodeIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_sort_numerically() {
        let mut ids: Vec<NodeId> = ["10", "b", "2", "a", "1"]
            .into_iter()
            .map(NodeId::from)
            .collect();
        ids.sort();
        let sorted: Vec<&str> = ids.iter().map(NodeId::as_str).collect();
        assert_eq!(sorted, vec!["1", "2", "10", "a", "b"]);
    }

    #[test]
    fn leading_zero_ids_stay_distinct() {
        let a = NodeId::from("01");
        let b = NodeId::from("1");
        assert_ne!(a, b);
        assert_ne!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.as_integer(), b.as_integer());
    }

    #[test]
    fn partly_numeric_ids_are_not_integers() {
        assert_eq!(NodeId::from("3abc").as_integer(), None);
        assert_eq!(NodeId::from("").as_integer(), None);
        assert_eq!(NodeId::from("-4").as_integer(), Some(-4));
    }

    #[test]
    fn deserializes_from_number_or_string() {
        let from_num: NodeId = serde_json::from_str("7").unwrap();
        let from_str: NodeId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(from_num, from_str);
        assert!(serde_json::from_str::<NodeId>("7.5").is_err());
    }
}
