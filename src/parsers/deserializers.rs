use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::trace;

use crate::models::{DEFAULT_TITLE, Message, Node, NodeId, Role};

/// Title deserializer: null becomes [`DEFAULT_TITLE`], non-strings are rejected
pub fn deserialize_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let title = Option::<String>::deserialize(deserializer)?;
    Ok(title.unwrap_or_else(|| DEFAULT_TITLE.to_string()))
}

/// Mapping deserializer: null becomes an empty mapping, non-objects are rejected
///
/// Individual node values never fail: anything that is not an object is kept
/// as a structural node so one bad entry cannot sink the whole export.
pub fn deserialize_mapping<'de, D>(deserializer: D) -> Result<IndexMap<NodeId, Node>, D::Error>
where
    D: Deserializer<'de>,
{
    let mapping = Option::<IndexMap<NodeId, Value>>::deserialize(deserializer)?;
    Ok(mapping
        .unwrap_or_default()
        .into_iter()
        .map(|(id, value)| {
            let node = node_from_value(&id, value);
            (id, node)
        })
        .collect())
}

fn node_from_value(id: &str, value: Value) -> Node {
    match value {
        Value::Object(_) => Node::deserialize(value).unwrap_or_else(|err| {
            trace!(node = id, error = %err, "malformed node, treating as structural");
            Node::default()
        }),
        other => {
            trace!(node = id, value = %other, "non-object node, treating as structural");
            Node::default()
        }
    }
}

/// Timestamp deserializer that never fails
///
/// Accepts numbers (epoch seconds, possibly fractional) and numeric strings.
/// Anything else is treated as missing.
pub fn deserialize_create_time<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let timestamp = match &value {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        other => {
            trace!(value = %other, "ignoring non-numeric create_time");
            None
        }
    };
    Ok(timestamp)
}

/// Message deserializer that never fails
///
/// null and `{}` mean "no message" (structural node). A message that is
/// present but not an object is kept as an unknown-role message without
/// content, which later renders as the placeholder text.
pub fn deserialize_message<'de, D>(deserializer: D) -> Result<Option<Message>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let message = match value {
        Value::Null => None,
        Value::Object(object) if object.is_empty() => None,
        Value::Object(object) => Some(Message::from_export(&object)),
        other => {
            trace!(value = %other, "malformed message, substituting empty message");
            Some(Message { role: Role::Unknown, parts: None })
        }
    };
    Ok(message)
}
