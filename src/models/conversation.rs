use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Title used when an export record has no title (or a null one)
pub const DEFAULT_TITLE: &str = "No Title";

/// Node identifier, unique within one conversation's mapping
pub type NodeId = String;

/// One conversation record from the export
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Conversation {
    #[serde(
        default = "default_title",
        deserialize_with = "crate::parsers::deserializers::deserialize_title"
    )]
    pub title: String,
    /// Message tree, keyed by node id, in the export's key order
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_mapping")]
    pub mapping: IndexMap<NodeId, Node>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_create_time")]
    pub create_time: Option<f64>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Conversation {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), mapping: IndexMap::new(), create_time: None }
    }

    /// Builder-style helper for inserting a node
    pub fn with_node(mut self, id: impl Into<NodeId>, node: Node) -> Self {
        self.mapping.insert(id.into(), node);
        self
    }
}

/// Entry in a conversation's message tree
///
/// Nodes without a message are structural placeholders (the root, for example).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Node {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_create_time")]
    pub create_time: Option<f64>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_message")]
    pub message: Option<Message>,
}

impl Node {
    pub fn new(create_time: Option<f64>, message: Option<Message>) -> Self {
        Self { create_time, message }
    }

    /// Timestamp used for ordering; missing and NaN timestamps count as 0
    pub fn sort_key(&self) -> f64 {
        match self.create_time {
            Some(t) if !t.is_nan() => t,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
    System,
    Unknown,
}

impl Role {
    /// Map an export `author.role` label; anything unrecognized is `Unknown`
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("user") {
            Role::User
        } else if label.eq_ignore_ascii_case("assistant") {
            Role::Assistant
        } else if label.eq_ignore_ascii_case("system") {
            Role::System
        } else {
            Role::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
            Role::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
            Role::System => "System",
            Role::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// One fragment of a message's `content.parts`
#[derive(Debug, Clone, PartialEq)]
pub enum ContentPart {
    Text(String),
    /// JSON object payload (image pointers, tool output, ...)
    Structured(Map<String, Value>),
    /// null, numbers, arrays, booleans: kept for counting, dropped when flattened
    Unsupported,
}

impl ContentPart {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => ContentPart::Text(text),
            Value::Object(map) => ContentPart::Structured(map),
            _ => ContentPart::Unsupported,
        }
    }

    /// Searchable text, if this fragment is a text fragment
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentPart::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    /// `None` when the export carried no `content.parts` at all
    pub parts: Option<Vec<ContentPart>>,
}

impl Message {
    pub fn new(role: Role, parts: Vec<ContentPart>) -> Self {
        Self { role, parts: Some(parts) }
    }

    /// Convenience constructor for a message made of text fragments
    pub fn text(role: Role, fragments: &[&str]) -> Self {
        Self::new(role, fragments.iter().map(|f| ContentPart::Text((*f).to_string())).collect())
    }

    /// Text fragments only, in order
    pub fn text_parts(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().flatten().filter_map(ContentPart::as_text)
    }

    /// Lenient conversion from the export's message object
    ///
    /// Missing `author.role` becomes [`Role::Unknown`]; a missing or non-array
    /// `content.parts` becomes `None`.
    pub fn from_export(object: &Map<String, Value>) -> Self {
        let role = object
            .get("author")
            .and_then(|author| author.get("role"))
            .and_then(Value::as_str)
            .map(Role::from_label)
            .unwrap_or(Role::Unknown);

        let parts = object
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(Value::as_array)
            .map(|parts| parts.iter().cloned().map(ContentPart::from_value).collect());

        Self { role, parts }
    }
}
