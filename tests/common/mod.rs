//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a `conversations.json` export on disk
///
/// Conversations are added in export order (oldest first), the way the
/// export stores them.
pub struct ArchiveBuilder {
    temp_dir: TempDir,
    conversations: Vec<ConversationBuilder>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, conversations: Vec::new() }
    }

    pub fn with_conversation(mut self, conversation: ConversationBuilder) -> Self {
        self.conversations.push(conversation);
        self
    }

    /// Add one message-less conversation per title
    pub fn with_titles(mut self, titles: &[&str]) -> Self {
        self.conversations.extend(titles.iter().map(|t| ConversationBuilder::new(t)));
        self
    }

    pub fn to_json(&self) -> String {
        let records: Vec<String> = self.conversations.iter().map(|c| c.to_json()).collect();
        format!("[{}]", records.join(","))
    }

    /// Write `conversations.json` and return the temp dir plus the file path
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("conversations.json");
        fs::write(&path, self.to_json()).expect("Failed to write conversations.json");
        (self.temp_dir, path)
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write raw content as `conversations.json` in a fresh temp dir
pub fn write_raw_archive(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("conversations.json");
    fs::write(&path, content).expect("Failed to write conversations.json");
    (temp_dir, path)
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is valid UTF-8")
}

/// Builder for one conversation record
pub struct ConversationBuilder {
    title: Option<String>,
    create_time: Option<f64>,
    nodes: Vec<(String, NodeBuilder)>,
}

impl ConversationBuilder {
    pub fn new(title: &str) -> Self {
        Self { title: Some(title.to_string()), create_time: None, nodes: Vec::new() }
    }

    /// A record with no `title` key at all
    pub fn untitled() -> Self {
        Self { title: None, create_time: None, nodes: Vec::new() }
    }

    pub fn create_time(mut self, create_time: f64) -> Self {
        self.create_time = Some(create_time);
        self
    }

    pub fn with_node(mut self, id: &str, node: NodeBuilder) -> Self {
        self.nodes.push((id.to_string(), node));
        self
    }

    /// Shorthand for a text message node
    pub fn with_message(self, id: &str, role: &str, text: &str, create_time: f64) -> Self {
        self.with_node(id, NodeBuilder::new().role(role).part(text).create_time(create_time))
    }

    /// Serialize with mapping keys in insertion order
    pub fn to_json(&self) -> String {
        let mapping: Vec<String> = self
            .nodes
            .iter()
            .map(|(id, node)| format!("{}:{}", json!(id), node.to_value()))
            .collect();

        let mut fields = Vec::new();
        if let Some(title) = &self.title {
            fields.push(format!(r#""title":{}"#, json!(title)));
        }
        if let Some(create_time) = self.create_time {
            fields.push(format!(r#""create_time":{}"#, json!(create_time)));
        }
        fields.push(format!(r#""mapping":{{{}}}"#, mapping.join(",")));
        format!("{{{}}}", fields.join(","))
    }
}

/// Builder for one mapping node
pub struct NodeBuilder {
    create_time: Option<f64>,
    role: Option<String>,
    parts: Option<Vec<Value>>,
    has_message: bool,
}

impl NodeBuilder {
    /// A node with an empty message (role and parts absent until set)
    pub fn new() -> Self {
        Self { create_time: None, role: None, parts: None, has_message: true }
    }

    /// A structural node with no message
    pub fn structural() -> Self {
        Self { create_time: None, role: None, parts: None, has_message: false }
    }

    pub fn create_time(mut self, create_time: f64) -> Self {
        self.create_time = Some(create_time);
        self
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    pub fn part(self, text: &str) -> Self {
        self.raw_part(json!(text))
    }

    /// Any JSON value as a content fragment
    pub fn raw_part(mut self, value: Value) -> Self {
        self.parts.get_or_insert_with(Vec::new).push(value);
        self
    }

    pub fn to_value(&self) -> Value {
        let mut node = serde_json::Map::new();
        node.insert("parent".into(), Value::Null);
        node.insert("children".into(), json!([]));
        if let Some(create_time) = self.create_time {
            node.insert("create_time".into(), json!(create_time));
        }
        if self.has_message {
            let mut message = serde_json::Map::new();
            if let Some(role) = &self.role {
                message.insert("author".into(), json!({ "role": role }));
            }
            if let Some(parts) = &self.parts {
                message.insert("content".into(), json!({ "content_type": "text", "parts": parts }));
            }
            node.insert("message".into(), Value::Object(message));
        } else {
            node.insert("message".into(), Value::Null);
        }
        Value::Object(node)
    }
}

impl Default for NodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The two-message "Jam session" conversation with out-of-order timestamps
pub fn jam_session() -> ConversationBuilder {
    ConversationBuilder::new("Jam session")
        .create_time(1_700_000_000.0)
        .with_message("n1", "user", "hi", 2.0)
        .with_message("n2", "assistant", "hello", 1.0)
}
