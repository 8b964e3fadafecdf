//! Transcript reconstruction.
//!
//! Exports store a conversation as a mapping of node id to node, in no
//! meaningful order. Reconstruction orders nodes by `create_time` (missing
//! timestamps first, as 0), drops structural nodes without a message, and
//! flattens each message's content fragments into one display string.

use crate::models::{ContentPart, Conversation, Message, Transcript, TranscriptMessage};

/// Text substituted for a message that carries no content fragments
pub const NO_CONTENT_PLACEHOLDER: &str = "No content available";

/// Rebuild the ordered transcript of a conversation
///
/// Pure function of its input: calling it twice on the same conversation
/// yields identical transcripts. Nodes with equal timestamps keep their
/// mapping order (stable sort).
pub fn reconstruct(conversation: &Conversation) -> Transcript {
    let mut nodes: Vec<_> = conversation.mapping.iter().collect();
    nodes.sort_by(|(_, a), (_, b)| a.sort_key().total_cmp(&b.sort_key()));

    let messages = nodes
        .into_iter()
        .filter_map(|(id, node)| {
            node.message.as_ref().map(|message| TranscriptMessage {
                node_id: id.clone(),
                role: message.role,
                text: flatten_message(message),
                create_time: node.create_time,
            })
        })
        .collect();

    Transcript { messages }
}

/// Join a message's fragments with single spaces
///
/// Text fragments are used verbatim, structured fragments are serialized as
/// compact JSON, anything else is dropped. A message with no fragments
/// flattens to [`NO_CONTENT_PLACEHOLDER`].
pub fn flatten_message(message: &Message) -> String {
    let parts = match message.parts.as_deref() {
        Some(parts) if !parts.is_empty() => parts,
        _ => return NO_CONTENT_PLACEHOLDER.to_string(),
    };

    let fragments: Vec<String> = parts
        .iter()
        .filter_map(|part| match part {
            ContentPart::Text(text) => Some(text.clone()),
            ContentPart::Structured(map) => serde_json::to_string(map).ok(),
            ContentPart::Unsupported => None,
        })
        .collect();

    fragments.join(" ")
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value, json};

    use super::*;
    use crate::models::{Node, Role};

    fn jam_session() -> Conversation {
        serde_json::from_value(json!({
            "title": "Jam session",
            "mapping": {
                "n1": {"create_time": 2, "message": {"author": {"role": "user"}, "content": {"parts": ["hi"]}}},
                "n2": {"create_time": 1, "message": {"author": {"role": "assistant"}, "content": {"parts": ["hello"]}}}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_reconstruct_orders_by_timestamp() {
        let transcript = reconstruct(&jam_session());

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages[0].role, Role::Assistant);
        assert_eq!(transcript.messages[0].text, "hello");
        assert_eq!(transcript.messages[1].role, Role::User);
        assert_eq!(transcript.messages[1].text, "hi");
    }

    #[test]
    fn test_reconstruct_is_idempotent() {
        let conversation = jam_session();
        assert_eq!(reconstruct(&conversation), reconstruct(&conversation));
    }

    #[test]
    fn test_missing_timestamp_sorts_first() {
        let conversation = Conversation::new("t")
            .with_node("late", Node::new(Some(5.0), Some(Message::text(Role::User, &["late"]))))
            .with_node("untimed", Node::new(None, Some(Message::text(Role::System, &["untimed"]))))
            .with_node("zero", Node::new(Some(0.0), Some(Message::text(Role::User, &["zero"]))));

        let texts: Vec<_> = reconstruct(&conversation).messages.into_iter().map(|m| m.text).collect();
        assert_eq!(texts, vec!["untimed", "zero", "late"]);
    }

    #[test]
    fn test_equal_timestamps_keep_mapping_order() {
        let conversation = Conversation::new("t")
            .with_node("b", Node::new(Some(1.0), Some(Message::text(Role::User, &["first"]))))
            .with_node("a", Node::new(Some(1.0), Some(Message::text(Role::User, &["second"]))))
            .with_node("c", Node::new(Some(1.0), Some(Message::text(Role::User, &["third"]))));

        let ids: Vec<_> = reconstruct(&conversation).messages.into_iter().map(|m| m.node_id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_nodes_without_message_are_dropped() {
        let conversation = Conversation::new("t")
            .with_node("root", Node::default())
            .with_node("n1", Node::new(Some(1.0), Some(Message::text(Role::User, &["hi"]))));

        let transcript = reconstruct(&conversation);
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages[0].node_id, "n1");
    }

    #[test]
    fn test_empty_mapping_yields_empty_transcript() {
        assert!(reconstruct(&Conversation::new("empty")).is_empty());
    }

    #[test]
    fn test_flatten_joins_text_and_structured() {
        let mut payload = Map::new();
        payload.insert("asset".to_string(), Value::String("file-1".to_string()));
        let message = Message::new(
            Role::Assistant,
            vec![
                ContentPart::Text("look:".to_string()),
                ContentPart::Structured(payload),
                ContentPart::Unsupported,
                ContentPart::Text("done".to_string()),
            ],
        );

        assert_eq!(flatten_message(&message), r#"look: {"asset":"file-1"} done"#);
    }

    #[test]
    fn test_flatten_placeholder_for_missing_or_empty_parts() {
        let missing = Message { role: Role::User, parts: None };
        assert_eq!(flatten_message(&missing), NO_CONTENT_PLACEHOLDER);

        let empty = Message::new(Role::User, vec![]);
        assert_eq!(flatten_message(&empty), NO_CONTENT_PLACEHOLDER);
    }

    #[test]
    fn test_flatten_only_unsupported_fragments_is_empty() {
        let message = Message::new(Role::User, vec![ContentPart::Unsupported, ContentPart::Unsupported]);
        assert_eq!(flatten_message(&message), "");
    }

    #[test]
    fn test_malformed_message_renders_placeholder() {
        let conversation: Conversation = serde_json::from_value(json!({
            "title": "t",
            "mapping": {"n": {"create_time": 1, "message": 17}}
        }))
        .unwrap();

        let transcript = reconstruct(&conversation);
        assert_eq!(transcript.messages[0].role, Role::Unknown);
        assert_eq!(transcript.messages[0].text, NO_CONTENT_PLACEHOLDER);
    }
}
