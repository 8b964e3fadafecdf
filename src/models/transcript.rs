use crate::models::{NodeId, Role};

/// A rendered message: who said it and the flattened text
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptMessage {
    pub node_id: NodeId,
    pub role: Role,
    pub text: String,
    pub create_time: Option<f64>,
}

/// Time-ordered messages of one conversation
///
/// Recomputed for every view; never stored alongside the archive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    pub messages: Vec<TranscriptMessage>,
}

impl Transcript {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TranscriptMessage> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a TranscriptMessage;
    type IntoIter = std::slice::Iter<'a, TranscriptMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
