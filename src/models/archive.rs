use crate::error::InvalidSelection;
use crate::models::Conversation;

/// Display number for an archive index: `len - index`
///
/// Display numbers are 1-based and descend from the most recent conversation
/// (index 0, display number `len`) to the oldest (display number 1).
/// Returns `None` when `index` is out of range.
pub fn display_number(len: usize, index: usize) -> Option<usize> {
    (index < len).then(|| len - index)
}

/// Inverse of [`display_number`]: `len - display_number`
///
/// Returns `None` for 0 or anything above `len`.
pub fn archive_index(len: usize, display_number: usize) -> Option<usize> {
    (1..=len).contains(&display_number).then(|| len - display_number)
}

/// A conversation as shown in listings: display number, archive index, title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedConversation {
    pub display_number: usize,
    pub index: usize,
    pub title: String,
}

/// The loaded export, most recent conversation first
///
/// Immutable once built; every derived view reads from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Archive {
    conversations: Vec<Conversation>,
}

impl Archive {
    /// Build from records in the export's stored order (oldest first); the
    /// order is reversed so index 0 is the most recent conversation
    pub fn from_export_order(mut conversations: Vec<Conversation>) -> Self {
        conversations.reverse();
        Self { conversations }
    }

    /// Build from records that are already most-recent-first
    pub fn from_recent_first(conversations: Vec<Conversation>) -> Self {
        Self { conversations }
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Conversation> {
        self.conversations.get(index)
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Conversation> {
        self.conversations.iter()
    }

    /// One title per conversation, archive order
    pub fn titles(&self) -> Vec<String> {
        self.conversations.iter().map(|c| c.title.clone()).collect()
    }

    pub fn display_number(&self, index: usize) -> Option<usize> {
        display_number(self.len(), index)
    }

    /// Resolve a user-facing display number to an archive index
    pub fn index_of(&self, display_number: usize) -> Result<usize, InvalidSelection> {
        archive_index(self.len(), display_number).ok_or(InvalidSelection::DisplayNumberOutOfRange {
            display_number,
            len: self.len(),
        })
    }

    /// Listing entry for an archive index
    pub fn listed(&self, index: usize) -> Option<ListedConversation> {
        let conversation = self.get(index)?;
        Some(ListedConversation {
            display_number: self.display_number(index)?,
            index,
            title: conversation.title.clone(),
        })
    }
}

impl<'a> IntoIterator for &'a Archive {
    type Item = &'a Conversation;
    type IntoIter = std::slice::Iter<'a, Conversation>;

    fn into_iter(self) -> Self::IntoIter {
        self.conversations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archive_of(titles: &[&str]) -> Archive {
        Archive::from_export_order(titles.iter().map(|t| Conversation::new(*t)).collect())
    }

    #[test]
    fn test_display_number_bijection() {
        for len in 0..20 {
            let mut seen = Vec::new();
            for index in 0..len {
                let number = display_number(len, index).unwrap();
                assert!((1..=len).contains(&number));
                assert_eq!(archive_index(len, number), Some(index));
                seen.push(number);
            }
            seen.sort_unstable();
            assert_eq!(seen, (1..=len).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_display_number_out_of_range() {
        assert_eq!(display_number(3, 3), None);
        assert_eq!(display_number(0, 0), None);
        assert_eq!(archive_index(3, 0), None);
        assert_eq!(archive_index(3, 4), None);
        assert_eq!(archive_index(0, 1), None);
    }

    #[test]
    fn test_from_export_order_reverses() {
        let archive = archive_of(&["oldest", "middle", "newest"]);
        assert_eq!(archive.titles(), vec!["newest", "middle", "oldest"]);
        assert_eq!(archive.display_number(0), Some(3));
        assert_eq!(archive.display_number(2), Some(1));
    }

    #[test]
    fn test_index_of_reports_invalid_selection() {
        let archive = archive_of(&["a", "b"]);
        assert_eq!(archive.index_of(2), Ok(0));
        assert_eq!(archive.index_of(1), Ok(1));
        assert_eq!(
            archive.index_of(3),
            Err(InvalidSelection::DisplayNumberOutOfRange { display_number: 3, len: 2 })
        );
    }

    #[test]
    fn test_listed() {
        let archive = archive_of(&["first", "second"]);
        let listed = archive.listed(0).unwrap();
        assert_eq!(listed, ListedConversation { display_number: 2, index: 0, title: "second".into() });
        assert!(archive.listed(2).is_none());
    }
}
