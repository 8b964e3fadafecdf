use crate::models::{ListedConversation, display_number};

/// Title words that mark a conversation as unfinished
pub const FOLLOW_UP_MARKERS: [&str; 5] = ["idea", "draft", "request", "todo", "plan"];

/// Conversations whose title suggests unfinished work, in archive order
///
/// Case-insensitive substring match against [`FOLLOW_UP_MARKERS`].
pub fn find_follow_ups<S: AsRef<str>>(titles: &[S]) -> Vec<ListedConversation> {
    let len = titles.len();
    titles
        .iter()
        .enumerate()
        .filter(|(_, title)| {
            let lowered = title.as_ref().to_lowercase();
            FOLLOW_UP_MARKERS.iter().any(|marker| lowered.contains(marker))
        })
        .filter_map(|(index, title)| {
            Some(ListedConversation {
                display_number: display_number(len, index)?,
                index,
                title: title.as_ref().to_string(),
            })
        })
        .collect()
}
