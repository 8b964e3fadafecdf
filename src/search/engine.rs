use tracing::debug;

use crate::error::SearchError;
use crate::models::{Archive, Conversation};
use crate::search::{HighlightTerm, SearchOutcome};

/// Find conversations whose title or message text contains `query`
///
/// Blank queries are skipped rather than matching everything. Hits keep
/// archive order and carry their display numbers.
pub fn search(archive: &Archive, query: &str) -> Result<SearchOutcome, SearchError> {
    let Some(term) = HighlightTerm::new(query)? else {
        debug!("blank query, search skipped");
        return Ok(SearchOutcome::Skipped);
    };

    let hits: Vec<_> = archive
        .iter()
        .enumerate()
        .filter(|(_, conversation)| conversation_matches(conversation, &term))
        .filter_map(|(index, _)| archive.listed(index))
        .collect();

    debug!(term = %term, hits = hits.len(), "search completed");

    Ok(SearchOutcome::Completed { term, hits })
}

/// Title first, then text fragments in mapping order; stops at the first match
///
/// Structured fragments are never searched.
pub fn conversation_matches(conversation: &Conversation, term: &HighlightTerm) -> bool {
    term.is_match(&conversation.title)
        || conversation
            .mapping
            .values()
            .filter_map(|node| node.message.as_ref())
            .flat_map(|message| message.text_parts())
            .any(|text| term.is_match(text))
}
