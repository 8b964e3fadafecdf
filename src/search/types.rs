use crate::models::ListedConversation;
use crate::search::HighlightTerm;

/// Result of running a query against the archive
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Query was blank; no search was performed
    Skipped,
    Completed {
        term: HighlightTerm,
        /// Archive order
        hits: Vec<ListedConversation>,
    },
}

impl SearchOutcome {
    pub fn hits(&self) -> &[ListedConversation] {
        match self {
            SearchOutcome::Skipped => &[],
            SearchOutcome::Completed { hits, .. } => hits,
        }
    }

    /// Term to pass to the next view so matches can be emphasized
    pub fn highlight(&self) -> Option<&HighlightTerm> {
        match self {
            SearchOutcome::Skipped => None,
            SearchOutcome::Completed { term, .. } => Some(term),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hits().is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits().len()
    }
}
