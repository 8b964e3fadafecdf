//! Session facade: the operations a front end needs, in display numbers
//!
//! Front ends speak display numbers (1-based, most recent is highest); the
//! session translates them to archive indices through
//! [`Archive::index_of`] and back through [`Archive::listed`]. Nothing here
//! mutates the archive, so an invalid selection leaves the session exactly
//! as it was.

use rand::Rng;
use tracing::debug;

use crate::error::{InvalidSelection, SearchError};
use crate::indexer::{
    SummaryOptions, build_summary, categorize_titles, find_follow_ups, random_index,
};
use crate::models::{
    Archive, ArchiveSummary, Category, CategoryIndex, ListedConversation, Transcript,
};
use crate::search::{self, HighlightTerm, SearchOutcome};
use crate::transcript::reconstruct;

/// Everything needed to render one conversation
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationView {
    pub display_number: usize,
    pub title: String,
    pub create_time: Option<f64>,
    pub transcript: Transcript,
    /// Term from the search that led here, if any
    pub highlight: Option<HighlightTerm>,
}

/// One theme opened for browsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeListing {
    pub key: char,
    pub category: Category,
    /// Size of the whole bucket, not just the listed items
    pub total: usize,
    /// Most recent first
    pub items: Vec<ListedConversation>,
}

#[derive(Debug)]
pub struct Session {
    archive: Archive,
    titles: Vec<String>,
    categories: CategoryIndex,
}

impl Session {
    pub fn new(archive: Archive) -> Self {
        let titles = archive.titles();
        let categories = categorize_titles(&titles);
        Self { archive, titles, categories }
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Every conversation, archive order (display numbers descending)
    pub fn list_titles(&self) -> Vec<ListedConversation> {
        (0..self.archive.len()).filter_map(|index| self.archive.listed(index)).collect()
    }

    /// The `count` most recent conversations
    pub fn recent(&self, count: usize) -> Vec<ListedConversation> {
        (0..count.min(self.archive.len())).filter_map(|index| self.archive.listed(index)).collect()
    }

    pub fn summary<R: Rng>(&self, options: &SummaryOptions, rng: &mut R) -> ArchiveSummary {
        build_summary(&self.titles, options, rng)
    }

    pub fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    /// Open a theme by its selection key, keeping its `limit` most recent items
    pub fn browse(&self, key: &str, limit: usize) -> Result<ThemeListing, InvalidSelection> {
        let bucket = self.categories.by_key(key)?;
        let items = bucket
            .items
            .iter()
            .take(limit)
            .filter_map(|item| self.archive.listed(item.index))
            .collect();

        Ok(ThemeListing { key: bucket.key, category: bucket.category, total: bucket.len(), items })
    }

    pub fn follow_ups(&self) -> Vec<ListedConversation> {
        find_follow_ups(&self.titles)
    }

    /// Reconstruct a conversation for display
    ///
    /// `highlight` is carried through untouched for the renderer.
    pub fn view(
        &self,
        display_number: usize,
        highlight: Option<HighlightTerm>,
    ) -> Result<ConversationView, InvalidSelection> {
        let index = self.archive.index_of(display_number)?;
        self.view_index(index, highlight)
    }

    pub fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        search::search(&self.archive, query)
    }

    /// View a uniformly random conversation, without highlight
    pub fn random_view<R: Rng>(&self, rng: &mut R) -> Result<ConversationView, InvalidSelection> {
        let index = random_index(self.archive.len(), rng).ok_or(InvalidSelection::EmptyArchive)?;
        debug!(index, "random conversation picked");
        self.view_index(index, None)
    }

    fn view_index(
        &self,
        index: usize,
        highlight: Option<HighlightTerm>,
    ) -> Result<ConversationView, InvalidSelection> {
        let out_of_range = || InvalidSelection::DisplayNumberOutOfRange {
            display_number: 0,
            len: self.archive.len(),
        };
        let conversation = self.archive.get(index).ok_or_else(out_of_range)?;
        let display_number = self.archive.display_number(index).ok_or_else(out_of_range)?;

        Ok(ConversationView {
            display_number,
            title: conversation.title.clone(),
            create_time: conversation.create_time,
            transcript: reconstruct(conversation),
            highlight,
        })
    }
}
