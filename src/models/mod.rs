//! Data models for conversation archive exports.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`Conversation`], [`Node`], [`Message`] - Records as they appear in the export
//! - [`Archive`] - The loaded export, most recent conversation first
//! - [`Transcript`] - Time-ordered messages reconstructed from a node mapping
//! - [`ArchiveSummary`] and friends - Derived keyword, category, and duplicate views
//!
//! Export records are deserialized leniently: the custom deserializers in
//! `parsers::deserializers` default missing timestamps, null messages, and
//! odd content fragments instead of failing.

pub mod archive;
pub mod conversation;
pub mod summary;
pub mod transcript;

pub use archive::{Archive, ListedConversation, archive_index, display_number};
pub use conversation::{ContentPart, Conversation, DEFAULT_TITLE, Message, Node, NodeId, Role};
pub use summary::{
    ArchiveSummary, CategorizedTitle, Category, CategoryBucket, CategoryIndex, KeywordCount,
};
pub use transcript::{Transcript, TranscriptMessage};
