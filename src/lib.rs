//! Chat Archive Explorer - browse, search and reflect on an exported chat archive
//!
//! This library loads a chat export (`conversations.json`: a JSON array of
//! conversations, each a title plus a node mapping) and derives everything a
//! front end needs from it:
//!
//! - Loading the export into an [`Archive`], most recent conversation first
//! - Reconstructing time-ordered transcripts from the node mapping
//! - Keyword, category, repetition, rediscovery and follow-up views over titles
//! - Literal, case-insensitive search over titles and message text
//! - A [`Session`] facade that speaks 1-based display numbers
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use chat_archive_explorer::{Session, load_archive};
//!
//! let archive = load_archive(Path::new("conversations.json"))?;
//! let session = Session::new(archive);
//! let outcome = session.search("licensing")?;
//! for hit in outcome.hits() {
//!     println!("{}. {}", hit.display_number, hit.title);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod error;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod render;
pub mod search;
pub mod session;
pub mod transcript;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use error::{InvalidSelection, LoadError, SearchError};
pub use indexer::{SummaryOptions, build_summary};
pub use models::{Archive, Conversation, ListedConversation, Transcript};
pub use parsers::{load_archive, parse_archive};
pub use search::{HighlightTerm, SearchOutcome, search};
pub use session::{ConversationView, Session, ThemeListing};
pub use transcript::reconstruct;
pub use utils::paths::format_path_with_tilde;
