//! Substring search over titles and message text
//!
//! A completed search returns its [`HighlightTerm`] alongside the hits. The
//! caller passes that term explicitly into the next view so renderers can
//! emphasize matches.

pub mod engine;
pub mod highlight;
pub mod types;

pub use engine::{conversation_matches, search};
pub use highlight::{HighlightTerm, split_highlighted};
pub use types::SearchOutcome;
