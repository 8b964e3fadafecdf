//! Derived views over archive titles
//!
//! Every derivation takes the titles in archive order (most recent first)
//! and is a pure function of them, except the rediscovery sample, which
//! draws from an injected random source.
//!
//! - **Keywords**: lowercase whitespace tokens ranked by frequency
//! - **Categories**: first-match-wins thematic buckets, largest first
//! - **Repetition**: titles that occur more than once
//! - **Sampling**: rediscovery picks and random conversation selection
//! - **Follow-ups**: titles that look like unfinished work
//! - **Builder**: the dashboard summary combining all of the above

pub mod builder;
pub mod categories;
pub mod follow_ups;
pub mod keywords;
pub mod repetition;
pub mod sampling;

pub use builder::{DEFAULT_KEYWORD_COUNT, SummaryOptions, build_summary};
pub use categories::{categorize_titles, classify};
pub use follow_ups::{FOLLOW_UP_MARKERS, find_follow_ups};
pub use keywords::keyword_analysis;
pub use repetition::detect_repetition;
pub use sampling::{REDISCOVERY_SAMPLE_SIZE, random_index, suggest_rediscovery};
