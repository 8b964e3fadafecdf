//! Error types at the library boundary.
//!
//! - [`LoadError`] is fatal: the archive could not be read or parsed, and no
//!   partial archive is ever returned.
//! - [`InvalidSelection`] is local: a display number or category key that does
//!   not exist. Nothing is mutated; the caller reports it and carries on.
//! - [`SearchError`] only surfaces when an escaped query is too large to
//!   compile.
//!
//! Malformed nodes are not errors at all. They are defaulted during parsing
//! (see `parsers::deserializers`).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the archive
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open archive {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("archive too large: {path} ({size} bytes, max {max} bytes)")]
    TooLarge { path: PathBuf, size: u64, max: u64 },
    #[error("failed to read archive: {0}")]
    Read(#[source] io::Error),
    #[error("archive is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("unexpected archive structure: {0}")]
    Shape(#[source] serde_json::Error),
}

impl LoadError {
    /// Classify a serde_json failure: syntax/EOF vs. well-formed JSON of the wrong shape
    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Io => LoadError::Read(err.into()),
            serde_json::error::Category::Data => LoadError::Shape(err),
            serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
                LoadError::Parse(err)
            }
        }
    }
}

/// A selection that does not resolve to anything in the archive
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSelection {
    #[error("conversation number {display_number} is out of range (valid: 1-{len})")]
    DisplayNumberOutOfRange { display_number: usize, len: usize },
    #[error("no theme with key '{0}'")]
    UnknownCategory(String),
    #[error("the archive is empty")]
    EmptyArchive,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search query could not be compiled: {0}")]
    Pattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_classifies_syntax() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(LoadError::from_json(err), LoadError::Parse(_)));
    }

    #[test]
    fn test_load_error_classifies_eof() {
        let err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        assert!(matches!(LoadError::from_json(err), LoadError::Parse(_)));
    }

    #[test]
    fn test_load_error_classifies_shape() {
        let err = serde_json::from_str::<Vec<String>>("{}").unwrap_err();
        assert!(matches!(LoadError::from_json(err), LoadError::Shape(_)));
    }

    #[test]
    fn test_invalid_selection_messages() {
        let err = InvalidSelection::DisplayNumberOutOfRange { display_number: 9, len: 3 };
        assert_eq!(err.to_string(), "conversation number 9 is out of range (valid: 1-3)");
        assert_eq!(InvalidSelection::UnknownCategory("z".into()).to_string(), "no theme with key 'z'");
    }
}
