use std::fmt;
use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::error::SearchError;

/// Normalized search term plus its compiled matcher
///
/// The term is trimmed and lowercased; matching is a literal,
/// case-insensitive, Unicode-aware substring match.
#[derive(Debug, Clone)]
pub struct HighlightTerm {
    term: String,
    regex: Regex,
}

impl HighlightTerm {
    /// Build a term from raw user input; `Ok(None)` when the input is blank
    pub fn new(query: &str) -> Result<Option<Self>, SearchError> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Ok(None);
        }

        let regex = RegexBuilder::new(&regex::escape(&term)).case_insensitive(true).build()?;
        Ok(Some(Self { term, regex }))
    }

    pub fn as_str(&self) -> &str {
        &self.term
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Byte ranges of every non-overlapping match, left to right
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        self.regex.find_iter(text).map(|m| m.range()).collect()
    }
}

impl PartialEq for HighlightTerm {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term
    }
}

impl Eq for HighlightTerm {}

impl fmt::Display for HighlightTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.term)
    }
}

/// Split `text` into alternating (segment, is_match) pieces for rendering
pub fn split_highlighted<'a>(text: &'a str, term: Option<&HighlightTerm>) -> Vec<(&'a str, bool)> {
    let Some(term) = term else {
        return vec![(text, false)];
    };

    let mut pieces = Vec::new();
    let mut cursor = 0;
    for span in term.find_spans(text) {
        if span.start > cursor {
            pieces.push((&text[cursor..span.start], false));
        }
        pieces.push((&text[span.clone()], true));
        cursor = span.end;
    }
    if cursor < text.len() || pieces.is_empty() {
        pieces.push((&text[cursor..], false));
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(q: &str) -> HighlightTerm {
        HighlightTerm::new(q).unwrap().unwrap()
    }

    #[test]
    fn test_blank_query_has_no_term() {
        assert!(HighlightTerm::new("").unwrap().is_none());
        assert!(HighlightTerm::new("   \t").unwrap().is_none());
    }

    #[test]
    fn test_term_is_trimmed_and_lowercased() {
        assert_eq!(term("  HeLLo ").as_str(), "hello");
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let t = term("a.b(");
        assert!(t.is_match("see A.B( here"));
        assert!(!t.is_match("axb("));
    }

    #[test]
    fn test_unicode_case_insensitive() {
        assert!(term("ÉTÉ").is_match("un été chaud"));
    }

    #[test]
    fn test_find_spans() {
        assert_eq!(term("ab").find_spans("Ab xx aB ab"), vec![0..2, 6..8, 9..11]);
        assert!(term("zz").find_spans("nothing").is_empty());
    }

    #[test]
    fn test_split_highlighted() {
        let t = term("hi");
        assert_eq!(
            split_highlighted("oh hi there HI", Some(&t)),
            vec![("oh ", false), ("hi", true), (" there ", false), ("HI", true)]
        );
        assert_eq!(split_highlighted("plain", None), vec![("plain", false)]);
        assert_eq!(split_highlighted("", Some(&t)), vec![("", false)]);
    }
}
