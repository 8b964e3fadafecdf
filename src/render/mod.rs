//! Plain-text console output
//!
//! Every renderer writes to an `io::Write`, so the CLI prints to stdout and
//! tests render into a `Vec<u8>`. Archive text always passes through
//! [`strip_ansi_codes`](crate::utils::strip_ansi_codes) before it is
//! written. With color disabled the output contains no escape sequences at
//! all.

mod listing;
mod summary;
mod transcript;

use crossterm::style::{Color, Stylize};

pub use summary::THEMES;

/// Visual roles used across the console output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tone {
    Heading,
    Accent,
    Muted,
    Error,
    Success,
    /// Search matches inside transcripts
    Highlight,
    Assistant,
    User,
}

/// Writes archive views to a terminal or any other sink
#[derive(Debug, Clone, Copy)]
pub struct ConsoleRenderer {
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub(crate) fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }

        match tone {
            Tone::Heading => text.with(Color::Cyan).bold().to_string(),
            Tone::Accent => text.with(Color::Yellow).bold().to_string(),
            Tone::Muted => text.with(Color::DarkGrey).to_string(),
            Tone::Error => text.with(Color::Red).to_string(),
            Tone::Success => text.with(Color::Green).to_string(),
            Tone::Highlight => text.with(Color::Green).bold().to_string(),
            Tone::Assistant => text.with(Color::Blue).bold().to_string(),
            Tone::User => text.with(Color::DarkYellow).bold().to_string(),
        }
    }

    /// Section heading with a rule underneath
    pub(crate) fn heading(&self, title: &str) -> String {
        let rule = "─".repeat(title.chars().count().max(3));
        format!("{}\n{}", self.paint(title, Tone::Heading), self.paint(&rule, Tone::Muted))
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
