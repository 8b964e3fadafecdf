use std::io::{self, Write};

use crate::models::ListedConversation;
use crate::render::{ConsoleRenderer, Tone};
use crate::search::SearchOutcome;
use crate::session::ThemeListing;
use crate::utils::strip_ansi_codes;

impl ConsoleRenderer {
    /// Numbered list: `N. Title`
    pub fn render_listing<W: Write>(&self, out: &mut W, items: &[ListedConversation]) -> io::Result<()> {
        for item in items {
            writeln!(out, "{}. {}", item.display_number, strip_ansi_codes(&item.title))?;
        }
        Ok(())
    }

    pub fn render_search_outcome<W: Write>(&self, out: &mut W, outcome: &SearchOutcome) -> io::Result<()> {
        match outcome {
            SearchOutcome::Skipped => {
                writeln!(out, "{}", self.paint("No input detected. No search performed.", Tone::Muted))
            }
            SearchOutcome::Completed { hits, .. } if hits.is_empty() => writeln!(
                out,
                "{}",
                self.paint("No matches found. Try different or simpler terms.", Tone::Error)
            ),
            SearchOutcome::Completed { hits, .. } => {
                writeln!(out, "{}", self.paint(&format!("Found {} matches:", hits.len()), Tone::Success))?;
                self.render_listing(out, hits)
            }
        }
    }

    pub fn render_theme_listing<W: Write>(&self, out: &mut W, listing: &ThemeListing) -> io::Result<()> {
        let header = format!("{} - {} conversations found.", listing.category, listing.total);
        writeln!(out, "{}", self.heading(&header))?;
        self.render_listing(out, &listing.items)
    }

    pub fn render_follow_ups<W: Write>(&self, out: &mut W, items: &[ListedConversation]) -> io::Result<()> {
        writeln!(out, "{}", self.heading("Unfinished Ideas or Follow-Ups"))?;
        if items.is_empty() {
            return writeln!(out, "{}", self.paint("Nothing left hanging.", Tone::Muted));
        }
        self.render_listing(out, items)
    }
}
