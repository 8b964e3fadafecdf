use std::io::{self, Write};

use crate::models::Role;
use crate::render::{ConsoleRenderer, Tone};
use crate::search::{HighlightTerm, split_highlighted};
use crate::session::ConversationView;
use crate::utils::strip_ansi_codes;
use crate::utils::timestamps::format_absolute;

impl ConsoleRenderer {
    /// Title rule followed by one block per message
    pub fn render_conversation<W: Write>(&self, out: &mut W, view: &ConversationView) -> io::Result<()> {
        let header = format!("#{} Title: {}", view.display_number, strip_ansi_codes(&view.title));
        writeln!(out, "{}", self.heading(&header))?;

        if view.transcript.is_empty() {
            return writeln!(out, "{}", self.paint("This conversation has no messages.", Tone::Muted));
        }

        for message in &view.transcript {
            let tone = match message.role {
                Role::Assistant => Tone::Assistant,
                _ => Tone::User,
            };
            let mut label = message.role.to_string();
            if let Some(stamp) = message.create_time.and_then(format_absolute) {
                label = format!("{label} ({stamp})");
            }

            writeln!(out)?;
            writeln!(out, "{}", self.paint(&label, tone))?;
            writeln!(out, "{}", self.emphasize(&strip_ansi_codes(&message.text), view.highlight.as_ref()))?;
        }
        Ok(())
    }

    /// Paint every match of `term` in `text`
    pub fn emphasize(&self, text: &str, term: Option<&HighlightTerm>) -> String {
        split_highlighted(text, term)
            .into_iter()
            .map(|(piece, matched)| {
                if matched { self.paint(piece, Tone::Highlight) } else { piece.to_string() }
            })
            .collect()
    }
}
