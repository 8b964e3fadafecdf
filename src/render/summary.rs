use std::io::{self, Write};

use crate::models::{ArchiveSummary, CategoryIndex};
use crate::render::{ConsoleRenderer, Tone};
use crate::utils::strip_ansi_codes;

/// Standing themes listed on the dashboard
pub const THEMES: [&str; 5] =
    ["Music Rights", "Resume Tailoring", "Job Apps", "Gratitude Routines", "Python Scripts"];

/// Repetition panel shows at most this many titles
const MAX_REPETITIONS_SHOWN: usize = 5;

impl ConsoleRenderer {
    pub fn render_banner<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.paint("Chat Archive Explorer", Tone::Heading))?;
        writeln!(out, "Your personal archive map and self-reflection engine.")?;
        writeln!(out)
    }

    /// Dashboard panels, top to bottom
    pub fn render_summary<W: Write>(&self, out: &mut W, summary: &ArchiveSummary) -> io::Result<()> {
        writeln!(out, "{}", self.heading("Archive Size"))?;
        writeln!(
            out,
            "{} total conversations as of {}",
            self.paint(&summary.total.to_string(), Tone::Accent),
            summary.generated_on.format("%A, %B %d, %Y")
        )?;
        writeln!(out)?;

        writeln!(out, "{}", self.heading("Top Keywords"))?;
        if summary.keywords.is_empty() {
            writeln!(out, "{}", self.paint("No keywords yet.", Tone::Muted))?;
        }
        for keyword in &summary.keywords {
            writeln!(out, "{}: {}", self.paint(&strip_ansi_codes(&keyword.word), Tone::Accent), keyword.count)?;
        }
        writeln!(out)?;

        writeln!(out, "{}", self.heading("Top Topics"))?;
        for bucket in &summary.categories.buckets {
            writeln!(out, "{}: {}", self.paint(bucket.category.label(), Tone::Accent), bucket.len())?;
        }
        writeln!(out)?;

        writeln!(out, "{}", self.heading("Themes"))?;
        for theme in THEMES {
            writeln!(out, "{theme}")?;
        }
        writeln!(out)?;

        writeln!(out, "{}", self.heading("Repetition Detection"))?;
        if summary.repetitions.is_empty() {
            writeln!(out, "No repeated titles detected.")?;
        }
        for title in summary.repetitions.iter().take(MAX_REPETITIONS_SHOWN) {
            writeln!(out, "{}", strip_ansi_codes(title))?;
        }
        writeln!(out)?;

        writeln!(out, "{}", self.heading("Joy of Rediscovery"))?;
        for title in &summary.rediscover {
            writeln!(out, "{}", strip_ansi_codes(title))?;
        }
        Ok(())
    }

    /// Theme menu: one `[A] Label (count)` line per bucket
    pub fn render_theme_menu<W: Write>(&self, out: &mut W, categories: &CategoryIndex) -> io::Result<()> {
        if categories.is_empty() {
            return writeln!(out, "{}", self.paint("No themes: the archive is empty.", Tone::Muted));
        }

        writeln!(out, "Themes to explore:")?;
        for bucket in &categories.buckets {
            let key = format!("[{}]", bucket.key.to_ascii_uppercase());
            writeln!(out, "{} {} ({})", self.paint(&key, Tone::Accent), bucket.category, bucket.len())?;
        }
        Ok(())
    }
}
