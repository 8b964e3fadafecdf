//! Copying a conversation out of the browser as plain text

use anyhow::{Context, Result, bail};
use arboard::Clipboard;
use tracing::debug;

use crate::session::ConversationView;

/// Maximum clipboard payload (10 MiB)
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Destination for copied text (the system clipboard outside tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")
    }
}

fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Cannot copy empty text to clipboard");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        bail!("Text too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_SIZE);
    }

    Ok(())
}

fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)?;
    debug!(bytes = text.len(), "copied to clipboard");
    Ok(())
}

/// Plain-text export of a conversation
///
/// The title on the first line, then one `Role: text` block per message,
/// separated by blank lines.
pub fn transcript_to_plain_text(view: &ConversationView) -> String {
    let mut text = view.title.clone();
    for message in &view.transcript {
        text.push_str("\n\n");
        text.push_str(&format!("{}: {}", message.role, message.text));
    }
    text.push('\n');
    text
}

/// Copy text to the system clipboard
///
/// Validation runs before the clipboard is opened, so empty or oversized
/// text fails the same way on headless machines.
///
/// # Errors
/// Returns error if:
/// - Text is empty
/// - Text is larger than 10 MiB
/// - The system clipboard is unavailable or refuses the write
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    validate_clipboard_text(text)?;
    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(text, &mut clipboard)
}
