//! Browser state and event handling.
//!
//! The `App` owns the interaction state over a borrowed [`Session`]:
//!
//! - **Results**: the full archive listing, or the hits of the last search
//! - **Search**: typing edits the query, Enter runs it through the session's
//!   search engine and keeps its highlight term for the preview
//! - **Preview**: the selected conversation's transcript, scrollable when the
//!   preview pane has focus
//! - **Status messages**: transient feedback for searches, random jumps and
//!   clipboard copies
//! - **Dirty state tracking**: the frame is redrawn only when state changes

use std::time::{Duration, Instant};

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::debug;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::{copy_to_clipboard, transcript_to_plain_text};
use crate::models::ListedConversation;
use crate::search::{HighlightTerm, SearchOutcome};
use crate::session::{ConversationView, Session};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Longest query accepted from the keyboard (bytes)
const MAX_QUERY_LEN: usize = 256;
const PAGE_SIZE: isize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Pane that receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Results,
    Preview,
}

pub struct App<'a> {
    session: &'a Session,
    results: Vec<ListedConversation>,
    highlight: Option<HighlightTerm>,
    selected_idx: usize,
    preview: Option<ConversationView>,
    preview_scroll: u16,
    focus: Focus,
    search_query: String,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    rng: StdRng,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<'a> App<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self::with_rng(session, StdRng::from_entropy())
    }

    pub fn with_rng(session: &'a Session, rng: StdRng) -> Self {
        let mut app = Self {
            session,
            results: session.list_titles(),
            highlight: None,
            selected_idx: 0,
            preview: None,
            preview_scroll: 0,
            focus: Focus::Results,
            search_query: String::new(),
            should_quit: false,
            status_message: None,
            rng,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        };
        app.refresh_preview();
        app
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn set_error(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageType::Error, STATUS_ERROR_DURATION_MS);
    }

    fn set_success(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageType::Success, STATUS_SUCCESS_DURATION_MS);
    }

    fn check_and_clear_expired_status(&mut self) {
        let expired =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_secs(1)
            {
                terminal.draw(|f| render_ui(f, &self.render_state()))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn render_state(&self) -> RenderState<'_> {
        RenderState {
            archive: self.session.archive(),
            results: &self.results,
            selected_idx: self.selected_idx,
            preview: self.preview.as_ref(),
            preview_scroll: self.preview_scroll,
            search_query: &self.search_query,
            focus: self.focus,
            status_message: self.status_message.as_ref(),
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if self.search_query.is_empty() {
                    self.should_quit = true;
                } else {
                    self.search_query.clear();
                    self.show_all();
                }
            }
            Action::MoveUp => self.navigate(-1),
            Action::MoveDown => self.navigate(1),
            Action::PageUp => self.navigate(-PAGE_SIZE),
            Action::PageDown => self.navigate(PAGE_SIZE),
            Action::UpdateSearch(c) => self.update_search(c),
            Action::DeleteChar => self.delete_char(),
            Action::RunSearch => self.run_search(),
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Results => Focus::Preview,
                    Focus::Preview => Focus::Results,
                };
                self.needs_redraw = true;
            }
            Action::RandomConversation => self.jump_to_random(),
            Action::CopyToClipboard => self.copy_selected(),
            Action::None => {}
        }
    }

    fn navigate(&mut self, delta: isize) {
        match self.focus {
            Focus::Results => self.move_selection(delta, self.results.len()),
            Focus::Preview => self.scroll_preview(delta),
        }
    }

    fn move_selection(&mut self, delta: isize, total: usize) {
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.refresh_preview();
        }
    }

    fn scroll_preview(&mut self, delta: isize) {
        let scrolled = (self.preview_scroll as isize + delta).clamp(0, u16::MAX as isize) as u16;
        if scrolled != self.preview_scroll {
            self.preview_scroll = scrolled;
            self.needs_redraw = true;
        }
    }

    fn update_search(&mut self, c: char) {
        if self.search_query.len() < MAX_QUERY_LEN {
            self.search_query.push(c);
            self.needs_redraw = true;
        }
    }

    fn delete_char(&mut self) {
        if self.search_query.pop().is_some() {
            self.needs_redraw = true;
        }
    }

    fn run_search(&mut self) {
        match self.session.search(&self.search_query) {
            Ok(SearchOutcome::Skipped) => self.show_all(),
            Ok(SearchOutcome::Completed { term, hits }) => {
                debug!(term = %term, hits = hits.len(), "interactive search");
                let count = hits.len();
                self.results = hits;
                self.highlight = Some(term);
                self.selected_idx = 0;
                self.refresh_preview();
                if count == 0 {
                    self.set_error("✗ No matches found. Try different or simpler terms.");
                } else {
                    self.set_success(format!("✓ Found {count} matches"));
                }
            }
            Err(e) => self.set_error(format!("✗ Search error: {e}")),
        }
    }

    /// Restore the full listing and drop the highlight
    fn show_all(&mut self) {
        self.results = self.session.list_titles();
        self.highlight = None;
        self.selected_idx = 0;
        self.refresh_preview();
    }

    fn jump_to_random(&mut self) {
        match self.session.random_view(&mut self.rng) {
            Ok(view) => {
                self.search_query.clear();
                self.show_all();
                if let Some(position) =
                    self.results.iter().position(|item| item.display_number == view.display_number)
                {
                    self.selected_idx = position;
                }
                let number = view.display_number;
                self.preview = Some(view);
                self.preview_scroll = 0;
                self.set_success(format!("✓ Jumped to conversation #{number}"));
            }
            Err(e) => self.set_error(format!("✗ {e}")),
        }
    }

    fn copy_selected(&mut self) {
        let Some(view) = self.preview.as_ref() else {
            self.set_error("✗ No conversation to copy");
            return;
        };

        match copy_to_clipboard(&transcript_to_plain_text(view)) {
            Ok(()) => self.set_success("✓ Copied to clipboard"),
            Err(e) => self.set_error(format!("✗ Clipboard error: {e}")),
        }
    }

    /// Rebuild the preview for the selected result
    fn refresh_preview(&mut self) {
        self.preview = self.results.get(self.selected_idx).and_then(|item| {
            self.session.view(item.display_number, self.highlight.clone()).ok()
        });
        self.preview_scroll = 0;
        self.needs_redraw = true;
    }
}
