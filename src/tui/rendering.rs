use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{Focus, MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::models::{Archive, ListedConversation, Role};
use crate::search::{HighlightTerm, split_highlighted};
use crate::session::ConversationView;
use crate::utils::strip_ansi_codes;
use crate::utils::timestamps::{format_relative_to, from_epoch_seconds};

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const EMERALD: Color = Color::Rgb(16, 185, 129);
const SURFACE: Color = Color::Rgb(24, 24, 27);
const RED: Color = Color::Rgb(239, 68, 68);
const BLUE: Color = Color::Rgb(96, 165, 250);
const AMBER: Color = Color::Rgb(251, 191, 36);

/// Everything a frame needs, borrowed from the app
pub struct RenderState<'a> {
    pub archive: &'a Archive,
    pub results: &'a [ListedConversation],
    pub selected_idx: usize,
    pub preview: Option<&'a ConversationView>,
    pub preview_scroll: u16,
    pub search_query: &'a str,
    pub focus: Focus,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_search_box(frame, layout.search_area, state);
    render_results_list(frame, layout.results_area, state);
    render_preview(frame, layout.preview_area, state);
    render_status_bar(frame, layout.status_area, state);
}

fn border_style(focused: bool) -> Style {
    if focused { Style::default().fg(EMERALD) } else { Style::default().fg(MUTED) }
}

fn render_search_box(frame: &mut Frame, area: Rect, state: &RenderState) {
    let content = if state.search_query.is_empty() {
        Line::from(Span::styled("Type to search, Enter to run", Style::default().fg(MUTED)))
    } else {
        Line::from(Span::raw(state.search_query))
    };

    let paragraph = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).border_style(border_style(false)).title(" Search "));
    frame.render_widget(paragraph, area);
}

fn render_results_list(frame: &mut Frame, area: Rect, state: &RenderState) {
    let now = Utc::now();
    let items: Vec<ListItem> = state
        .results
        .iter()
        .map(|item| {
            let when = state
                .archive
                .get(item.index)
                .and_then(|c| c.create_time)
                .and_then(from_epoch_seconds)
                .map(|ts| format_relative_to(&ts, &now))
                .unwrap_or_default();

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>5} ", item.display_number), Style::default().fg(MUTED)),
                Span::raw(strip_ansi_codes(&item.title).into_owned()),
                Span::styled(format!("  {when}"), Style::default().fg(MUTED)),
            ]))
        })
        .collect();

    let title = format!(" Conversations ({}) ", state.results.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(state.focus == Focus::Results))
                .title(title),
        )
        .highlight_style(Style::default().fg(BRIGHT).bg(EMERALD).add_modifier(Modifier::BOLD));

    let mut list_state = ListState::default();
    if !state.results.is_empty() {
        list_state.select(Some(state.selected_idx.min(state.results.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Split one line of message text into spans, emphasizing search matches
fn highlighted_line<'a>(text: &'a str, term: Option<&HighlightTerm>) -> Line<'a> {
    let spans: Vec<Span> = split_highlighted(text, term)
        .into_iter()
        .map(|(piece, matched)| {
            if matched {
                Span::styled(piece, Style::default().fg(EMERALD).add_modifier(Modifier::BOLD))
            } else {
                Span::raw(piece)
            }
        })
        .collect();
    Line::from(spans)
}

pub(crate) fn preview_text(view: &ConversationView) -> Text<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("#{} {}", view.display_number, strip_ansi_codes(&view.title)),
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if view.transcript.is_empty() {
        lines.push(Line::from(Span::styled("No messages", Style::default().fg(MUTED))));
    }

    for message in &view.transcript {
        let color = match message.role {
            Role::Assistant => BLUE,
            _ => AMBER,
        };
        lines.push(Line::from(Span::styled(
            message.role.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));

        let text = strip_ansi_codes(&message.text);
        for line in text.lines() {
            let owned: Vec<Span<'static>> = highlighted_line(line, view.highlight.as_ref())
                .spans
                .into_iter()
                .map(|span| Span::styled(span.content.into_owned(), span.style))
                .collect();
            lines.push(Line::from(owned));
        }
        lines.push(Line::from(""));
    }

    Text::from(lines)
}

fn render_preview(frame: &mut Frame, area: Rect, state: &RenderState) {
    let content = match state.preview {
        Some(view) => preview_text(view),
        None => Text::from("No conversation selected"),
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(state.focus == Focus::Preview))
                .title(" Transcript "),
        )
        .wrap(Wrap { trim: false })
        .scroll((state.preview_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let base = Style::default().fg(BRIGHT).bg(SURFACE);

    let (text, style) = if let Some(status) = state.status_message {
        let style = match status.message_type {
            MessageType::Success => Style::default().fg(EMERALD).bg(SURFACE),
            MessageType::Error => Style::default().fg(RED).bg(SURFACE),
        };
        (format!(" {} ", status.text), style)
    } else if state.results.is_empty() {
        (" No conversations | Esc: clear | Ctrl+C: quit ".to_string(), base)
    } else {
        let mut parts = vec![];
        if state.results.len() < state.archive.len() {
            parts.push(format!("{}/{} matches", state.results.len(), state.archive.len()));
        } else {
            parts.push(format!("{} conversations", state.archive.len()));
        }
        parts.push(format!("item {}/{}", state.selected_idx + 1, state.results.len()));
        parts.push(match state.focus {
            Focus::Results => "Tab: preview".to_string(),
            Focus::Preview => "Tab: list".to_string(),
        });
        parts.push("Enter: search".to_string());
        parts.push("Ctrl+R: random".to_string());
        parts.push("Ctrl+Y: copy".to_string());
        parts.push("Ctrl+C: quit".to_string());
        (format!(" {} ", parts.join(" | ")), base)
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
