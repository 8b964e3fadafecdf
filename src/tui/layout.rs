use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the browser
pub struct AppLayout {
    pub search_area: Rect,
    pub results_area: Rect,
    pub preview_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Query line on top, conversation list (60%) beside the transcript
    /// preview (40%), and a one-row status bar at the bottom
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        Self {
            search_area: rows[0],
            results_area: columns[0],
            preview_area: columns[1],
            status_area: rows[2],
        }
    }
}
