//! Layout helpers — split the terminal area into page regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// One demo column: a heading above a widget slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub heading_area: Rect,
    pub widget_area: Rect,
}

/// Host page layout: title, side-by-side widget columns, a hint line, and
/// the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub header_area: Rect,
    pub columns: Vec<ColumnLayout>,
    pub hint_area: Rect,
    pub status_area: Rect,
}

impl PageLayout {
    /// Compute the layout from the full terminal area for `column_count`
    /// equally wide columns.
    pub fn from_area(area: Rect, column_count: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // page title + gap
                Constraint::Min(3),    // widget columns
                Constraint::Length(1), // hint
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let count = column_count.max(1) as u32;
        let column_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
            .spacing(2)
            .split(rows[1]);

        let columns = column_areas
            .iter()
            .take(column_count)
            .map(|&col| {
                let parts = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Min(0)])
                    .split(col);
                ColumnLayout {
                    heading_area: parts[0],
                    widget_area: parts[1],
                }
            })
            .collect();

        Self {
            header_area: rows[0],
            columns,
            hint_area: rows[2],
            status_area: rows[3],
        }
    }
}

/// Whether `(x, y)` falls inside `rect`.
pub fn point_in_rect(rect: Rect, x: u16, y: u16) -> bool {
    rect.contains(ratatui::layout::Position { x, y })
}
