//! Layout helpers: split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Below this width the panes stack vertically instead of side by side.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 120;

/// Screen layout: menu pane, console pane and a bottom status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub menu_area: Rect,
    pub console_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.  `split_pct` is the
    /// share given to the menu pane.
    pub fn from_area(area: Rect, split_pct: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // panes (take all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let direction = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        let pct = split_pct.clamp(20, 80);
        let panes = Layout::default()
            .direction(direction)
            .constraints([Constraint::Percentage(pct), Constraint::Percentage(100 - pct)])
            .split(rows[0]);

        Self {
            menu_area: panes[0],
            console_area: panes[1],
            status_area: rows[1],
        }
    }

    pub fn hit(area: Rect, col: u16, row: u16) -> bool {
        col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
    }
}
