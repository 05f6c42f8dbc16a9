//! Whole-frame rendering: both panes plus the status bar.

use ratatui::{widgets::Paragraph, Frame};

use crate::ui::{
    console_view::ConsoleView, layout::AppLayout, menu_view::MenuView, theme::skin,
};

use super::state::{AppState, PaneFocus};

pub fn draw(frame: &mut Frame, state: &AppState) {
    let layout = AppLayout::from_area(frame.area(), state.config.split_pct);

    frame.render_widget(
        MenuView::new(&state.menu).focused(state.focus == PaneFocus::Menu),
        layout.menu_area,
    );
    frame.render_widget(
        ConsoleView::new(&state.console, &state.catalog)
            .focused(state.focus == PaneFocus::Console),
        layout.console_area,
    );

    let text = match &state.status_message {
        Some(msg) => format!(" {msg}"),
        None => format!(" {}", state.config.status_bar_hint()),
    };
    frame.render_widget(
        Paragraph::new(text).style(skin(state.menu.theme()).status_bar_style()),
        layout.status_area,
    );
}
