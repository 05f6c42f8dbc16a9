//! Input handling: maps key/mouse events to widget operations.

use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::core::MenuInput;
use crate::ui::layout::AppLayout;
use crate::ui::menu_view::MenuGeometry;
use crate::ui::theme::skin;

use super::state::{AppState, PaneFocus};

/// Console lines moved per mouse-wheel notch.
const WHEEL_LINES: usize = 3;

/// Process a key event, dispatching on the focused pane.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    let theme_before = state.menu.theme().to_string();
    state.clear_status();
    dispatch_key(state, key);
    report(state, &theme_before);
}

/// Put the outcome of the last input on the status bar: the themed
/// execution line when an action ran, otherwise the new theme's name.
fn report(state: &mut AppState, theme_before: &str) {
    if let Some(name) = state.menu.take_executed() {
        let line = skin(state.menu.theme()).execution_line(&name);
        state.set_status(line);
    } else if state.menu.theme() != theme_before {
        let name = state.menu.descriptor().display_name.clone();
        state.set_status(format!("Theme: {name}"));
    }
}

fn dispatch_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of focus.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.config.match_key(key) == Some(Action::SwitchFocus) {
        state.set_focus(state.focus.toggle());
        return;
    }

    match state.focus {
        PaneFocus::Menu => handle_menu_key(state, key),
        PaneFocus::Console => handle_console_key(state, key),
    }
}

// ── Menu pane (configurable bindings) ───────────────────────────

fn handle_menu_key(state: &mut AppState, key: KeyEvent) {
    let input = match state.config.match_key(key) {
        Some(Action::MoveUp) => MenuInput::Up,
        Some(Action::MoveDown) => MenuInput::Down,
        Some(Action::Execute) => MenuInput::Enter,
        Some(Action::CycleTheme) => MenuInput::CycleTheme,
        Some(Action::Quit) => {
            state.should_quit = true;
            return;
        }
        Some(Action::SwitchFocus) => return,
        None => match digit(key) {
            Some(n) => MenuInput::Digit(n),
            None => return,
        },
    };

    state.menu.handle_input(input);
}

/// Plain `0`-`9` as an entry index.
fn digit(key: KeyEvent) -> Option<usize> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => c.to_digit(10).map(|d| d as usize),
        _ => None,
    }
}

// ── Console pane ────────────────────────────────────────────────

/// The console gets first refusal; keys it ignores fall through to the
/// global bindings that don't clash with typing.
fn handle_console_key(state: &mut AppState, key: KeyEvent) {
    if state.console.handle_key(key).is_consumed() {
        return;
    }
    if state.config.match_key(key) == Some(Action::CycleTheme)
        && state.config.widget.theme_changing
    {
        state.menu.cycle_theme();
        let id = state.menu.theme().to_string();
        state.console.set_theme(&id);
    }
}

// ── Mouse ───────────────────────────────────────────────────────

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if !state.config.widget.mouse_support {
        return;
    }

    let theme_before = state.menu.theme().to_string();
    if matches!(mouse.kind, MouseEventKind::Down(_)) {
        state.clear_status();
    }

    let layout = AppLayout::from_area(state.terminal_area, state.config.split_pct);
    let (col, row) = (mouse.column, mouse.row);
    let in_menu = AppLayout::hit(layout.menu_area, col, row);
    let in_console = AppLayout::hit(layout.console_area, col, row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if in_menu => {
            state.set_focus(PaneFocus::Menu);
            let geometry = MenuGeometry::compute(layout.menu_area, &state.menu);
            if let Some(id) = geometry.theme_at(&state.menu, col, row) {
                state.menu.click_theme(id);
            } else if let Some(index) = geometry.entry_at(&state.menu, col, row) {
                let window = Duration::from_millis(state.config.double_click_ms);
                state.menu.click_entry(index, Instant::now(), window);
            }
        }
        MouseEventKind::Down(MouseButton::Left) if in_console => {
            state.set_focus(PaneFocus::Console);
        }
        MouseEventKind::ScrollUp if in_console => state.console.scroll_up(WHEEL_LINES),
        MouseEventKind::ScrollDown if in_console => state.console.scroll_down(WHEEL_LINES),
        MouseEventKind::ScrollUp if in_menu => {
            state.menu.handle_input(MenuInput::Up);
        }
        MouseEventKind::ScrollDown if in_menu => {
            state.menu.handle_input(MenuInput::Down);
        }
        _ => {}
    }
    report(state, &theme_before);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::layout::Rect;

    use crate::core::{ThemeCatalog, ThemedConsole, ThemedMenu, WidgetOptions};

    fn state() -> AppState {
        let catalog = Arc::new(ThemeCatalog::fallback());
        let mut menu = ThemedMenu::new(Arc::clone(&catalog), WidgetOptions::default());
        menu.add_action("deploy", "Deploy", "Ship it", "deploy")
            .add_separator("TOOLS")
            .add_action("build", "Build", "Compile", "build")
            .add_exit("Exit", "Leave");
        let console = ThemedConsole::new(&WidgetOptions::default());
        let mut s = AppState::new(catalog, menu, console, Default::default());
        s.resize(160, 50);
        s
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn tab_switches_focus() {
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Tab));
        assert_eq!(s.focus, PaneFocus::Console);
        handle_key(&mut s, press(KeyCode::Tab));
        assert_eq!(s.focus, PaneFocus::Menu);
    }

    #[test]
    fn menu_keys_navigate_and_execute() {
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Down));
        handle_key(&mut s, press(KeyCode::Down));
        assert_eq!(s.menu.selected_index(), 2);
        handle_key(&mut s, press(KeyCode::Enter));
        assert!(s.menu.output().iter().any(|l| l == "Executing: Build"));
    }

    #[test]
    fn digits_run_the_entry_at_that_index() {
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Char('3')));
        assert!(s.quitting());
    }

    #[test]
    fn ctrl_t_cycles_and_reports_theme() {
        let mut s = state();
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert_eq!(s.menu.theme(), "matrix");
        assert_eq!(s.status_message.as_deref(), Some("Theme: Matrix"));
    }

    #[test]
    fn executing_an_action_shows_the_themed_line() {
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Enter));
        assert_eq!(s.status_message.as_deref(), Some("⚡ EXECUTING: Deploy"));
        assert!(s.menu.output().iter().any(|l| l == "Executing: Deploy"));

        handle_key(&mut s, KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        handle_key(&mut s, press(KeyCode::Enter));
        assert_eq!(s.status_message.as_deref(), Some("≋ EXECUTING: Deploy"));
    }

    #[test]
    fn status_clears_on_the_next_key() {
        let mut s = state();
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert!(s.status_message.is_some());
        handle_key(&mut s, press(KeyCode::Down));
        assert_eq!(s.status_message, None);
    }

    #[test]
    fn console_ctrl_t_reports_theme() {
        let mut s = state();
        s.set_focus(PaneFocus::Console);
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert_eq!(s.status_message.as_deref(), Some("Theme: Matrix"));
    }

    #[test]
    fn theme_button_click_reports_theme() {
        let mut s = state();
        let layout = AppLayout::from_area(s.terminal_area, s.config.split_pct);
        let selector = MenuGeometry::compute(layout.menu_area, &s.menu)
            .selector
            .unwrap();
        let caption = " THEMES [CTRL+T] ".chars().count() as u16;
        handle_mouse(&mut s, click(selector.x + caption + 7, selector.y));
        assert_eq!(s.menu.theme(), "matrix");
        assert_eq!(s.status_message.as_deref(), Some("Theme: Matrix"));

        handle_mouse(&mut s, click(layout.console_area.x + 2, layout.console_area.y + 2));
        assert_eq!(s.status_message, None);
    }

    #[test]
    fn double_click_shows_the_themed_line() {
        let mut s = state();
        let layout = AppLayout::from_area(s.terminal_area, s.config.split_pct);
        let list = MenuGeometry::compute(layout.menu_area, &s.menu).list;
        handle_mouse(&mut s, click(list.x + 2, list.y + 2));
        assert_eq!(s.status_message, None);
        handle_mouse(&mut s, click(list.x + 2, list.y + 2));
        assert_eq!(s.status_message.as_deref(), Some("⚡ EXECUTING: Build"));
    }

    #[test]
    fn console_focus_types_instead_of_quitting() {
        let mut s = state();
        s.set_focus(PaneFocus::Console);
        for c in "quit".chars() {
            handle_key(&mut s, press(KeyCode::Char(c)));
        }
        assert!(!s.quitting());
        assert_eq!(s.console.input(), "quit");
        assert_eq!(s.menu.selected_index(), 0);
    }

    #[test]
    fn console_ctrl_t_falls_through_to_both_widgets() {
        let mut s = state();
        s.set_focus(PaneFocus::Console);
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert_eq!(s.menu.theme(), "matrix");
        assert_eq!(s.console.theme(), "matrix");
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut s = state();
        s.set_focus(PaneFocus::Console);
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(s.should_quit);
    }

    #[test]
    fn clicks_select_then_execute() {
        let mut s = state();
        let layout = AppLayout::from_area(s.terminal_area, s.config.split_pct);
        let geometry = MenuGeometry::compute(layout.menu_area, &s.menu);
        let row = geometry.list.y + 2;
        let col = geometry.list.x + 2;

        handle_mouse(&mut s, click(col, row));
        assert_eq!(s.menu.selected_index(), 2);
        assert!(!s.menu.output().iter().any(|l| l == "Executing: Build"));

        handle_mouse(&mut s, click(col, row));
        assert!(s.menu.output().iter().any(|l| l == "Executing: Build"));
    }

    #[test]
    fn clicking_the_console_focuses_it() {
        let mut s = state();
        let layout = AppLayout::from_area(s.terminal_area, s.config.split_pct);
        let area: Rect = layout.console_area;
        handle_mouse(&mut s, click(area.x + 2, area.y + 2));
        assert_eq!(s.focus, PaneFocus::Console);
    }

    #[test]
    fn mouse_disabled_ignores_clicks() {
        let mut s = state();
        s.config.widget.mouse_support = false;
        let layout = AppLayout::from_area(s.terminal_area, s.config.split_pct);
        let area = layout.console_area;
        handle_mouse(&mut s, click(area.x + 2, area.y + 2));
        assert_eq!(s.focus, PaneFocus::Menu);
    }
}
