//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::sync::Arc;

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{ThemeCatalog, ThemedConsole, ThemedMenu};

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneFocus {
    #[default]
    Menu,
    Console,
}

impl PaneFocus {
    pub fn toggle(self) -> Self {
        match self {
            PaneFocus::Menu => PaneFocus::Console,
            PaneFocus::Console => PaneFocus::Menu,
        }
    }
}

/// Top-level application state.
pub struct AppState {
    pub catalog: Arc<ThemeCatalog>,
    pub menu: ThemedMenu,
    pub console: ThemedConsole,
    /// User-configurable keybindings and widget options.
    pub config: AppConfig,
    pub focus: PaneFocus,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar instead of the
    /// key hints.
    pub status_message: Option<String>,
    /// Last known terminal size, for mouse hit-testing.
    pub terminal_area: Rect,
    /// Host-level changes (focus, resize, status) that need a repaint.
    pub needs_redraw: bool,
}

impl AppState {
    pub fn new(
        catalog: Arc<ThemeCatalog>,
        menu: ThemedMenu,
        console: ThemedConsole,
        config: AppConfig,
    ) -> Self {
        Self {
            catalog,
            menu,
            console,
            config,
            focus: PaneFocus::default(),
            should_quit: false,
            status_message: None,
            terminal_area: Rect::default(),
            needs_redraw: true,
        }
    }

    pub fn set_focus(&mut self, focus: PaneFocus) {
        if self.focus != focus {
            self.focus = focus;
            self.needs_redraw = true;
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.needs_redraw = true;
    }

    /// Drop the status message so the key hints show again.
    pub fn clear_status(&mut self) {
        if self.status_message.take().is_some() {
            self.needs_redraw = true;
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_area = Rect::new(0, 0, width, height);
        self.needs_redraw = true;
    }

    /// Collect pending repaint requests from both widgets and the host.
    /// Returns `true` when a frame should be drawn.
    pub fn take_redraw(&mut self) -> bool {
        let menu = self.menu.take_redraw();
        let console = self.console.take_redraw();
        let host = std::mem::take(&mut self.needs_redraw);
        menu.merge(console).is_pending() || host
    }

    /// Quit once either the host or a menu action has asked for it.
    pub fn quitting(&self) -> bool {
        self.should_quit || self.menu.quit_requested()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WidgetOptions;

    fn state() -> AppState {
        let catalog = Arc::new(ThemeCatalog::fallback());
        let menu = ThemedMenu::new(Arc::clone(&catalog), WidgetOptions::default());
        let console = ThemedConsole::new(&WidgetOptions::default());
        AppState::new(catalog, menu, console, AppConfig::default())
    }

    #[test]
    fn redraw_requests_are_drained() {
        let mut s = state();
        assert!(s.take_redraw());
        assert!(!s.take_redraw());

        s.console.log("hello");
        assert!(s.take_redraw());
        assert!(!s.take_redraw());

        s.set_focus(PaneFocus::Console);
        assert!(s.take_redraw());
        s.set_focus(PaneFocus::Console);
        assert!(!s.take_redraw());
    }

    #[test]
    fn clearing_status_requests_a_redraw_once() {
        let mut s = state();
        s.take_redraw();
        s.clear_status();
        assert!(!s.take_redraw());
        s.set_status("Theme: Tron");
        s.take_redraw();
        s.clear_status();
        assert_eq!(s.status_message, None);
        assert!(s.take_redraw());
    }

    #[test]
    fn exit_entry_quits() {
        let mut s = state();
        s.menu.add_exit("Exit", "Leave");
        assert!(!s.quitting());
        s.menu.select_by_index(0);
        assert!(s.quitting());
    }
}
