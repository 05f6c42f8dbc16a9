//! Construction options shared by both widgets.

use super::catalog::DEFAULT_THEME;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOptions {
    /// Initial theme id.
    pub theme: String,
    /// Title shown in the widget border.
    pub title: String,
    /// Theme selector row and the Ctrl+T shortcut.
    pub theme_changing: bool,
    /// Click-to-select / double-click-to-execute.
    pub mouse_support: bool,
    /// Keyboard navigation.  When off, the menu ignores every key.
    pub keyboard_shortcuts: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            title: "Cyberpunk Terminal".to_string(),
            theme_changing: true,
            mouse_support: true,
            keyboard_shortcuts: true,
        }
    }
}

impl WidgetOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }
}
