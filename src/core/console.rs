//! Themed console model: scrollback log, input line and command history.
//!
//! The console interprets a tiny built-in language (`clear`, `help`,
//! `theme <name>`).  Unknown input becomes an error line; nothing here
//! returns an error.

use chrono::{Local, NaiveTime};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::options::WidgetOptions;
use super::redraw::{KeyOutcome, Redraw};

pub const HELP_TEXT: &str = "Available commands: clear, help, theme [name]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Output,
    Input,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: NaiveTime,
    pub text: String,
    pub kind: LineKind,
}

impl LogLine {
    /// `"[14:02:11] text"`
    pub fn display(&self) -> String {
        format!("[{}] {}", self.timestamp.format("%H:%M:%S"), self.text)
    }
}

#[derive(Debug)]
pub struct ThemedConsole {
    title: String,
    theme: String,
    output: Vec<LogLine>,
    history: Vec<String>,
    /// `history.len()` means "editing a new entry".
    history_cursor: usize,
    input: String,
    /// Lines scrolled up from the bottom of the log.
    scroll: usize,
    redraw: Redraw,
}

impl ThemedConsole {
    pub fn new(options: &WidgetOptions) -> Self {
        Self {
            title: options.title.clone(),
            theme: options.theme.clone(),
            output: Vec::new(),
            history: Vec::new(),
            history_cursor: 0,
            input: String::new(),
            scroll: 0,
            redraw: Redraw::Full,
        }
    }

    // ── output ──────────────────────────────────────────────────

    pub fn log(&mut self, message: impl Into<String>) {
        self.log_kind(message, LineKind::Output);
    }

    pub fn log_kind(&mut self, message: impl Into<String>, kind: LineKind) {
        self.output.push(LogLine {
            timestamp: Local::now().time(),
            text: message.into(),
            kind,
        });
        self.scroll = 0;
        self.request(Redraw::Output);
    }

    pub fn clear(&mut self) {
        self.output.clear();
        self.scroll = 0;
        self.request(Redraw::Output);
    }

    // ── commands ────────────────────────────────────────────────

    pub fn execute_command(&mut self, command: &str) {
        self.history.push(command.to_string());
        self.history_cursor = self.history.len();
        self.log_kind(format!("$ {command}"), LineKind::Input);

        let mut words = command.split_whitespace();
        match (words.next(), words.next()) {
            (Some("clear"), None) => self.clear(),
            (Some("help"), None) => self.log(HELP_TEXT),
            (Some("theme"), Some(name)) => self.set_theme(name),
            _ => self.log_kind(format!("Command not found: {command}"), LineKind::Error),
        }
    }

    /// Accepts any id; the renderer falls back to default visuals for ids
    /// it has no skin for.
    pub fn set_theme(&mut self, id: &str) {
        self.theme = id.to_string();
        self.log(format!("Theme changed to {id}"));
        self.request(Redraw::Chrome);
    }

    // ── keys ────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Ignored;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Enter => {
                let command = self.input.trim().to_string();
                if !command.is_empty() {
                    self.execute_command(&command);
                    self.input.clear();
                    self.request(Redraw::Full);
                }
            }
            KeyCode::Up => {
                if self.history_cursor > 0 {
                    self.history_cursor -= 1;
                    self.recall();
                }
            }
            KeyCode::Down => {
                if self.history_cursor + 1 < self.history.len() {
                    self.history_cursor += 1;
                    self.recall();
                } else {
                    self.history_cursor = self.history.len();
                    self.set_input(String::new());
                }
            }
            KeyCode::PageUp => self.scroll_up(5),
            KeyCode::PageDown => self.scroll_down(5),
            KeyCode::Esc => self.set_input(String::new()),
            KeyCode::Backspace => {
                self.input.pop();
                self.request(Redraw::Full);
            }
            KeyCode::Char('u') if ctrl => self.set_input(String::new()),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.input.push(c);
                self.request(Redraw::Full);
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn recall(&mut self) {
        let entry = self.history[self.history_cursor].clone();
        self.set_input(entry);
    }

    fn set_input(&mut self, value: String) {
        self.input = value;
        self.request(Redraw::Full);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let max = self.output.len().saturating_sub(1);
        self.scroll = (self.scroll + lines).min(max);
        self.request(Redraw::Output);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
        self.request(Redraw::Output);
    }

    // ── accessors ───────────────────────────────────────────────

    fn request(&mut self, region: Redraw) {
        self.redraw = self.redraw.merge(region);
    }

    pub fn take_redraw(&mut self) -> Redraw {
        std::mem::take(&mut self.redraw)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn output(&self) -> &[LogLine] {
        &self.output
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }
}

// ───────────────────────────────────────── tests ─────────────
