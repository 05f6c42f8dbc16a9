//! Ratatui widget for a [`ThemedConsole`]: scrollback above, prompt below.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::core::{LineKind, ThemeCatalog, ThemedConsole};

use super::theme::{skin, Skin};

const PROMPT: &str = "$ ";
const PLACEHOLDER: &str = "Enter command...";

pub struct ConsoleView<'a> {
    console: &'a ThemedConsole,
    catalog: &'a ThemeCatalog,
    focused: bool,
}

impl<'a> ConsoleView<'a> {
    pub fn new(console: &'a ThemedConsole, catalog: &'a ThemeCatalog) -> Self {
        Self {
            console,
            catalog,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn log_lines(&self, height: usize, skin: &Skin) -> Vec<Line<'a>> {
        let output = self.console.output();
        let end = output.len().saturating_sub(self.console.scroll());
        let start = end.saturating_sub(height);
        output[start..end]
            .iter()
            .map(|line| {
                let style = match line.kind {
                    LineKind::Output => skin.primary_style(),
                    LineKind::Input => skin.accent_style(),
                    LineKind::Error => skin.error_style(),
                };
                Line::styled(line.display(), style)
            })
            .collect()
    }

    fn prompt_line(&self, width: usize, skin: &Skin) -> Line<'a> {
        let input = self.console.input();
        if input.is_empty() && !self.focused {
            return Line::from(vec![
                Span::styled(PROMPT, skin.accent_style()),
                Span::styled(PLACEHOLDER, skin.dim_style()),
            ]);
        }

        // Keep the tail of long input visible next to the cursor.
        let room = width.saturating_sub(PROMPT.len() + 1);
        let count = input.chars().count();
        let visible: String = input.chars().skip(count.saturating_sub(room)).collect();

        let mut spans = vec![
            Span::styled(PROMPT, skin.accent_style()),
            Span::styled(visible, skin.primary_style()),
        ];
        if self.focused {
            spans.push(Span::styled("█", skin.primary_style()));
        }
        Line::from(spans)
    }
}

impl Widget for ConsoleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let skin = skin(self.console.theme());
        let banner = self.catalog.descriptor(self.console.theme()).banner();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(skin.border_style(self.focused))
            .title(Line::styled(format!(" {} ", self.console.title()), skin.title_style()))
            .title(Line::styled(format!(" {banner} "), skin.dim_style()).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        Paragraph::new(self.log_lines(chunks[0].height as usize, skin)).render(chunks[0], buf);
        Paragraph::new(self.prompt_line(chunks[1].width as usize, skin)).render(chunks[1], buf);
    }
}
