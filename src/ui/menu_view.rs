//! Ratatui widget that projects a [`ThemedMenu`] onto the screen.
//!
//! The same [`MenuGeometry`] is used for drawing and for mouse hit-testing,
//! so a click always lands on the row that was drawn there.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::core::{MenuEntry, ThemedMenu, THEME_CYCLE};

use super::theme::{skin, Skin};

/// Width reserved for the action name column.
const NAME_COLUMN: usize = 25;

// ───────────────────────────────────────── geometry ──────────

/// Regions inside the menu's area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGeometry {
    pub inner: Rect,
    pub selector: Option<Rect>,
    pub logo: Rect,
    /// `true` when the full logo fits, otherwise a one-line banner is drawn.
    pub full_logo: bool,
    pub subtitle: Rect,
    pub list: Rect,
    pub output: Rect,
    pub footer: Rect,
}

impl MenuGeometry {
    pub fn compute(area: Rect, menu: &ThemedMenu) -> Self {
        let inner = outer_block().inner(area);
        let skin = skin(menu.theme());

        let selector_h = u16::from(menu.options().theme_changing);
        let list_h = (menu.entries().len() as u16).max(1);
        let logo_h = skin.logo.len() as u16;
        let needed = selector_h + logo_h + 1 + list_h + 3 + 1;
        let full_logo = inner.width >= skin.logo_width() && inner.height >= needed;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(selector_h),
                Constraint::Length(if full_logo { logo_h } else { 1 }),
                Constraint::Length(1), // subtitle
                Constraint::Length(list_h),
                Constraint::Min(3), // output log
                Constraint::Length(1), // footer
            ])
            .split(inner);

        Self {
            inner,
            selector: (selector_h > 0).then_some(chunks[0]),
            logo: chunks[1],
            full_logo,
            subtitle: chunks[2],
            list: chunks[3],
            output: chunks[4],
            footer: chunks[5],
        }
    }

    /// Entry index under screen position (`col`, `row`), if any.
    pub fn entry_at(&self, menu: &ThemedMenu, col: u16, row: u16) -> Option<usize> {
        if !contains(self.list, col, row) {
            return None;
        }
        let offset = list_offset(menu.selected_index(), self.list.height as usize);
        let index = offset + (row - self.list.y) as usize;
        (index < menu.entries().len()).then_some(index)
    }

    /// Theme id of the selector button under (`col`, `row`), if any.
    pub fn theme_at(&self, menu: &ThemedMenu, col: u16, row: u16) -> Option<&'static str> {
        let area = self.selector?;
        if !contains(area, col, row) {
            return None;
        }
        let mut x = area.x;
        for (label, id) in selector_segments(menu) {
            let width = label.chars().count() as u16;
            if col >= x && col < x + width {
                return id;
            }
            x += width;
        }
        None
    }
}

fn contains(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}

/// First visible list row so that `selected` stays on screen.
pub fn list_offset(selected: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    selected.saturating_sub(height - 1)
}

fn outer_block<'a>() -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
}

/// Selector row pieces: the caption, then one button per theme.
fn selector_segments(menu: &ThemedMenu) -> Vec<(String, Option<&'static str>)> {
    let mut segments = vec![(" THEMES [CTRL+T] ".to_string(), None)];
    for id in THEME_CYCLE {
        let name = &menu.catalog().descriptor(id).display_name;
        segments.push((format!("[{name}]"), Some(*id)));
        segments.push((" ".to_string(), None));
    }
    segments
}

// ───────────────────────────────────────── lines ─────────────

/// `"▶ ════ ⚡ TOOLS ⚡ ═══════…"` padded with the rule glyph to `width`.
pub fn separator_line(skin: &Skin, title: &str, width: usize) -> String {
    let rule = skin.rule.to_string();
    let mut line = format!("{} {}", skin.marker, rule.repeat(4));
    if !title.is_empty() {
        line.push_str(&format!(" {} {} {} ", skin.ornament, title, skin.ornament));
    }
    let used = line.chars().count();
    if width > used {
        line.push_str(&rule.repeat(width - used));
    }
    line
}

fn action_line<'a>(skin: &Skin, name: &str, description: &str, selected: bool) -> Line<'a> {
    let (prefix, suffix) = if selected { skin.cursor } else { ("  ", "  ") };
    let (row_style, desc_style, marker_style) = if selected {
        (skin.selected_style(), skin.selected_style(), skin.accent_style())
    } else {
        (skin.primary_style(), skin.dim_style(), skin.dim_style())
    };
    Line::from(vec![
        Span::styled(format!("{} ", skin.marker), marker_style),
        Span::styled(format!("{prefix}{name:<NAME_COLUMN$}"), row_style),
        Span::styled(format!("{description}{suffix}"), desc_style),
    ])
}

// ───────────────────────────────────────── widget ────────────

/// The menu widget: created fresh each frame.
pub struct MenuView<'a> {
    menu: &'a ThemedMenu,
    focused: bool,
}

impl<'a> MenuView<'a> {
    pub fn new(menu: &'a ThemedMenu) -> Self {
        Self {
            menu,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_selector(&self, area: Rect, buf: &mut Buffer, skin: &Skin) {
        let spans: Vec<Span> = selector_segments(self.menu)
            .into_iter()
            .map(|(label, id)| {
                let style = match id {
                    Some(id) if id == self.menu.theme() => skin.selected_style(),
                    Some(_) => skin.secondary_style(),
                    None => skin.title_style(),
                };
                Span::styled(label, style)
            })
            .collect();
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_header(&self, geometry: &MenuGeometry, buf: &mut Buffer, skin: &Skin) {
        let logo: Vec<Line> = if geometry.full_logo {
            skin.logo
                .iter()
                .enumerate()
                .map(|(i, l)| {
                    let style = if i < 2 {
                        skin.secondary_style()
                    } else {
                        skin.primary_style()
                    };
                    Line::styled(*l, style)
                })
                .collect()
        } else {
            let banner = format!("◆ {} ◆", self.menu.descriptor().banner());
            vec![Line::styled(banner, skin.title_style())]
        };
        Paragraph::new(logo)
            .alignment(Alignment::Center)
            .render(geometry.logo, buf);

        Paragraph::new(Line::styled(skin.subtitle, skin.accent_style()))
            .alignment(Alignment::Center)
            .render(geometry.subtitle, buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer, skin: &Skin) {
        let height = area.height as usize;
        let offset = list_offset(self.menu.selected_index(), height);
        let lines: Vec<Line> = self
            .menu
            .entries()
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, entry)| match entry {
                MenuEntry::Separator { title } => Line::styled(
                    separator_line(skin, title, area.width as usize),
                    skin.secondary_style(),
                ),
                MenuEntry::Action {
                    name, description, ..
                } => action_line(skin, name, description, i == self.menu.selected_index()),
            })
            .collect();
        Paragraph::new(lines).render(area, buf);
    }

    fn render_output(&self, area: Rect, buf: &mut Buffer, skin: &Skin) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(skin.dim_style());
        let inner = block.inner(area);
        block.render(area, buf);

        // Newest lines at the bottom, one row kept for the cursor.
        let room = (inner.height as usize).saturating_sub(1);
        let output = self.menu.output();
        let start = output.len().saturating_sub(room);
        let mut lines: Vec<Line> = output[start..]
            .iter()
            .map(|text| {
                let style = if text.starts_with("> ") {
                    skin.accent_style()
                } else if text.starts_with("Executing: ") {
                    skin.secondary_style()
                } else {
                    skin.primary_style()
                };
                Line::styled(text.clone(), style)
            })
            .collect();
        lines.push(Line::styled("▌", skin.primary_style()));
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for MenuView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let skin = skin(self.menu.theme());
        let geometry = MenuGeometry::compute(area, self.menu);

        outer_block()
            .title(Line::styled(format!(" {} ", self.menu.title()), skin.title_style()))
            .title(
                Line::styled(format!(" {} ", self.menu.descriptor().banner()), skin.dim_style())
                    .right_aligned(),
            )
            .border_style(skin.border_style(self.focused))
            .render(area, buf);

        if let Some(selector) = geometry.selector {
            self.render_selector(selector, buf, skin);
        }
        self.render_header(&geometry, buf, skin);
        self.render_list(geometry.list, buf, skin);
        self.render_output(geometry.output, buf, skin);
        Paragraph::new(Line::styled(skin.footer, skin.dim_style()))
            .alignment(Alignment::Center)
            .render(geometry.footer, buf);
    }
}

// ───────────────────────────────────────── tests ─────────────
