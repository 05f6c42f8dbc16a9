//! Per-theme colour palettes and literal text blocks (logo, subtitle,
//! footer, separator glyphs, loading and goodbye messages).
//!
//! Skins are keyed by theme id.  Ids without a skin render with the Loki
//! skin, so a theme added through external theme data still draws.

use ratatui::style::{Color, Modifier, Style};

use crate::core::DEFAULT_THEME;

// ───────────────────────────────────────── palette ───────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub warning: Color,
    pub dim: Color,
    /// Foreground on the selection bar (background is `primary`).
    pub selected_fg: Color,
}

/// Everything theme-specific a widget draws.
#[derive(Debug)]
pub struct Skin {
    pub id: &'static str,
    pub palette: Palette,
    pub logo: &'static [&'static str],
    pub subtitle: &'static str,
    pub footer: &'static str,
    /// Glyph repeated to draw separator rules.
    pub rule: char,
    /// Ornament wrapped around separator titles.
    pub ornament: &'static str,
    /// Leading glyph on every menu row.
    pub marker: &'static str,
    /// Arrows around the selected row.
    pub cursor: (&'static str, &'static str),
    pub loading: &'static str,
    /// Prefix of the status line shown when an action runs.
    pub execution: &'static str,
    pub goodbye: &'static str,
}

impl Skin {
    // ── menu body ──────────────────────────────────────────────
    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.palette.primary)
    }

    pub fn secondary_style(&self) -> Style {
        Style::default().fg(self.palette.secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.palette.accent)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.palette.dim)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.palette.selected_fg)
            .bg(self.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.palette.warning)
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.palette.primary)
        } else {
            Style::default().fg(self.palette.dim)
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default().bg(self.palette.dim).fg(Color::White)
    }

    /// `"⚡ EXECUTING: Deploy"`
    pub fn execution_line(&self, action: &str) -> String {
        format!("{} {action}", self.execution)
    }

    /// Display width of the widest logo line.
    pub fn logo_width(&self) -> u16 {
        self.logo
            .iter()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0)
    }
}

/// Skin for `id`; unknown ids get the default theme's skin.
pub fn skin(id: &str) -> &'static Skin {
    SKINS
        .iter()
        .find(|s| s.id == id)
        .or_else(|| SKINS.iter().find(|s| s.id == DEFAULT_THEME))
        .unwrap_or(&SKINS[0])
}

static SKINS: &[Skin] = &[
    Skin {
        id: "loki",
        palette: Palette {
            primary: Color::LightGreen,
            secondary: Color::Green,
            accent: Color::Indexed(220),
            warning: Color::LightRed,
            dim: Color::Indexed(28),
            selected_fg: Color::Black,
        },
        logo: LOKI_LOGO,
        subtitle: "⚡ LOKI TERMINAL INTERFACE ⚡ SHAPE-SHIFTING PROTOCOLS ⚡ Build 3.0 ⚡",
        footer: "⚡ TRICKSTER CONTROLS ⚡  ↑↓ Navigate  [ENTER] Execute  [CTRL+T] Transform  [TAB] Console ⚡",
        rule: '═',
        ornament: "⚡",
        marker: "▶",
        cursor: ("→ ", " ←"),
        loading: "⚡ SUMMONING LOKI INTERFACE ⚡",
        execution: "⚡ EXECUTING:",
        goodbye: "⚡ MISCHIEF MANAGED - LOKI OUT ⚡",
    },
    Skin {
        id: "matrix",
        palette: Palette {
            primary: Color::LightGreen,
            secondary: Color::Green,
            accent: Color::White,
            warning: Color::LightRed,
            dim: Color::Indexed(22),
            selected_fg: Color::Black,
        },
        logo: MATRIX_LOGO,
        subtitle: "≋ DIGITAL VALIDATION MATRIX ≋ NEURAL PROCESSING UNIT ≋ v0.1101001 ≋",
        footer: "≋ NEURAL INTERFACE ≋  ↑↓ Navigate  [ENTER] Jack In  [CTRL+T] Reload Construct  [TAB] Console ≋",
        rule: '≋',
        ornament: "≋",
        marker: "▓",
        cursor: ("▶ ", " ◀"),
        loading: "≋ Loading digital construct... ≋",
        execution: "≋ EXECUTING:",
        goodbye: "≋ Until we meet again in the construct... ≋",
    },
    Skin {
        id: "fallout",
        palette: Palette {
            primary: Color::LightYellow,
            secondary: Color::Yellow,
            accent: Color::White,
            warning: Color::LightRed,
            dim: Color::Indexed(94),
            selected_fg: Color::Black,
        },
        logo: FALLOUT_LOGO,
        subtitle: "*** VAULT-TEC AUTOMATED SYSTEMS *** ROBCO INDUSTRIES *** Build 2.077 ***",
        footer: "*** TERMINAL CONTROLS ***  ↑↓ Navigate  [ENTER] Execute  [CTRL+T] Switch  [TAB] Console ***",
        rule: '═',
        ornament: "***",
        marker: "█",
        cursor: ("> ", " <"),
        loading: "*** INITIALIZING VAULT-TEC TERMINAL ***",
        execution: "*** EXECUTING:",
        goodbye: "*** HAVE A PLEASANT DAY, VAULT DWELLER ***",
    },
    Skin {
        id: "tron",
        palette: Palette {
            primary: Color::LightCyan,
            secondary: Color::Cyan,
            accent: Color::LightMagenta,
            warning: Color::LightRed,
            dim: Color::Indexed(24),
            selected_fg: Color::Black,
        },
        logo: TRON_LOGO,
        subtitle: "⬢ GRID VALIDATION PROTOCOL ⬢ LIGHT CYCLE PROTOCOLS ⬢ Build.7.0 ⬢",
        footer: "⬢ GRID INTERFACE ⬢  ↑↓ Navigate  [ENTER] Rez  [CTRL+T] Derez  [TAB] Console ⬢",
        rule: '▬',
        ornament: "⬢",
        marker: "▲",
        cursor: ("▶ ", " ◀"),
        loading: "⬢ Entering the Grid... ⬢",
        execution: "⬢ REZZING:",
        goodbye: "⬢ End of line, program... ⬢",
    },
];

// ───────────────────────────────────────── logos ─────────────

const LOKI_LOGO: &[&str] = &[
    "╔═══════════════════════════════════════════════════════════════════════════╗",
    "║                                                                           ║",
    "║    ██╗      ██████╗ ██╗  ██╗██╗    ████████╗███████╗██████╗ ███╗   ███╗   ║",
    "║    ██║     ██╔═══██╗██║ ██╔╝██║    ╚══██╔══╝██╔════╝██╔══██╗████╗ ████║   ║",
    "║    ██║     ██║   ██║█████╔╝ ██║       ██║   █████╗  ██████╔╝██╔████╔██║   ║",
    "║    ██║     ██║   ██║██╔═██╗ ██║       ██║   ██╔══╝  ██╔══██╗██║╚██╔╝██║   ║",
    "║    ███████╗╚██████╔╝██║  ██╗██║       ██║   ███████╗██║  ██║██║ ╚═╝ ██║   ║",
    "║    ╚══════╝ ╚═════╝ ╚═╝  ╚═╝╚═╝       ╚═╝   ╚══════╝╚═╝  ╚═╝╚═╝     ╚═╝   ║",
    "║                                                                           ║",
    "╚═══════════════════════════════════════════════════════════════════════════╝",
];

const MATRIX_LOGO: &[&str] = &[
    "╔═══════════════════════════════════════════════════════════════════════════════╗",
    "║  ███╗   ███╗ █████╗ ████████╗██████╗ ██╗██╗  ██╗    ████████╗███████╗██████╗  ║",
    "║  ████╗ ████║██╔══██╗╚══██╔══╝██╔══██╗██║╚██╗██╔╝    ╚══██╔══╝██╔════╝██╔══██╗ ║",
    "║  ██╔████╔██║███████║   ██║   ██████╔╝██║ ╚███╔╝        ██║   █████╗  ██████╔╝ ║",
    "║  ██║╚██╔╝██║██╔══██║   ██║   ██╔══██╗██║ ██╔██╗        ██║   ██╔══╝  ██╔══██╗ ║",
    "║  ██║ ╚═╝ ██║██║  ██║   ██║   ██║  ██║██║██╔╝ ██╗       ██║   ███████╗██║  ██║ ║",
    "║  ╚═╝     ╚═╝╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝╚═╝╚═╝  ╚═╝       ╚═╝   ╚══════╝╚═╝  ╚═╝ ║",
    "╚═══════════════════════════════════════════════════════════════════════════════╝",
];

const FALLOUT_LOGO: &[&str] = &[
    "╔═══════════════════════════════════════════════════════════════════════════╗",
    "║    █████████╗███╗   ███╗ █████╗ ██████╗ ████████╗      ██████╗██╗         ║",
    "║    ██╔══════╝████╗ ████║██╔══██╗██╔══██╗╚══██╔══╝     ██╔════╝██║         ║",
    "║    ███████╗ ██╔████╔██║███████║██████╔╝   ██║  █████╗██║     ██║          ║",
    "║    ╚════██║ ██║╚██╔╝██║██╔══██║██╔══██╗   ██║  ╚════╝██║     ██║          ║",
    "║    ███████║ ██║ ╚═╝ ██║██║  ██║██║  ██║   ██║        ╚██████╗██║          ║",
    "║    ╚══════╝ ╚═╝     ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝   ╚═╝         ╚═════╝╚═╝          ║",
    "╚═══════════════════════════════════════════════════════════════════════════╝",
];

const TRON_LOGO: &[&str] = &[
    "╔═══════════════════════════════════════════════════════════════════════════════╗",
    "║  ████████╗██████╗  ██████╗ ███╗   ██╗    ████████╗███████╗██████╗ ███╗   ███╗ ║",
    "║  ╚══██╔══╝██╔══██╗██╔═══██╗████╗  ██║    ╚══██╔══╝██╔════╝██╔══██╗████╗ ████║ ║",
    "║     ██║   ██████╔╝██║   ██║██╔██╗ ██║       ██║   █████╗  ██████╔╝██╔████╔██║ ║",
    "║     ██║   ██╔══██╗██║   ██║██║╚██╗██║       ██║   ██╔══╝  ██╔══██╗██║╚██╔╝██║ ║",
    "║     ██║   ██║  ██║╚██████╔╝██║ ╚████║       ██║   ███████╗██║  ██║██║ ╚═╝ ██║ ║",
    "║     ╚═╝   ╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═══╝       ╚═╝   ╚══════╝╚═╝  ╚═╝╚═╝     ╚═╝ ║",
    "╚═══════════════════════════════════════════════════════════════════════════════╝",
];

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::THEME_CYCLE;

    #[test]
    fn every_cycle_theme_has_its_own_skin() {
        for id in THEME_CYCLE {
            assert_eq!(skin(id).id, *id);
        }
    }

    #[test]
    fn unknown_ids_use_the_default_skin() {
        assert_eq!(skin("synthwave").id, "loki");
        assert_eq!(skin("").id, "loki");
    }

    #[test]
    fn logo_lines_are_rectangular() {
        for s in SKINS {
            let width = s.logo_width() as usize;
            for line in s.logo {
                assert_eq!(line.chars().count(), width, "ragged {} logo", s.id);
            }
        }
    }

    #[test]
    fn execution_lines_follow_each_skin() {
        assert_eq!(skin("loki").execution_line("Deploy"), "⚡ EXECUTING: Deploy");
        assert_eq!(skin("matrix").execution_line("Deploy"), "≋ EXECUTING: Deploy");
        assert_eq!(skin("fallout").execution_line("Deploy"), "*** EXECUTING: Deploy");
        assert_eq!(skin("tron").execution_line("Deploy"), "⬢ REZZING: Deploy");
        assert_eq!(skin("vaporwave").execution_line("Deploy"), "⚡ EXECUTING: Deploy");
    }

    #[test]
    fn selection_is_drawn_on_primary() {
        let s = skin("tron");
        assert_eq!(s.selected_style().bg, Some(Color::LightCyan));
        assert!(s.selected_style().add_modifier.contains(Modifier::BOLD));
    }
}
