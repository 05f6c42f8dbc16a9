//! Widget models – theme catalog, menu, console and the command seam.
//!
//! Nothing in this module touches Ratatui; the `ui` layer reads
//! these types and turns them into Ratatui widgets.

pub mod catalog;
pub mod command;
pub mod console;
pub mod menu;
pub mod options;
pub mod redraw;

pub use catalog::{ThemeCatalog, ThemeDescriptor, DEFAULT_THEME, THEME_CYCLE};
pub use command::{ActionContext, Command, CommandExecutor, LogOnly};
pub use console::{LineKind, LogLine, ThemedConsole};
pub use menu::{MenuEntry, MenuInput, ThemedMenu};
pub use options::WidgetOptions;
pub use redraw::{KeyOutcome, Redraw};
