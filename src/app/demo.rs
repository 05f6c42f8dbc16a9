//! The demo menu the binary shows: a few local actions, a group of entries
//! forwarded to the console, and an exit entry.

use std::sync::Arc;

use crate::core::{Command, ThemeCatalog, ThemedMenu, WidgetOptions};
use crate::ui::theme::skin;

use super::forward::ConsoleForwarder;

pub const CONSOLE_TITLE: &str = "Command Console";

/// Build the menu.  Without a forwarder the console entries only echo.
pub fn build_menu(
    catalog: Arc<ThemeCatalog>,
    options: WidgetOptions,
    forwarder: Option<ConsoleForwarder>,
) -> ThemedMenu {
    let mut menu = ThemedMenu::new(catalog, options);
    if let Some(forwarder) = forwarder {
        menu = menu.with_executor(forwarder);
    }

    menu.add_action(
        "deploy",
        "Deploy",
        "Push the current build to production",
        Command::invoke(|ctx| {
            ctx.log("Packaging artefacts...");
            ctx.log("Deployment queued");
        }),
    )
    .add_action(
        "test",
        "Run Tests",
        "Execute the full test suite",
        Command::invoke(|ctx| ctx.log("All systems nominal")),
    )
    .add_action(
        "build",
        "Build",
        "Compile the project",
        Command::invoke(|ctx| ctx.log("Build finished")),
    )
    .add_separator("CONSOLE")
    .add_action("help", "Console Help", "List console commands", Command::forward("help"))
    .add_action("matrix", "Enter Matrix", "Switch the console theme", Command::forward("theme matrix"))
    .add_action("clear", "Clear Console", "Wipe the console log", Command::forward("clear"))
    .add_separator("SYSTEM")
    .add_exit("Exit", "Leave the terminal");

    let loading = skin(menu.theme()).loading;
    menu.log(loading);
    menu
}

/// Options for the console pane: same theme and flags, its own title.
pub fn console_options(widget: &WidgetOptions) -> WidgetOptions {
    widget.clone().with_title(CONSOLE_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_menu_logs_the_loading_line() {
        let menu = build_menu(Arc::new(ThemeCatalog::fallback()), WidgetOptions::default(), None);
        assert_eq!(menu.output(), [skin("loki").loading]);
        assert_eq!(menu.entries().iter().filter(|e| e.is_action()).count(), 7);
    }

    #[test]
    fn forwarded_entries_go_through_the_channel() {
        let (forwarder, mut rx) = ConsoleForwarder::channel();
        let mut menu = build_menu(
            Arc::new(ThemeCatalog::fallback()),
            WidgetOptions::default(),
            Some(forwarder),
        );
        let index = menu
            .entries()
            .iter()
            .position(|e| e.label() == "Enter Matrix")
            .unwrap();
        menu.select_by_index(index);
        assert_eq!(rx.try_recv().ok().as_deref(), Some("theme matrix"));
    }
}
