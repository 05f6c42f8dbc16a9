//! Hands command strings from the menu to the console.
//!
//! The menu and console are owned by the same [`AppState`](super::state::AppState),
//! so the executor can't reach the console directly.  Instead it queues the
//! text on a channel that the main loop drains into
//! [`ThemedConsole::execute_command`](crate::core::ThemedConsole::execute_command).

use tokio::sync::mpsc;

use crate::core::{ActionContext, CommandExecutor};

pub struct ConsoleForwarder {
    tx: mpsc::UnboundedSender<String>,
}

impl ConsoleForwarder {
    pub fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }

    /// Forwarder plus the receiving end the host should drain.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl CommandExecutor for ConsoleForwarder {
    fn execute(&mut self, command: &str, ctx: &mut ActionContext<'_>) {
        match self.tx.send(command.to_string()) {
            Ok(()) => tracing::debug!("forwarded {command:?} to console"),
            Err(_) => ctx.log("Console unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::core::{Command, ThemeCatalog, ThemedMenu, WidgetOptions};

    #[test]
    fn forwarded_entries_reach_the_channel() {
        let (forwarder, mut rx) = ConsoleForwarder::channel();
        let mut menu = ThemedMenu::new(Arc::new(ThemeCatalog::fallback()), WidgetOptions::default())
            .with_executor(forwarder);
        menu.add_action("logs", "Logs", "Show help", Command::forward("help"));
        menu.select_by_index(0);

        assert_eq!(rx.try_recv().ok().as_deref(), Some("help"));
        assert_eq!(menu.output(), ["Executing: Logs", "> help"]);
    }

    #[test]
    fn closed_channel_is_reported_in_the_log() {
        let (forwarder, rx) = ConsoleForwarder::channel();
        drop(rx);
        let mut menu = ThemedMenu::new(Arc::new(ThemeCatalog::fallback()), WidgetOptions::default())
            .with_executor(forwarder);
        menu.execute_command("status");
        assert_eq!(menu.output().last().map(String::as_str), Some("Console unavailable"));
    }
}
