//! Menu commands and the executor seam.
//!
//! A menu action carries a [`Command`] decided when the entry is built:
//! either a handler to invoke directly or a command string forwarded to the
//! menu's [`CommandExecutor`].

use std::fmt;

/// Handle passed to command handlers and executors.  Lets them write to the
/// menu's output log and ask the host to quit without borrowing the menu.
pub struct ActionContext<'a> {
    log: &'a mut Vec<String>,
    quit: &'a mut bool,
}

impl<'a> ActionContext<'a> {
    pub(crate) fn new(log: &'a mut Vec<String>, quit: &'a mut bool) -> Self {
        Self { log, quit }
    }

    /// Append a line to the menu output log.
    pub fn log(&mut self, message: impl Into<String>) {
        self.log.push(message.into());
    }

    /// Ask the host application to shut down after the current event.
    pub fn request_quit(&mut self) {
        *self.quit = true;
    }
}

pub type Handler = Box<dyn FnMut(&mut ActionContext<'_>)>;

/// What selecting an action does.
pub enum Command {
    /// Run a handler in-process.
    Invoke(Handler),
    /// Hand a command string to the menu's executor.
    Forward(String),
}

impl Command {
    pub fn invoke(handler: impl FnMut(&mut ActionContext<'_>) + 'static) -> Self {
        Command::Invoke(Box::new(handler))
    }

    pub fn forward(text: impl Into<String>) -> Self {
        Command::Forward(text.into())
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Invoke(_) => f.write_str("Invoke(..)"),
            Command::Forward(text) => f.debug_tuple("Forward").field(text).finish(),
        }
    }
}

impl From<&str> for Command {
    fn from(text: &str) -> Self {
        Command::forward(text)
    }
}

impl From<String> for Command {
    fn from(text: String) -> Self {
        Command::Forward(text)
    }
}

/// Interprets forwarded command strings on behalf of a host application.
pub trait CommandExecutor {
    fn execute(&mut self, command: &str, ctx: &mut ActionContext<'_>);
}

/// Default executor: the menu has already echoed the command, nothing else
/// happens.
#[derive(Debug, Default)]
pub struct LogOnly;

impl CommandExecutor for LogOnly {
    fn execute(&mut self, command: &str, _ctx: &mut ActionContext<'_>) {
        tracing::debug!("no executor installed for {command:?}");
    }
}
