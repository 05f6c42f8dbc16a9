//! Terminal event abstraction.
//!
//! Wraps crossterm events into a smaller enum and runs a blocking reader on
//! tokio's blocking pool that forwards them over a channel, so the main loop
//! can `select!` over input and forwarded commands.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

impl AppEvent {
    /// Map a raw crossterm event.  Key releases, focus changes and pastes
    /// are dropped.
    pub fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) if k.kind != KeyEventKind::Release => Some(AppEvent::Key(k)),
            CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
            CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Spawns a background reader and returns the receiving end.  The reader
/// stops once the receiver is dropped; `poll_interval` bounds how long that
/// takes to notice.
pub fn spawn_event_reader(poll_interval: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(poll_interval) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    tracing::warn!("terminal poll failed: {e}");
                    break;
                }
            }
            let Ok(ev) = event::read() else { continue };
            let Some(app_event) = AppEvent::from_crossterm(ev) else {
                continue;
            };
            if tx.send(app_event).is_err() {
                break; // receiver dropped
            }
        }
        tracing::debug!("event reader stopped");
    });

    rx
}
