//! Application orchestration: state management, event loop plumbing and
//! input handling for the demo host.

pub mod demo;
pub mod event;
pub mod forward;
pub mod handler;
pub mod state;
pub mod view;
