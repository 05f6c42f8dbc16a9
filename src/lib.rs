//! Themed terminal menu and command console widgets.
//!
//! [`core`] holds the widget state machines, [`ui`] renders them with
//! Ratatui, [`app`] wires both into a terminal event loop.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
