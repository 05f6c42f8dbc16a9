//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer reads the widget models from `core` and draws them.  It never
//! mutates widget state.

pub mod console_view;
pub mod layout;
pub mod menu_view;
pub mod theme;
