//! Presentation layer with screens, widgets and key handling.

/// Key bindings.
pub mod commands;
/// Event handling.
pub mod events;
/// Layout helpers.
pub mod layout;
/// Colors and styles.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
