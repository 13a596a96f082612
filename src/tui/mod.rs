//! Terminal User Interface module
//!
//! The wizard as a full-screen ratatui application: a step list on the left,
//! the current step's form on the right, toasts and dialogs on top.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
