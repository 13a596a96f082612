//! Modal dialogs drawn over the wizard

pub mod completed;
pub mod help;
