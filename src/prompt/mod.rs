//! Line-based front end
//!
//! Walks the same wizard session as the TUI, one field per prompt. Typing
//! `:back` returns to the previous step and `:quit` abandons the wizard.
//! An empty answer keeps the field's current value.

pub mod wizard;

pub use wizard::{PromptOutcome, PromptWizard};
