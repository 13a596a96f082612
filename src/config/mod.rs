//! Configuration module for the signup wizard
//!
//! - platform path resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::WizardPaths;
pub use settings::{Settings, SubmissionFormat};
