//! Display formatting for terminal output

pub mod config;
pub mod submission;

pub use config::format_config;
pub use submission::format_submission;
