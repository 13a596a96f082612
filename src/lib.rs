//! signup-wizard - Terminal-based multi-step registration wizard
//!
//! This library provides the core of a four-step business registration flow:
//! sign-up, company information, business address, and review & payment.
//! Each step validates its own fields; validated payloads accumulate until
//! the last step completes the registration and hands a redacted record to
//! the configured submission sinks.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Step payloads, option tables, and the accumulated registration
//! - `schema`: Field validation for each step
//! - `forms`: Editable form state bound to the schemas
//! - `wizard`: Page navigation and payload accumulation
//! - `submission`: Redaction and hand-off of completed registrations
//! - `prompt`: Line-based front end
//! - `tui`: Full-screen front end
//! - `display`: Tables for the command line
//!
//! # Example
//!
//! ```rust,ignore
//! use signup_wizard::config::{Settings, WizardPaths};
//! use signup_wizard::wizard::WizardSession;
//!
//! let paths = WizardPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut session = WizardSession::with_default_country(&settings.default_country);
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod logging;
pub mod models;
pub mod prompt;
pub mod schema;
pub mod submission;
pub mod tui;
pub mod wizard;

pub use error::{WizardError, WizardResult};
