//! Path management for the signup wizard
//!
//! ## Path Resolution Order
//!
//! 1. `SIGNUP_WIZARD_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories::ProjectDirs`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::WizardError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SIGNUP_WIZARD_DATA_DIR";

/// Manages all paths used by the wizard
#[derive(Debug, Clone)]
pub struct WizardPaths {
    base_dir: PathBuf,
}

impl WizardPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, WizardError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths under a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Where saved submissions go
    pub fn submissions_dir(&self) -> PathBuf {
        self.data_dir().join("submissions")
    }

    /// Log file written by the tracing subscriber
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("signup-wizard.log")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), WizardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WizardError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.submissions_dir()).map_err(|e| {
            WizardError::Io(format!("Failed to create submissions directory: {}", e))
        })?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, WizardError> {
    ProjectDirs::from("", "", "signup-wizard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| WizardError::Config("Could not determine a home directory".into()))
}
