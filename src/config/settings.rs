//! User settings for the signup wizard
//!
//! Persisted as `config.json` in the base directory. Every field has a
//! default, so older or hand-edited files load without complaint.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::paths::WizardPaths;
use crate::error::WizardError;

/// File format for saved submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionFormat {
    #[default]
    Json,
    Yaml,
}

impl SubmissionFormat {
    /// File extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Guess the format of an existing file; anything not YAML reads as JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// User settings for the signup wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Format of saved submission files
    #[serde(default)]
    pub submission_format: SubmissionFormat,

    /// Whether completed registrations are written to disk
    #[serde(default = "default_save_submissions")]
    pub save_submissions: bool,

    /// Country pre-selected in the address step (empty for none)
    #[serde(default)]
    pub default_country: String,

    /// TUI tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_save_submissions() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            log_level: default_log_level(),
            submission_format: SubmissionFormat::default(),
            save_submissions: default_save_submissions(),
            default_country: String::new(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &WizardPaths) -> Result<Self, WizardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                WizardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WizardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not written until the caller asks
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WizardPaths) -> Result<(), WizardError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            WizardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            WizardError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.submission_format, SubmissionFormat::Json);
        assert!(settings.save_submissions);
        assert_eq!(settings.tick_rate_ms, 250);
        assert!(settings.default_country.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WizardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.submission_format = SubmissionFormat::Yaml;
        settings.default_country = "CA".into();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WizardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"submission_format":"yaml"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.submission_format, SubmissionFormat::Yaml);
        assert_eq!(loaded.log_level, "info");
    }

    #[test]
    fn test_bad_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WizardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, WizardError::Config(_)));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(SubmissionFormat::from_path(Path::new("a.yml")), SubmissionFormat::Yaml);
        assert_eq!(SubmissionFormat::from_path(Path::new("a.yaml")), SubmissionFormat::Yaml);
        assert_eq!(SubmissionFormat::from_path(Path::new("a.json")), SubmissionFormat::Json);
        assert_eq!(SubmissionFormat::from_path(Path::new("a")), SubmissionFormat::Json);
    }
}
