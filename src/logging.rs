//! Tracing setup
//!
//! Logs go to a file under the base directory because the TUI owns the
//! terminal. `RUST_LOG` wins over the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Settings, WizardPaths};
use crate::error::{WizardError, WizardResult};

/// Build the filter: `RUST_LOG` if set, otherwise the configured level
pub fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Install the global subscriber writing to the log file
///
/// Calling it twice is harmless; the second call keeps the first subscriber.
pub fn init_logging(paths: &WizardPaths, settings: &Settings) -> WizardResult<()> {
    std::fs::create_dir_all(paths.base_dir())?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| WizardError::Io(format!("Failed to open log file: {}", e)))?;

    let installed = tracing_subscriber::registry()
        .with(env_filter(settings))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init();

    if installed.is_ok() {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "signup wizard starting");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WizardPaths::with_base_dir(temp_dir.path().join("base"));

        init_logging(&paths, &Settings::default()).unwrap();
        init_logging(&paths, &Settings::default()).unwrap();
        assert!(paths.log_file().exists());
    }

    #[test]
    fn test_bad_level_falls_back() {
        let settings = Settings {
            log_level: "[[nonsense".into(),
            ..Settings::default()
        };
        // RUST_LOG overrides the configured level
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(env_filter(&settings).to_string(), "info");
    }

    #[test]
    fn test_configured_level_is_used() {
        let settings = Settings {
            log_level: "debug".into(),
            ..Settings::default()
        };
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(env_filter(&settings).to_string(), "debug");
    }
}
