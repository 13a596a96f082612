//! Configuration display formatting

use crate::config::{Settings, WizardPaths};

/// Format paths and settings for `signup config`
pub fn format_config(paths: &WizardPaths, settings: &Settings) -> String {
    let default_country = if settings.default_country.is_empty() {
        "(none)"
    } else {
        settings.default_country.as_str()
    };

    let mut output = String::new();
    output.push_str("Signup Wizard Configuration\n");
    output.push_str("===========================\n");
    output.push_str(&format!("Config file:       {}\n", paths.settings_file().display()));
    output.push_str(&format!("Submissions:       {}\n", paths.submissions_dir().display()));
    output.push_str(&format!("Log file:          {}\n", paths.log_file().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Log level:         {}\n", settings.log_level));
    output.push_str(&format!(
        "  Save submissions:  {}\n",
        settings.save_submissions
    ));
    output.push_str(&format!(
        "  Submission format: {}\n",
        settings.submission_format.extension()
    ));
    output.push_str(&format!("  Default country:   {}\n", default_country));
    output.push_str(&format!("  Tick rate:         {}ms\n", settings.tick_rate_ms));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_config() {
        let paths = WizardPaths::with_base_dir(PathBuf::from("/tmp/wizard"));
        let output = format_config(&paths, &Settings::default());
        assert!(output.contains("config.json"));
        assert!(output.contains("Default country:   (none)"));
        assert!(output.contains("Submission format: json"));
    }
}
