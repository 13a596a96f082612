//! Handing finished registrations to the outside world
//!
//! A completed [`Registration`] is redacted into a [`SubmissionRecord`] once
//! and then passed to every configured sink in order. The first sink error
//! aborts the submission.

pub mod record;
pub mod sink;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::{Settings, WizardPaths};
use crate::error::WizardResult;
use crate::models::Registration;

pub use record::{CardSummary, SubmissionRecord};
pub use sink::{load_record, FileSink, LogSink, SubmissionSink};

/// What the sinks did with a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    /// Files written by file-backed sinks
    pub saved_to: Vec<PathBuf>,
}

/// Sinks for the current settings: always the log, plus a file when saving
pub fn sinks_from_settings(paths: &WizardPaths, settings: &Settings) -> Vec<Box<dyn SubmissionSink>> {
    let mut sinks: Vec<Box<dyn SubmissionSink>> = vec![Box::new(LogSink)];
    if settings.save_submissions {
        sinks.push(Box::new(FileSink::new(
            paths.submissions_dir(),
            settings.submission_format,
        )));
    }
    sinks
}

/// Redact a registration and pass it to each sink
pub fn submit(
    registration: &Registration,
    sinks: &[Box<dyn SubmissionSink>],
) -> WizardResult<SubmissionReceipt> {
    let record = SubmissionRecord::from_registration(registration)?;
    let mut saved_to = Vec::new();

    for sink in sinks {
        tracing::debug!(sink = sink.name(), id = %record.id, "handing off submission");
        if let Some(path) = sink.submit(&record)? {
            saved_to.push(path);
        }
    }

    Ok(SubmissionReceipt {
        id: record.id,
        submitted_at: record.submitted_at,
        saved_to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::SubmissionFormat;
    use crate::error::WizardError;
    use crate::submission::record::tests::registration;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    struct Recording(Rc<RefCell<Vec<Uuid>>>);

    impl SubmissionSink for Recording {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn submit(&self, record: &SubmissionRecord) -> WizardResult<Option<PathBuf>> {
            self.0.borrow_mut().push(record.id);
            Ok(None)
        }
    }

    struct Failing;

    impl SubmissionSink for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn submit(&self, _record: &SubmissionRecord) -> WizardResult<Option<PathBuf>> {
            Err(WizardError::Submission("rejected".into()))
        }
    }

    #[test]
    fn test_submit_fans_out() {
        let temp_dir = TempDir::new().unwrap();
        let sinks: Vec<Box<dyn SubmissionSink>> = vec![
            Box::new(LogSink),
            Box::new(FileSink::new(temp_dir.path(), SubmissionFormat::Json)),
        ];

        let receipt = submit(&registration(), &sinks).unwrap();
        assert_eq!(receipt.saved_to.len(), 1);
        assert!(receipt.saved_to[0].exists());
        assert_eq!(load_record(&receipt.saved_to[0]).unwrap().id, receipt.id);
    }

    #[test]
    fn test_custom_sink_sees_record() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sinks: Vec<Box<dyn SubmissionSink>> = vec![Box::new(Recording(Rc::clone(&seen)))];
        let receipt = submit(&registration(), &sinks).unwrap();
        assert!(receipt.saved_to.is_empty());
        assert_eq!(*seen.borrow(), vec![receipt.id]);
    }

    #[test]
    fn test_sinks_follow_settings() {
        let paths = WizardPaths::with_base_dir(PathBuf::from("/tmp/wizard"));
        let mut settings = Settings::default();
        let names: Vec<_> = sinks_from_settings(&paths, &settings)
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec!["log", "file"]);

        settings.save_submissions = false;
        assert_eq!(sinks_from_settings(&paths, &settings).len(), 1);
    }

    #[test]
    fn test_sink_error_propagates() {
        let sinks: Vec<Box<dyn SubmissionSink>> = vec![Box::new(Failing)];
        let err = submit(&registration(), &sinks).unwrap_err();
        assert_eq!(err.to_string(), "Submission error: rejected");
    }
}
