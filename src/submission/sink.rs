//! Submission sinks
//!
//! A sink is the collaborator a finished registration is handed to. The
//! wizard ships two: one that logs the record and one that writes it to disk.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::settings::SubmissionFormat;
use crate::error::{WizardError, WizardResult};

use super::record::SubmissionRecord;

/// Receives completed, redacted registrations
pub trait SubmissionSink {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Record a submission, returning the file written if there is one
    fn submit(&self, record: &SubmissionRecord) -> WizardResult<Option<PathBuf>>;
}

/// Logs each record through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    fn submit(&self, record: &SubmissionRecord) -> WizardResult<Option<PathBuf>> {
        let body = serde_json::to_string(record)?;
        tracing::info!(id = %record.id, record = %body, "registration submitted");
        Ok(None)
    }
}

/// Writes each record to `<dir>/<id>.<ext>`
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    format: SubmissionFormat,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>, format: SubmissionFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
        }
    }

    /// Directory records are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a record is written to
    pub fn path_for(&self, record: &SubmissionRecord) -> PathBuf {
        self.dir
            .join(format!("{}.{}", record.id, self.format.extension()))
    }
}

impl SubmissionSink for FileSink {
    fn name(&self) -> &'static str {
        "file"
    }

    fn submit(&self, record: &SubmissionRecord) -> WizardResult<Option<PathBuf>> {
        let path = self.path_for(record);
        write_atomic(&path, record, self.format)?;
        tracing::info!(path = %path.display(), "saved submission");
        Ok(Some(path))
    }
}

/// Read a saved record, picking the format from the file extension
pub fn load_record(path: &Path) -> WizardResult<SubmissionRecord> {
    if !path.exists() {
        return Err(WizardError::Io(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| WizardError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    match SubmissionFormat::from_path(path) {
        SubmissionFormat::Yaml => Ok(serde_yaml::from_reader(reader)?),
        SubmissionFormat::Json => Ok(serde_json::from_reader(reader)?),
    }
}

/// Write to a temp file next to the target, then rename over it
fn write_atomic(path: &Path, record: &SubmissionRecord, format: SubmissionFormat) -> WizardResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            WizardError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = path.with_extension(format!("{}.tmp", format.extension()));
    let file = File::create(&temp_path)
        .map_err(|e| WizardError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    match format {
        SubmissionFormat::Json => serde_json::to_writer_pretty(&mut writer, record)?,
        SubmissionFormat::Yaml => serde_yaml::to_writer(&mut writer, record)?,
    }
    writer
        .flush()
        .map_err(|e| WizardError::Io(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| WizardError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        WizardError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
