//! File appender implementation

use crate::core::{
    Appender, FileSystem, LogRecord, LoggerError, OsFileSystem, OutputFormat, Result,
    TimestampFormat,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Appends plain lines to one log file.
///
/// The file is opened, written and closed for every record; no handle is held
/// between calls.
pub struct FileAppender {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    timestamp_format: TimestampFormat,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_filesystem(path, OsFileSystem::shared())
    }

    pub fn with_filesystem(path: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            path: path.into(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&self, record: &LogRecord) -> Result<()> {
        let mut handle = self.fs.open_append(&self.path).map_err(|e| {
            LoggerError::file_appender(
                self.path.display().to_string(),
                format!("unable to open log file for writing because: {}", e),
            )
        })?;

        let line = OutputFormat::Plain.format(record, &self.timestamp_format);
        handle
            .write_all(line.as_bytes())
            .and_then(|_| handle.flush())
            .map_err(|e| {
                LoggerError::file_appender(
                    self.path.display().to_string(),
                    format!("unable to write to log file because: {}", e),
                )
            })
    }

    fn name(&self) -> &str {
        "file"
    }
}
