//! Sink router: formats a record and writes it to the sinks of the output mode

use super::{
    appender::Appender, error::Result, log_record::LogRecord, metrics::LoggerMetrics,
    output_mode::LoggingOutputMode,
};
use crate::appenders::{ConsoleAppender, ConsoleWriter, FileAppender};
use crate::core::{filesystem::FileSystem, timestamp::TimestampFormat};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Owns the sinks of one logger.
///
/// Sinks are fixed at construction: the console sink first when the mode includes
/// the screen, then the file sink when it includes the file.
pub struct SinkRouter {
    mode: LoggingOutputMode,
    log_path: Option<PathBuf>,
    appenders: Vec<Box<dyn Appender>>,
    metrics: Arc<LoggerMetrics>,
}

impl SinkRouter {
    pub fn new(
        mode: LoggingOutputMode,
        log_path: impl Into<PathBuf>,
        fs: Arc<dyn FileSystem>,
        console: Arc<dyn ConsoleWriter>,
        timestamp_format: TimestampFormat,
        metrics: Arc<LoggerMetrics>,
    ) -> Self {
        let log_path = log_path.into();
        let mut appenders: Vec<Box<dyn Appender>> = Vec::with_capacity(2);

        if mode.includes_screen() {
            appenders.push(Box::new(
                ConsoleAppender::with_writer(console).with_timestamp_format(timestamp_format.clone()),
            ));
        }

        let log_path = if mode.includes_file() {
            appenders.push(Box::new(
                FileAppender::with_filesystem(log_path.clone(), fs)
                    .with_timestamp_format(timestamp_format),
            ));
            Some(log_path)
        } else {
            None
        };

        Self {
            mode,
            log_path,
            appenders,
            metrics,
        }
    }

    pub fn mode(&self) -> LoggingOutputMode {
        self.mode
    }

    /// Path of the file sink, `None` in screen mode
    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Sink names in write order
    pub fn sinks(&self) -> Vec<&str> {
        self.appenders.iter().map(|appender| appender.name()).collect()
    }

    /// Write `record` to every sink, stopping at the first failure.
    ///
    /// Does not honour the record's abort flag; see [`SinkRouter::deliver`].
    pub fn try_deliver(&self, record: &LogRecord) -> Result<()> {
        for appender in &self.appenders {
            appender.append(record)?;
        }
        self.metrics.record_delivered();
        Ok(())
    }

    /// Write `record` to every sink.
    ///
    /// # Panics
    ///
    /// Panics with a description of the failure when a sink cannot be written, and
    /// with the record's message after a successful write of a Panic-level record.
    pub fn deliver(&self, record: &LogRecord) {
        if let Err(e) = self.try_deliver(record) {
            panic!("{}", e);
        }

        if record.should_abort {
            panic!("{}", record.message);
        }
    }
}
