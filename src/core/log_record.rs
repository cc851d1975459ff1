//! Log record structure

use super::color::LoggingColor;
use super::log_level::{LoggingLevel, OutputStream};
use chrono::{DateTime, Local};

/// One captured log event, built by the logger and consumed by the router.
///
/// The timestamp is taken when the record is created, so a record that waits in the
/// delivery queue still carries the time the caller logged it. The context is a
/// snapshot of the owning logger's context at the same instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: LoggingLevel,
    pub paint: LoggingColor,
    pub reset: LoggingColor,
    pub context: String,
    pub message: String,
    pub stream: OutputStream,
    pub should_abort: bool,
}

impl LogRecord {
    /// Build a record for `level`, resolving colors only when `colorize` is set.
    pub fn new(
        level: LoggingLevel,
        message: impl Into<String>,
        context: impl Into<String>,
        colorize: bool,
    ) -> Self {
        let (paint, reset) = if colorize {
            Self::color_pair(level)
        } else {
            (LoggingColor::None, LoggingColor::None)
        };

        Self {
            timestamp: Local::now(),
            level,
            paint,
            reset,
            context: context.into(),
            message: message.into(),
            stream: level.stream(),
            should_abort: level.aborts(),
        }
    }

    /// Override the capture time
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    fn color_pair(level: LoggingLevel) -> (LoggingColor, LoggingColor) {
        match level.color() {
            LoggingColor::None => (LoggingColor::None, LoggingColor::None),
            paint => (paint, LoggingColor::Reset),
        }
    }
}
