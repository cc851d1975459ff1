//! Line layout for log records
//!
//! Formatting is a pure function of the record and the timestamp layout; nothing
//! is shared between callers.

use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;

/// How a record is laid out on a sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Console layout, wrapped in the record's paint and reset colors
    ///
    /// Example: `\x1B[33m[2025-01-08 10:30:45.123456789 +0000] WARNING: disk low\x1B[0m`
    #[default]
    Painted,

    /// File layout, never colored
    ///
    /// Example: `[2025-01-08 10:30:45.123456789 +0000] WARNING: disk low`
    Plain,
}

impl OutputFormat {
    /// Render one line, including the trailing newline
    pub fn format(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let timestamp = timestamp_format.format(&record.timestamp);
        let body = format!(
            "[{}] {}: {}{}",
            timestamp,
            record.level.to_str(),
            record.context,
            record.message
        );

        match self {
            OutputFormat::Painted => {
                format!("{}{}{}\n", record.paint, body, record.reset)
            }
            OutputFormat::Plain => format!("{}\n", body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LoggingLevel;
    use chrono::{Local, TimeZone};

    fn record(level: LoggingLevel, context: &str, message: &str, colorize: bool) -> LogRecord {
        let at = Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .earliest()
            .expect("valid local time");
        LogRecord::new(level, message, context, colorize).with_timestamp(at)
    }

    #[test]
    fn test_plain_layout() {
        let format = TimestampFormat::Custom("%H:%M:%S".to_string());
        let line = OutputFormat::Plain.format(&record(LoggingLevel::Error, "", "oops", true), &format);
        assert_eq!(line, "[10:30:45] ERROR: oops\n");
    }

    #[test]
    fn test_painted_layout_wraps_colors() {
        let format = TimestampFormat::Custom("%H:%M:%S".to_string());
        let line =
            OutputFormat::Painted.format(&record(LoggingLevel::Warning, "", "x", true), &format);
        assert_eq!(line, "\x1B[33m[10:30:45] WARNING: x\x1B[0m\n");
    }

    #[test]
    fn test_context_prefixes_message() {
        let format = TimestampFormat::Custom("%H".to_string());
        let line =
            OutputFormat::Painted.format(&record(LoggingLevel::Debug, "REQ-1", "start", false), &format);
        assert_eq!(line, "[10] DEBUG: REQ-1start\n");
    }
}
