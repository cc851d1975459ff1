//! Timestamp formatting utilities
//!
//! Records are stamped in local time when they are created; this module only
//! decides how that instant is rendered inside the `[...]` of a line.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout of the timestamp written between the brackets of every line.
///
/// # Examples
///
/// ```
/// use rust_sink_logger::core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(
///     TimestampFormat::Rfc3339.format(&instant),
///     "2025-01-08T10:30:45+00:00"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Wall-clock layout with nanoseconds and offset: `2025-01-08 10:30:45.123456789 +0000`
    #[default]
    WallClock,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+00:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::WallClock => {
                datetime.format("%Y-%m-%d %H:%M:%S%.9f %z").to_string()
            }
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Reject custom strftime strings chrono cannot render.
    ///
    /// Rendering an invalid format panics inside `to_string`, so builders call
    /// this once up front.
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(format_str) = self {
            if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "TimestampFormat",
                    format!("invalid strftime format '{}'", format_str),
                ));
            }
        }
        Ok(())
    }
}
