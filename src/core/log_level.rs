//! Log level definitions

use super::color::LoggingColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a record.
///
/// Levels carry no ordering: there is no filtering, only a display name,
/// a color, a target stream and whether emission aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoggingLevel {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
    Panic,
}

/// Console stream a record is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

impl LoggingLevel {
    pub const ALL: [LoggingLevel; 6] = [
        LoggingLevel::Debug,
        LoggingLevel::Info,
        LoggingLevel::Warning,
        LoggingLevel::Error,
        LoggingLevel::Fatal,
        LoggingLevel::Panic,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LoggingLevel::Debug => "DEBUG",
            LoggingLevel::Info => "INFO",
            LoggingLevel::Warning => "WARNING",
            LoggingLevel::Error => "ERROR",
            LoggingLevel::Fatal => "FATAL",
            LoggingLevel::Panic => "PANIC",
        }
    }

    pub fn color(&self) -> LoggingColor {
        match self {
            LoggingLevel::Debug => LoggingColor::Debug,
            LoggingLevel::Info => LoggingColor::None,
            LoggingLevel::Warning => LoggingColor::Warning,
            LoggingLevel::Error => LoggingColor::Error,
            LoggingLevel::Fatal => LoggingColor::Fatal,
            LoggingLevel::Panic => LoggingColor::Panic,
        }
    }

    /// Debug and Info go to stdout, everything else to stderr
    pub fn stream(&self) -> OutputStream {
        match self {
            LoggingLevel::Debug | LoggingLevel::Info => OutputStream::Stdout,
            _ => OutputStream::Stderr,
        }
    }

    /// Whether emitting at this level panics after delivery
    pub fn aborts(&self) -> bool {
        matches!(self, LoggingLevel::Panic)
    }
}

impl fmt::Display for LoggingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LoggingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LoggingLevel::Debug),
            "INFO" => Ok(LoggingLevel::Info),
            "WARN" | "WARNING" => Ok(LoggingLevel::Warning),
            "ERR" | "ERROR" => Ok(LoggingLevel::Error),
            "FATAL" => Ok(LoggingLevel::Fatal),
            "PANIC" => Ok(LoggingLevel::Panic),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
