//! Output modes: which sinks a record reaches

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sinks a logger writes to. Fixed when the logger is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoggingOutputMode {
    /// Log file only
    File,
    /// Console only
    Screen,
    /// Console and log file
    Both,
}

impl LoggingOutputMode {
    pub fn to_str(&self) -> &'static str {
        match self {
            LoggingOutputMode::File => "FILE",
            LoggingOutputMode::Screen => "SCREEN",
            LoggingOutputMode::Both => "BOTH",
        }
    }

    #[inline]
    pub fn includes_file(&self) -> bool {
        matches!(self, LoggingOutputMode::File | LoggingOutputMode::Both)
    }

    #[inline]
    pub fn includes_screen(&self) -> bool {
        matches!(self, LoggingOutputMode::Screen | LoggingOutputMode::Both)
    }
}

impl fmt::Display for LoggingOutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LoggingOutputMode {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FILE" => Ok(LoggingOutputMode::File),
            "SCREEN" => Ok(LoggingOutputMode::Screen),
            "BOTH" => Ok(LoggingOutputMode::Both),
            _ => Err(LoggerError::config(
                "LoggingOutputMode",
                format!("invalid output mode '{}', expected FILE, SCREEN or BOTH", s),
            )),
        }
    }
}
