//! Actions taken on a pre-existing log file when a logger starts

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoggingFileAction {
    /// Keep the existing file and append to it
    #[default]
    Append,
    /// Gzip the existing file aside, then start a fresh one
    Compress,
    /// Remove the existing file
    Delete,
    /// No file handling, e.g. when only writing to the screen
    None,
}

impl LoggingFileAction {
    pub fn to_str(&self) -> &'static str {
        match self {
            LoggingFileAction::Append => "APPEND",
            LoggingFileAction::Compress => "COMPRESS",
            LoggingFileAction::Delete => "DELETE",
            LoggingFileAction::None => "NONE",
        }
    }

    /// Whether this action touches an existing file at all
    pub fn replaces_existing(&self) -> bool {
        matches!(self, LoggingFileAction::Compress | LoggingFileAction::Delete)
    }
}

impl fmt::Display for LoggingFileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LoggingFileAction {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "APPEND" => Ok(LoggingFileAction::Append),
            "COMPRESS" => Ok(LoggingFileAction::Compress),
            "DELETE" => Ok(LoggingFileAction::Delete),
            "NONE" => Ok(LoggingFileAction::None),
            _ => Err(LoggerError::config(
                "LoggingFileAction",
                format!(
                    "invalid file startup action '{}', expected APPEND, COMPRESS, DELETE or NONE",
                    s
                ),
            )),
        }
    }
}
