//! Logger configuration and JSON profile files
//!
//! A profiles file is a JSON array of [`LoggerConfig`] objects:
//!
//! ```json
//! [
//!   {
//!     "Name": "dev",
//!     "LogMode": "BOTH",
//!     "LogFileStartupAction": "COMPRESS",
//!     "LogDirectory": "logs",
//!     "LogFile": "app.log",
//!     "ShouldColorize": true,
//!     "IsAsync": false
//!   }
//! ]
//! ```

use super::error::{LoggerError, Result};
use super::file_action::LoggingFileAction;
use super::output_mode::LoggingOutputMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything needed to build a [`Logger`](crate::Logger)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoggerConfig {
    /// Profile name used to pick this entry out of a profiles file
    #[serde(default)]
    pub name: String,
    pub log_mode: LoggingOutputMode,
    #[serde(default)]
    pub log_file_startup_action: LoggingFileAction,
    #[serde(default)]
    pub log_directory: PathBuf,
    #[serde(default)]
    pub log_file: String,
    #[serde(default)]
    pub should_colorize: bool,
    #[serde(default)]
    pub is_async: bool,
}

impl LoggerConfig {
    /// A console-only configuration
    pub fn screen() -> Self {
        Self {
            name: String::new(),
            log_mode: LoggingOutputMode::Screen,
            log_file_startup_action: LoggingFileAction::None,
            log_directory: PathBuf::new(),
            log_file: String::new(),
            should_colorize: false,
            is_async: false,
        }
    }

    /// A configuration writing to `<directory>/<file>`
    pub fn file(directory: impl Into<PathBuf>, file: impl Into<String>) -> Self {
        Self {
            log_mode: LoggingOutputMode::File,
            log_file_startup_action: LoggingFileAction::Append,
            log_directory: directory.into(),
            log_file: file.into(),
            ..Self::screen()
        }
    }

    /// Check the fields that only matter when a file sink is involved
    pub fn validate(&self) -> Result<()> {
        if !self.log_mode.includes_file() {
            return Ok(());
        }

        if self.log_directory.as_os_str().is_empty() {
            return Err(LoggerError::config(
                "LogDirectory",
                format!("a log directory is required in {} mode", self.log_mode),
            ));
        }

        if self.log_file.trim().is_empty() {
            return Err(LoggerError::config(
                "LogFile",
                format!("a log file name is required in {} mode", self.log_mode),
            ));
        }

        if self.log_file.contains('/') || self.log_file.contains('\\') {
            return Err(LoggerError::config(
                "LogFile",
                format!("'{}' must be a file name, not a path", self.log_file),
            ));
        }

        Ok(())
    }

    /// Decode every profile in a JSON profiles document
    pub fn parse_profiles(json: &str) -> Result<Vec<LoggerConfig>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a profiles file and return the entry named `profile`
    pub fn from_file(path: impl AsRef<Path>, profile: &str) -> Result<LoggerConfig> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger config",
                format!("could not read file '{}'", path.display()),
                e,
            )
        })?;

        Self::parse_profiles(&json)?
            .into_iter()
            .find(|config| config.name == profile)
            .ok_or_else(|| LoggerError::profile_not_found(profile, path.display().to_string()))
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::screen()
    }
}
