//! Startup file lifecycle
//!
//! Runs once while a logger is built, before its first write: makes sure the log
//! directory exists and applies the configured [`LoggingFileAction`] to a log file
//! left over from an earlier run.
//!
//! Directory and path problems are configuration errors returned to the caller.
//! A compress or delete that fails part way is fatal: [`prepare_log_file`] panics.

use super::error::{LoggerError, Result};
use super::file_action::LoggingFileAction;
use super::filesystem::{FileStat, FileSystem};
use super::output_mode::LoggingOutputMode;
use chrono::{DateTime, Local};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Suffix layout for compressed logs: `<file>.<YYYYMMDDhhmmss>.gz`
pub const COMPRESSED_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// What the lifecycle did to a pre-existing log file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupOutcome {
    /// The mode has no file sink
    Skipped,
    /// No log file existed yet
    NoExistingFile,
    /// The existing file is kept and appended to
    Kept,
    /// The existing file was gzipped to the contained path and removed
    Compressed(PathBuf),
    Deleted,
}

/// `<directory>/<file>`
pub fn log_file_path(directory: &Path, file: &str) -> PathBuf {
    directory.join(file)
}

pub fn prepare_log_file(
    fs: &dyn FileSystem,
    mode: LoggingOutputMode,
    directory: &Path,
    file: &str,
    action: LoggingFileAction,
) -> Result<StartupOutcome> {
    if !mode.includes_file() {
        return Ok(StartupOutcome::Skipped);
    }

    ensure_directory(fs, directory)?;

    let path = log_file_path(directory, file);
    let stat = fs.stat(&path).map_err(|e| {
        LoggerError::io_operation(
            "checking log file",
            format!("could not stat log file '{}'", path.display()),
            e,
        )
    })?;

    let stat = match stat {
        None => return Ok(StartupOutcome::NoExistingFile),
        Some(stat) if stat.is_dir => {
            return Err(LoggerError::config(
                "LogFile",
                format!("'{}' is a directory, not a log file", path.display()),
            ))
        }
        Some(stat) => stat,
    };

    if !action.replaces_existing() {
        return Ok(StartupOutcome::Kept);
    }

    let rotated = if action == LoggingFileAction::Compress {
        compress_file(fs, &path, &stat).map(StartupOutcome::Compressed)
    } else {
        fs.remove_file(&path)
            .map(|_| StartupOutcome::Deleted)
            .map_err(|e| {
                LoggerError::file_rotation(
                    path.display().to_string(),
                    format!("could not delete log file because: {}", e),
                )
            })
    };

    Ok(rotated.unwrap_or_else(|e| rotation_failed(&e)))
}

/// A half-rotated log file leaves no safe place to write; stop here.
fn rotation_failed(err: &LoggerError) -> ! {
    eprintln!("[LOGGER FATAL] {}", err);
    panic!("{}", err);
}

/// Create the log directory (and parents); anything but a directory at that
/// path is a configuration error.
fn ensure_directory(fs: &dyn FileSystem, directory: &Path) -> Result<()> {
    let existing = fs.stat(directory).map_err(|e| {
        LoggerError::config(
            "LogDirectory",
            format!("could not stat log directory '{}': {}", directory.display(), e),
        )
    })?;

    match existing {
        Some(stat) if stat.is_dir => Ok(()),
        Some(_) => Err(LoggerError::config(
            "LogDirectory",
            format!("'{}' is a file not a directory", directory.display()),
        )),
        None => fs.create_dir_all(directory).map_err(|e| {
            LoggerError::config(
                "LogDirectory",
                format!(
                    "log directory '{}' did not exist and could not be created: {}",
                    directory.display(),
                    e
                ),
            )
        }),
    }
}

/// Name of the compressed copy, stamped with the file's last modification time
pub fn compressed_path(path: &Path, stat: &FileStat) -> PathBuf {
    let stamp = DateTime::<Local>::from(stat.modified).format(COMPRESSED_TIMESTAMP_FORMAT);
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{}.gz", stamp));
    PathBuf::from(name)
}

fn compress_file(fs: &dyn FileSystem, path: &Path, stat: &FileStat) -> Result<PathBuf> {
    let rotation_error = |what: &str, e: std::io::Error| {
        LoggerError::file_rotation(path.display().to_string(), format!("{} because: {}", what, e))
    };

    let bytes = fs
        .read(path)
        .map_err(|e| rotation_error("could not read log file", e))?;

    let mut encoder = GzEncoder::new(Vec::with_capacity(bytes.len() / 2), Compression::default());
    encoder
        .write_all(&bytes)
        .map_err(|e| rotation_error("failed to compress log file", e))?;
    let compressed = encoder
        .finish()
        .map_err(|e| rotation_error("failed to finish compression", e))?;

    let gz_path = compressed_path(path, stat);
    fs.write(&gz_path, &compressed, stat.permissions)
        .map_err(|e| rotation_error("could not create compressed log", e))?;

    fs.remove_file(path)
        .map_err(|e| rotation_error("could not delete log file after compression", e))?;

    Ok(gz_path)
}
