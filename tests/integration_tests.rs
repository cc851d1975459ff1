//! Integration tests for the sink logger
//!
//! These tests verify:
//! - Startup file actions against the real filesystem
//! - Line format on the console and in files
//! - Async delivery and shutdown draining
//! - Logger construction from JSON profiles

use flate2::read::GzDecoder;
use rust_sink_logger::prelude::*;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

fn file_logger(dir: &Path, action: LoggingFileAction) -> Logger {
    Logger::builder()
        .mode(LoggingOutputMode::File)
        .file_action(action)
        .directory(dir)
        .file("app.log")
        .build()
        .expect("Failed to build logger")
}

fn gz_files(dir: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|entry| entry.expect("Failed to read entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "gz"))
        .collect();
    found.sort();
    found
}

#[test]
fn test_append_keeps_previous_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");
    fs::write(&log_file, "previous run\n").unwrap();

    let logger = file_logger(temp_dir.path(), LoggingFileAction::Append);
    assert_eq!(logger.startup_outcome(), Some(&StartupOutcome::Kept));
    logger.info("second run");

    let content = fs::read_to_string(&log_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "previous run");
    assert!(lines[1].ends_with("] INFO: second run"));
}

#[test]
fn test_compress_moves_previous_run_aside() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");
    fs::write(&log_file, "previous run\n").unwrap();

    let logger = file_logger(temp_dir.path(), LoggingFileAction::Compress);
    logger.error("fresh start");

    let archives = gz_files(temp_dir.path());
    assert_eq!(archives.len(), 1);
    assert_eq!(
        logger.startup_outcome(),
        Some(&StartupOutcome::Compressed(archives[0].clone()))
    );

    let name = archives[0].file_name().unwrap().to_str().unwrap();
    let stamp = name
        .strip_prefix("app.log.")
        .and_then(|rest| rest.strip_suffix(".gz"))
        .expect("archive name should be app.log.<stamp>.gz");
    assert_eq!(stamp.len(), 14);
    assert!(stamp.chars().all(|c| c.is_ascii_digit()));

    let mut restored = String::new();
    GzDecoder::new(fs::File::open(&archives[0]).unwrap())
        .read_to_string(&mut restored)
        .unwrap();
    assert_eq!(restored, "previous run\n");

    let content = fs::read_to_string(&log_file).unwrap();
    assert!(!content.contains("previous run"));
    assert!(content.ends_with("ERROR: fresh start\n"));
}

#[cfg(unix)]
#[test]
fn test_compress_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");
    fs::write(&log_file, "old\n").unwrap();
    fs::set_permissions(&log_file, fs::Permissions::from_mode(0o600)).unwrap();

    let _logger = file_logger(temp_dir.path(), LoggingFileAction::Compress);

    let archives = gz_files(temp_dir.path());
    let mode = fs::metadata(&archives[0]).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_delete_discards_previous_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");
    fs::write(&log_file, "previous run\n").unwrap();

    let logger = file_logger(temp_dir.path(), LoggingFileAction::Delete);
    assert_eq!(logger.startup_outcome(), Some(&StartupOutcome::Deleted));
    assert!(!log_file.exists());

    logger.warning("only line");
    let content = fs::read_to_string(&log_file).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(gz_files(temp_dir.path()).is_empty());
}

#[test]
fn test_missing_directory_is_created() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let nested = temp_dir.path().join("a").join("b");

    let logger = file_logger(&nested, LoggingFileAction::Compress);
    assert_eq!(logger.startup_outcome(), Some(&StartupOutcome::NoExistingFile));
    logger.debug("hello");

    assert!(fs::read_to_string(nested.join("app.log"))
        .unwrap()
        .ends_with("DEBUG: hello\n"));
}

#[test]
fn test_directory_path_that_is_a_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("not_a_dir");
    fs::write(&blocker, "").unwrap();

    let result = Logger::builder()
        .mode(LoggingOutputMode::Both)
        .directory(&blocker)
        .file("app.log")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_colorized_logger_writes_plain_file_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let console = CapturedConsole::new();

    let logger = Logger::builder()
        .mode(LoggingOutputMode::Both)
        .directory(temp_dir.path())
        .file("app.log")
        .colorize(true)
        .console(Arc::new(console.clone()))
        .build()
        .unwrap();

    logger.error("boom");

    let file_content = fs::read_to_string(temp_dir.path().join("app.log")).unwrap();
    assert!(file_content.starts_with('['));
    assert!(file_content.ends_with("ERROR: boom\n"));
    assert!(!file_content.contains('\x1B'));
    assert_eq!(console.stderr(), format!("\x1B[31m{}\x1B[0m\n", file_content.trim_end()));
}

#[test]
fn test_info_is_never_painted() {
    let console = CapturedConsole::new();
    let logger = Logger::builder()
        .mode(LoggingOutputMode::Screen)
        .colorize(true)
        .console(Arc::new(console.clone()))
        .build()
        .unwrap();

    logger.info("plain");
    let line = console.stdout();
    assert!(line.starts_with('['));
    assert!(!line.contains('\x1B'));
}

#[test]
fn test_timestamp_layout() {
    let console = CapturedConsole::new();
    let logger = Logger::builder()
        .mode(LoggingOutputMode::Screen)
        .console(Arc::new(console.clone()))
        .build()
        .unwrap();

    logger.info("when");
    let line = console.stdout();
    let stamp = &line[1..line.find(']').unwrap()];

    // 2024-05-01 12:00:00.123456789 +0200
    let parts: Vec<&str> = stamp.split(' ').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].len(), 10);
    assert_eq!(parts[1].len(), 18);
    assert!(parts[2].starts_with('+') || parts[2].starts_with('-'));
}

#[test]
fn test_async_file_logging_drains() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("async.log");

    let logger = Logger::builder()
        .mode(LoggingOutputMode::File)
        .directory(temp_dir.path())
        .file("async.log")
        .async_mode(true)
        .build()
        .unwrap();

    for i in 0..50 {
        logger.info(format!("Message {}", i));
    }
    logger.shutdown();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 50, "Should have 50 log entries");
    for (i, line) in lines.iter().enumerate() {
        assert!(line.ends_with(&format!("INFO: Message {}", i)));
    }
    assert_eq!(logger.metrics().delivered_count(), 50);
}

#[test]
fn test_drop_drains_async_logger() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("drop.log");

    {
        let logger = Logger::builder()
            .mode(LoggingOutputMode::File)
            .directory(temp_dir.path())
            .file("drop.log")
            .async_mode(true)
            .build()
            .unwrap();
        for i in 0..10 {
            logger.debug(format!("queued {}", i));
        }
    }

    let content = fs::read_to_string(&log_file).unwrap();
    assert_eq!(content.lines().count(), 10);
}

#[test]
fn test_logger_from_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logs = temp_dir.path().join("logs");
    let config_path = temp_dir.path().join("logging.json");

    let profiles = serde_json::json!([
        { "Name": "console", "LogMode": "SCREEN", "ShouldColorize": true },
        {
            "Name": "service",
            "LogMode": "FILE",
            "LogFileStartupAction": "DELETE",
            "LogDirectory": logs,
            "LogFile": "service.log",
            "IsAsync": true
        }
    ]);
    fs::write(&config_path, profiles.to_string()).unwrap();

    let logger = Logger::from_config_file(&config_path, "service").unwrap();
    assert!(logger.is_async());
    assert_eq!(logger.output_mode(), Some(LoggingOutputMode::File));
    assert_eq!(logger.log_path(), Some(logs.join("service.log").as_path()));

    logger.info("configured");
    logger.shutdown();
    assert!(fs::read_to_string(logs.join("service.log"))
        .unwrap()
        .ends_with("INFO: configured\n"));

    let err = Logger::from_config_file(&config_path, "missing").unwrap_err();
    assert!(matches!(err, LoggerError::ProfileNotFound { .. }));
}

#[test]
fn test_logger_from_config_struct() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = LoggerConfig::file(temp_dir.path(), "cfg.log");
    config.log_mode = LoggingOutputMode::Both;

    let logger = Logger::from_config(&config).unwrap();
    assert_eq!(logger.file_name(), "cfg.log");
    assert_eq!(logger.directory(), temp_dir.path());
    assert!(!logger.colorize());
}
