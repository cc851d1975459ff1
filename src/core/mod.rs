//! Core logger types and traits

pub mod appender;
pub mod color;
pub mod config;
pub mod error;
pub mod file_action;
pub mod filesystem;
pub mod lifecycle;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod output_mode;
pub mod queue;
pub mod router;
pub mod timestamp;

pub use appender::Appender;
pub use color::LoggingColor;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use file_action::LoggingFileAction;
pub use filesystem::{FileStat, FileSystem, MemoryFileSystem, OsFileSystem, DEFAULT_LOG_FILE_MODE};
pub use lifecycle::StartupOutcome;
pub use log_level::{LoggingLevel, OutputStream};
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use output_mode::LoggingOutputMode;
pub use queue::{DeliveryQueue, QueueState};
pub use router::SinkRouter;
pub use timestamp::TimestampFormat;
