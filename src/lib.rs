//! # Rust Sink Logger
//!
//! A leveled, colorized, timestamped text logger that writes to the console, to a
//! file, or to both.
//!
//! ## Features
//!
//! - **Six levels**: DEBUG and INFO go to stdout, WARNING and above to stderr
//! - **ANSI colors**: optional per-level coloring of console lines; file lines stay plain
//! - **Startup file actions**: append to, gzip away, or delete a previous run's log
//! - **Asynchronous delivery**: an ordered background queue drained on shutdown
//! - **JSON profiles**: build a logger from a named entry of a config file
//!
//! ## Example
//!
//! ```
//! use rust_sink_logger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .mode(LoggingOutputMode::Screen)
//!     .colorize(true)
//!     .build()
//!     .unwrap();
//!
//! logger.set_context("[worker-1] ");
//! logger.info("started");
//! logger.warning("queue is getting long");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{CapturedConsole, ConsoleAppender, ConsoleWriter, FileAppender, StdConsole};
    pub use crate::core::{
        Appender, FileSystem, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, LoggingColor, LoggingFileAction, LoggingLevel, LoggingOutputMode,
        MemoryFileSystem, OsFileSystem, OutputFormat, OutputStream, Result, StartupOutcome,
        TimestampFormat,
    };
}

pub use appenders::{CapturedConsole, ConsoleAppender, ConsoleWriter, FileAppender, StdConsole};
pub use core::{
    Appender, DeliveryQueue, FileStat, FileSystem, LogRecord, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, LoggingColor, LoggingFileAction, LoggingLevel, LoggingOutputMode,
    MemoryFileSystem, OsFileSystem, OutputFormat, OutputStream, QueueState, Result, SinkRouter,
    StartupOutcome, TimestampFormat,
};
