//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use rust_sink_logger::prelude::*;
//! use rust_sink_logger::info;
//!
//! let logger = Logger::builder().mode(LoggingOutputMode::Screen).build().unwrap();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```
//!
//! There is no `panic!` counterpart; call [`Logger::panic`](crate::Logger::panic)
//! directly so the abort is visible at the call site.

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_sink_logger::prelude::*;
/// # let logger = Logger::default();
/// use rust_sink_logger::log;
/// log!(logger, LoggingLevel::Info, "Simple message");
/// log!(logger, LoggingLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LoggingLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LoggingLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_sink_logger::prelude::*;
/// # let logger = Logger::default();
/// use rust_sink_logger::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LoggingLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LoggingLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message. Does not abort.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LoggingLevel::Fatal, $($arg)+)
    };
}
