//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    file_action::LoggingFileAction,
    filesystem::{FileSystem, OsFileSystem},
    lifecycle::{self, StartupOutcome},
    log_level::LoggingLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    output_mode::LoggingOutputMode,
    queue::{DeliveryQueue, QueueState},
    router::SinkRouter,
    timestamp::TimestampFormat,
};
use crate::appenders::{ConsoleWriter, StdConsole};
use parking_lot::RwLock;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A leveled text logger writing to the console, a file, or both.
///
/// Synchronous loggers write on the calling thread. Asynchronous loggers hand
/// records to a background worker; call [`Logger::shutdown`] (or drop the logger)
/// before the process exits so queued records are written.
///
/// `Logger::default()` is the unconfigured instance: it writes nothing and
/// [`Logger::is_uninitialized`] returns `true`.
#[derive(Default)]
pub struct Logger {
    router: Option<Arc<SinkRouter>>,
    queue: Option<DeliveryQueue>,
    metrics: Arc<LoggerMetrics>,
    colorize: bool,
    context: RwLock<String>,
    directory: PathBuf,
    file: String,
    startup: Option<StartupOutcome>,
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_sink_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .mode(LoggingOutputMode::Screen)
    ///     .colorize(true)
    ///     .build()
    ///     .unwrap();
    /// logger.info("ready");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Build the logger described by `profile` in a JSON profiles file
    pub fn from_config_file(path: impl AsRef<Path>, profile: &str) -> Result<Self> {
        Self::from_config(&LoggerConfig::from_file(path, profile)?)
    }

    pub fn log(&self, level: LoggingLevel, message: impl Into<String>) {
        let record = LogRecord::new(level, message, self.context.read().as_str(), self.colorize);
        self.dispatch(record);
    }

    fn dispatch(&self, record: LogRecord) {
        if let Some(ref queue) = self.queue {
            queue.enqueue(record);
        } else if let Some(ref router) = self.router {
            router.deliver(&record);
        } else if record.should_abort {
            panic!("{}", record.message);
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LoggingLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LoggingLevel::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LoggingLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LoggingLevel::Error, message);
    }

    /// Logs at FATAL without aborting; use [`Logger::panic`] to abort
    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LoggingLevel::Fatal, message);
    }

    /// Logs at PANIC, then panics with `message`.
    ///
    /// On an asynchronous logger the panic happens on the delivery worker, which
    /// aborts the process.
    #[inline]
    pub fn panic(&self, message: impl Into<String>) {
        self.log(LoggingLevel::Panic, message);
    }

    /// Set the prefix written before every following message; empty clears it
    pub fn set_context(&self, context: impl Into<String>) {
        *self.context.write() = context.into();
    }

    pub fn context(&self) -> String {
        self.context.read().clone()
    }

    /// True for a logger that was never configured
    pub fn is_uninitialized(&self) -> bool {
        self.router.is_none()
    }

    pub fn is_async(&self) -> bool {
        self.queue.is_some()
    }

    pub fn output_mode(&self) -> Option<LoggingOutputMode> {
        self.router.as_ref().map(|router| router.mode())
    }

    pub fn colorize(&self) -> bool {
        self.colorize
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn file_name(&self) -> &str {
        &self.file
    }

    /// Full path of the file sink, `None` without one
    pub fn log_path(&self) -> Option<&Path> {
        self.router.as_ref().and_then(|router| router.log_path())
    }

    /// What the startup file lifecycle did when this logger was built
    pub fn startup_outcome(&self) -> Option<&StartupOutcome> {
        self.startup.as_ref()
    }

    /// State of the delivery queue, `None` for synchronous loggers
    pub fn queue_state(&self) -> Option<QueueState> {
        self.queue.as_ref().map(DeliveryQueue::state)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Drain and stop the delivery queue.
    ///
    /// Blocks until every queued record is written. Idempotent; a no-op for
    /// synchronous loggers. Records logged afterwards are dropped.
    pub fn shutdown(&self) {
        if let Some(ref queue) = self.queue {
            queue.stop();
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("mode", &self.output_mode())
            .field("log_path", &self.log_path())
            .field("colorize", &self.colorize)
            .field("context", &*self.context.read())
            .field("queue_state", &self.queue_state())
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown();

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shut down after discarding {} records logged during shutdown",
                dropped
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Building validates the configuration and runs the startup file lifecycle, so a
/// `build()` error leaves nothing behind but whatever the lifecycle already did.
///
/// # Example
/// ```no_run
/// use rust_sink_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .mode(LoggingOutputMode::Both)
///     .file_action(LoggingFileAction::Compress)
///     .directory("logs")
///     .file("app.log")
///     .async_mode(true)
///     .build()?;
///
/// logger.info("service started");
/// logger.shutdown();
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LoggerBuilder {
    mode: Option<LoggingOutputMode>,
    file_action: LoggingFileAction,
    directory: PathBuf,
    file: String,
    colorize: bool,
    async_mode: bool,
    context: String,
    timestamp_format: TimestampFormat,
    filesystem: Arc<dyn FileSystem>,
    console: Arc<dyn ConsoleWriter>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            mode: None,
            file_action: LoggingFileAction::default(),
            directory: PathBuf::new(),
            file: String::new(),
            colorize: false,
            async_mode: false,
            context: String::new(),
            timestamp_format: TimestampFormat::default(),
            filesystem: OsFileSystem::shared(),
            console: Arc::new(StdConsole),
        }
    }

    /// Copy every field of `config`
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: &LoggerConfig) -> Self {
        self.mode = Some(config.log_mode);
        self.file_action = config.log_file_startup_action;
        self.directory = config.log_directory.clone();
        self.file = config.log_file.clone();
        self.colorize = config.should_colorize;
        self.async_mode = config.is_async;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn mode(mut self, mode: LoggingOutputMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// What to do with a log file left from a previous run. Default `Append`.
    #[must_use = "builder methods return a new value"]
    pub fn file_action(mut self, action: LoggingFileAction) -> Self {
        self.file_action = action;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Deliver through a background worker instead of on the calling thread
    #[must_use = "builder methods return a new value"]
    pub fn async_mode(mut self, enabled: bool) -> Self {
        self.async_mode = enabled;
        self
    }

    /// Initial context prefix
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Replace the OS filesystem, e.g. with a `MemoryFileSystem` in tests
    #[must_use = "builder methods return a new value"]
    pub fn filesystem(mut self, filesystem: Arc<dyn FileSystem>) -> Self {
        self.filesystem = filesystem;
        self
    }

    /// Replace stdout/stderr, e.g. with a `CapturedConsole` in tests
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: Arc<dyn ConsoleWriter>) -> Self {
        self.console = console;
        self
    }

    /// Validate, run the startup file lifecycle, and start the worker if asked
    pub fn build(self) -> Result<Logger> {
        let mode = self
            .mode
            .ok_or_else(|| LoggerError::config("LogMode", "an output mode is required"))?;

        let config = LoggerConfig {
            name: String::new(),
            log_mode: mode,
            log_file_startup_action: self.file_action,
            log_directory: self.directory.clone(),
            log_file: self.file.clone(),
            should_colorize: self.colorize,
            is_async: self.async_mode,
        };
        config.validate()?;
        self.timestamp_format.validate()?;

        let startup = lifecycle::prepare_log_file(
            self.filesystem.as_ref(),
            mode,
            &self.directory,
            &self.file,
            self.file_action,
        )?;

        let metrics = Arc::new(LoggerMetrics::new());
        let router = Arc::new(SinkRouter::new(
            mode,
            lifecycle::log_file_path(&self.directory, &self.file),
            self.filesystem,
            self.console,
            self.timestamp_format,
            Arc::clone(&metrics),
        ));

        let queue = if self.async_mode {
            let queue = DeliveryQueue::new(Arc::clone(&router), Arc::clone(&metrics));
            queue.start()?;
            Some(queue)
        } else {
            None
        };

        Ok(Logger {
            router: Some(router),
            queue,
            metrics,
            colorize: self.colorize,
            context: RwLock::new(self.context),
            directory: self.directory,
            file: self.file,
            startup: Some(startup),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
