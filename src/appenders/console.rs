//! Console appender implementation

use crate::core::{Appender, LogRecord, LoggerError, OutputFormat, OutputStream, Result, TimestampFormat};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Destination for console lines, one call per line
pub trait ConsoleWriter: Send + Sync + fmt::Debug {
    fn write_line(&self, stream: OutputStream, line: &str) -> io::Result<()>;
}

/// Writes to the process's stdout and stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl ConsoleWriter for StdConsole {
    fn write_line(&self, stream: OutputStream, line: &str) -> io::Result<()> {
        match stream {
            OutputStream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line.as_bytes())?;
                out.flush()
            }
            OutputStream::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(line.as_bytes())?;
                err.flush()
            }
        }
    }
}

/// Keeps every console line in memory, in write order
#[derive(Debug, Clone, Default)]
pub struct CapturedConsole {
    lines: Arc<Mutex<Vec<(OutputStream, String)>>>,
}

impl CapturedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written to `stream`, newline included
    pub fn lines(&self, stream: OutputStream) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn stdout(&self) -> String {
        self.lines(OutputStream::Stdout).concat()
    }

    pub fn stderr(&self) -> String {
        self.lines(OutputStream::Stderr).concat()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl ConsoleWriter for CapturedConsole {
    fn write_line(&self, stream: OutputStream, line: &str) -> io::Result<()> {
        self.lines.lock().push((stream, line.to_string()));
        Ok(())
    }
}

pub struct ConsoleAppender {
    writer: Arc<dyn ConsoleWriter>,
    timestamp_format: TimestampFormat,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_writer(Arc::new(StdConsole))
    }

    pub fn with_writer(writer: Arc<dyn ConsoleWriter>) -> Self {
        Self {
            writer,
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, record: &LogRecord) -> Result<()> {
        let line = OutputFormat::Painted.format(record, &self.timestamp_format);
        self.writer
            .write_line(record.stream, &line)
            .map_err(|e| LoggerError::writer(format!("unable to write to {:?}: {}", record.stream, e)))
    }

    fn name(&self) -> &str {
        "console"
    }
}
