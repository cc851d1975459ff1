//! Appender implementations

pub mod console;
pub mod file;

pub use console::{CapturedConsole, ConsoleAppender, ConsoleWriter, StdConsole};
pub use file::FileAppender;

pub use crate::core::Appender;
