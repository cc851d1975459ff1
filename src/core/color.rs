//! Terminal colors painted around console lines

use colored::Color;
use std::borrow::Cow;
use std::fmt;

/// ANSI escape sequence applied to a console line.
///
/// File output never carries these; they only decorate the console sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoggingColor {
    /// Native terminal color
    #[default]
    None,
    /// Green
    Debug,
    /// Yellow
    Warning,
    /// Red
    Error,
    /// White text on a red background
    Fatal,
    /// White text on a red background
    Panic,
    /// Resets any applied color
    Reset,
}

impl LoggingColor {
    /// The raw escape sequence, empty for [`LoggingColor::None`].
    pub fn sequence(&self) -> Cow<'static, str> {
        match self {
            LoggingColor::None => Cow::Borrowed(""),
            LoggingColor::Reset => Cow::Borrowed("\x1B[0m"),
            LoggingColor::Debug => foreground(Color::Green),
            LoggingColor::Warning => foreground(Color::Yellow),
            LoggingColor::Error => foreground(Color::Red),
            LoggingColor::Fatal | LoggingColor::Panic => Cow::Owned(format!(
                "\x1B[0;{};{}m",
                Color::White.to_fg_str(),
                Color::Red.to_bg_str()
            )),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, LoggingColor::None)
    }
}

fn foreground(color: Color) -> Cow<'static, str> {
    Cow::Owned(format!("\x1B[{}m", color.to_fg_str()))
}

impl fmt::Display for LoggingColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sequence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_sequences() {
        assert_eq!(LoggingColor::None.sequence(), "");
        assert_eq!(LoggingColor::Debug.sequence(), "\x1B[32m");
        assert_eq!(LoggingColor::Warning.sequence(), "\x1B[33m");
        assert_eq!(LoggingColor::Error.sequence(), "\x1B[31m");
        assert_eq!(LoggingColor::Fatal.sequence(), "\x1B[0;37;41m");
        assert_eq!(LoggingColor::Panic.sequence(), "\x1B[0;37;41m");
        assert_eq!(LoggingColor::Reset.sequence(), "\x1B[0m");
    }

    #[test]
    fn test_display_matches_sequence() {
        assert_eq!(LoggingColor::Warning.to_string(), "\x1B[33m");
        assert!(LoggingColor::None.to_string().is_empty());
    }
}
