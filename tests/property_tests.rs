//! Property-based tests for rust_sink_logger using proptest

use chrono::{Local, TimeZone};
use proptest::prelude::*;
use rust_sink_logger::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LoggingLevel> {
    prop_oneof![
        Just(LoggingLevel::Debug),
        Just(LoggingLevel::Info),
        Just(LoggingLevel::Warning),
        Just(LoggingLevel::Error),
        Just(LoggingLevel::Fatal),
        Just(LoggingLevel::Panic),
    ]
}

fn non_aborting_level() -> impl Strategy<Value = LoggingLevel> {
    any_level().prop_filter("Panic aborts", |level| *level != LoggingLevel::Panic)
}

// ============================================================================
// Line formatting
// ============================================================================

proptest! {
    /// A plain line is `[<ts>] LEVEL: <context><message>\n`
    #[test]
    fn test_plain_line_layout(
        level in any_level(),
        context in "[a-zA-Z0-9 \\[\\]:-]{0,16}",
        message in "[^\n]{0,64}",
    ) {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 8, 7, 6).earliest().unwrap();
        let record = LogRecord::new(level, message.clone(), context.clone(), false).with_timestamp(at);
        let line = OutputFormat::Plain.format(&record, &TimestampFormat::default());

        let expected_tail = format!("] {}: {}{}\n", level, context, message);
        prop_assert!(line.starts_with("[2024-03-09 08:07:06.000000000 "));
        prop_assert!(line.ends_with(&expected_tail));
        prop_assert_eq!(line.matches('\n').count(), 1);
    }

    /// Painted lines differ from plain ones only by the wrapping color codes
    #[test]
    fn test_painted_line_wraps_plain_body(level in any_level(), message in "[a-z ]{0,32}") {
        let record = LogRecord::new(level, message, "", true);
        let format = TimestampFormat::default();
        let plain = OutputFormat::Plain.format(&record, &format);
        let painted = OutputFormat::Painted.format(&record, &format);

        let expected = format!(
            "{}{}{}\n",
            record.paint.sequence(),
            plain.trim_end_matches('\n'),
            record.reset.sequence()
        );
        prop_assert_eq!(painted, expected);
        prop_assert_eq!(record.paint.is_none(), level == LoggingLevel::Info);
    }

    /// Without colorize a record never carries color codes
    #[test]
    fn test_uncolored_records_have_no_escapes(level in any_level(), message in "[a-z]{0,16}") {
        let record = LogRecord::new(level, message, "", false);
        prop_assert!(record.paint.is_none());
        prop_assert!(record.reset.is_none());
        let painted = OutputFormat::Painted.format(&record, &TimestampFormat::default());
        prop_assert!(!painted.contains('\x1B'));
    }

    /// Level determines stream and abort flag
    #[test]
    fn test_level_routing(level in any_level()) {
        let record = LogRecord::new(level, "m", "", false);
        let expected_stream = match level {
            LoggingLevel::Debug | LoggingLevel::Info => OutputStream::Stdout,
            _ => OutputStream::Stderr,
        };
        prop_assert_eq!(record.stream, expected_stream);
        prop_assert_eq!(record.should_abort, level == LoggingLevel::Panic);
    }
}

// ============================================================================
// Delivery
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Sync and async loggers write the same lines in the same order
    #[test]
    fn test_async_matches_sync_order(
        messages in prop::collection::vec((non_aborting_level(), "[a-z0-9]{1,12}"), 0..40)
    ) {
        let sync_console = CapturedConsole::new();
        let async_console = CapturedConsole::new();

        let sync_logger = Logger::builder()
            .mode(LoggingOutputMode::Screen)
            .console(Arc::new(sync_console.clone()))
            .build()
            .unwrap();
        let async_logger = Logger::builder()
            .mode(LoggingOutputMode::Screen)
            .async_mode(true)
            .console(Arc::new(async_console.clone()))
            .build()
            .unwrap();

        for (level, message) in &messages {
            sync_logger.log(*level, message.as_str());
            async_logger.log(*level, message.as_str());
        }
        async_logger.shutdown();

        let strip = |lines: Vec<String>| -> Vec<String> {
            lines
                .into_iter()
                .map(|line| line[line.find(']').unwrap()..].to_string())
                .collect()
        };
        for stream in [OutputStream::Stdout, OutputStream::Stderr] {
            prop_assert_eq!(
                strip(sync_console.lines(stream)),
                strip(async_console.lines(stream))
            );
        }
        prop_assert_eq!(async_logger.metrics().delivered_count(), messages.len() as u64);
    }

    /// Every mode that includes the file sink writes each record once to the file
    #[test]
    fn test_file_sink_line_count(
        mode in prop_oneof![Just(LoggingOutputMode::File), Just(LoggingOutputMode::Both)],
        count in 0usize..30,
    ) {
        let fs = MemoryFileSystem::new();
        let logger = Logger::builder()
            .mode(mode)
            .directory("logs")
            .file("p.log")
            .filesystem(Arc::new(fs.clone()))
            .console(Arc::new(CapturedConsole::new()))
            .build()
            .unwrap();

        for i in 0..count {
            logger.debug(format!("n{}", i));
        }

        let lines = fs.contents_string("logs/p.log").map_or(0, |c| c.lines().count());
        prop_assert_eq!(lines, count);
    }
}
