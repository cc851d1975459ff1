//! Appender trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// One sink the router writes through.
///
/// `append` performs exactly one write per record and keeps nothing buffered
/// between calls, so appenders are shared without a lock.
pub trait Appender: Send + Sync {
    fn append(&self, record: &LogRecord) -> Result<()>;
    fn name(&self) -> &str;
}
