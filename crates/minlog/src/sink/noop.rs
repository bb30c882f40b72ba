use std::error::Error;

use severity::Severity;

use super::LogSink;

/// Drops every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    #[inline]
    fn write(&self, _level: Severity, _line: &str, _error: Option<&(dyn Error + 'static)>) {}
}
