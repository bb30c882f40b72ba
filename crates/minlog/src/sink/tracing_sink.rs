use std::error::Error;

use severity::Severity;

use super::LogSink;

/// Target of every event emitted by [`TracingSink`].
pub const TARGET: &str = "minlog";

/// Emits a `tracing` event at the matching level, falling through silently for
/// anything that is not a message level.
macro_rules! forward {
    ($event:ident, $line:expr, $error:expr) => {
        match $error {
            Some(cause) => tracing::$event!(target: TARGET, error = cause, "{}", $line),
            None => tracing::$event!(target: TARGET, "{}", $line),
        }
    };
}

/// Forwards lines to the `tracing` dispatcher installed by the host.
///
/// Formatting, filtering and output are the subscriber's business. The error,
/// if any, is recorded as an `error` field so subscribers can render its
/// source chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, level: Severity, line: &str, error: Option<&(dyn Error + 'static)>) {
        match level {
            Severity::ERROR => forward!(error, line, error),
            Severity::WARN => forward!(warn, line, error),
            Severity::INFO => forward!(info, line, error),
            Severity::DEBUG => forward!(debug, line, error),
            Severity::TRACE => forward!(trace, line, error),
            _ => {}
        }
    }
}
