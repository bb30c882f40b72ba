//! Destinations for lines that passed a [`LogGate`](crate::LogGate).

mod console;
mod noop;
mod tracing_sink;

use std::error::Error;

pub use console::ConsoleSink;
pub use noop::NoopSink;
use severity::Severity;
pub use tracing_sink::{TARGET, TracingSink};

/// Writes one already-gated line.
///
/// `level` is one of the five message levels; implementations must treat
/// [`Severity::NONE`] and unnamed values as a silent no-op. `error` is the
/// caller's failure, passed through untouched.
///
/// Any `Fn(Severity, &str, Option<&(dyn Error + 'static)>)` closure that is
/// `Send + Sync` is a sink too.
pub trait LogSink: Send + Sync {
    fn write(&self, level: Severity, line: &str, error: Option<&(dyn Error + 'static)>);
}

impl<F> LogSink for F
where
    F: Fn(Severity, &str, Option<&(dyn Error + 'static)>) + Send + Sync,
{
    fn write(&self, level: Severity, line: &str, error: Option<&(dyn Error + 'static)>) {
        self(level, line, error);
    }
}
