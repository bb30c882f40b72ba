use std::{
    error::Error,
    fmt,
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use severity::Severity;

use super::LogSink;

/// Writes plain text lines to a byte stream, stderr by default.
///
/// Output is `"<LEVEL> <line>"`, followed by `": <error>"` and one indented
/// `caused by:` line per error source. Write failures are dropped.
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self { writer: Mutex::new(Box::new(writer)) }
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, level: Severity, line: &str, error: Option<&(dyn Error + 'static)>) {
        if !level.is_level() {
            return;
        }
        let mut text = format!("{level:<5} {line}");
        if let Some(error) = error {
            text.push_str(&format!(": {error}"));
            let mut source = error.source();
            while let Some(cause) = source {
                text.push_str(&format!("\n  caused by: {cause}"));
                source = cause.source();
            }
        }
        text.push('\n');

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.write_all(text.as_bytes()).and_then(|()| writer.flush());
    }
}
