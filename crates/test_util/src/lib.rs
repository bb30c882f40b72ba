//! Test doubles shared by the minlog test suites.

use std::{
    error::Error,
    sync::{Mutex, PoisonError},
};

use minlog::{LogSink, Severity};

/// One call observed by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Severity,
    pub line: String,
    /// The error's `Display` output, if one was passed.
    pub error: Option<String>,
}

impl Record {
    pub fn new(level: Severity, line: impl Into<String>) -> Self {
        Self { level, line: line.into(), error: None }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// A sink that remembers every write, for asserting on what got through a gate.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Record>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    pub fn count_at(&self, level: Severity) -> usize {
        self.lock().iter().filter(|record| record.level == level).count()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(|record| record.line.clone()).collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for RecordingSink {
    fn write(&self, level: Severity, line: &str, error: Option<&(dyn Error + 'static)>) {
        self.lock().push(Record {
            level,
            line: line.to_owned(),
            error: error.map(ToString::to_string),
        });
    }
}

/// Error type for exercising the error pass-through.
#[derive(Debug, thiserror::Error)]
pub enum TestError {
    #[error("{0}")]
    Plain(&'static str),

    #[error("{message}")]
    Wrapped {
        message: &'static str,
        #[source]
        source: Box<TestError>,
    },
}

impl TestError {
    pub fn wrap(self, message: &'static str) -> Self {
        Self::Wrapped { message, source: Box::new(self) }
    }
}
