//! Severity levels shared by the minlog crates.
//!
//! A [`Severity`] is both the level a message is logged at and the threshold a
//! gate filters against. Lower values are more verbose: a message at `level`
//! passes a `threshold` iff `threshold <= level`.

mod error;

use std::{fmt, str::FromStr};

pub use error::SeverityError;

/// An ordered log severity.
///
/// The named constants cover the five message levels plus [`Severity::NONE`],
/// which is only meaningful as a threshold. Any other integer is accepted as a
/// threshold too; it simply has no name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Severity(i32);

impl Severity {
    /// A lot of information is logged; usually only needed when debugging a problem.
    pub const TRACE: Self = Self(1);
    /// Useful during development.
    pub const DEBUG: Self = Self(2);
    /// Informative messages, typically used in deployment.
    pub const INFO: Self = Self(3);
    /// Important warnings. The application keeps working correctly.
    pub const WARN: Self = Self(4);
    /// Critical errors. The application may no longer work correctly.
    pub const ERROR: Self = Self(5);
    /// No logging at all.
    pub const NONE: Self = Self(6);

    /// The five message levels, most severe first.
    pub const LEVELS: [Self; 5] = [Self::ERROR, Self::WARN, Self::INFO, Self::DEBUG, Self::TRACE];

    pub const fn from_raw(value: i32) -> Self {
        Self(value)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Returns the upper-case name, or `None` for unnamed values.
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::TRACE => Some("TRACE"),
            Self::DEBUG => Some("DEBUG"),
            Self::INFO => Some("INFO"),
            Self::WARN => Some("WARN"),
            Self::ERROR => Some("ERROR"),
            Self::NONE => Some("NONE"),
            _ => None,
        }
    }

    /// Returns true for the five levels a message can be logged at.
    pub const fn is_level(self) -> bool {
        self.0 >= Self::TRACE.0 && self.0 <= Self::ERROR.0
    }

    /// Returns true if a message at `level` passes this threshold.
    pub const fn admits(self, level: Severity) -> bool {
        self.0 <= level.0
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::TRACE
    }
}

impl From<i32> for Severity {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.pad(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for Severity {
    type Err = SeverityError;

    /// Parses a case-insensitive level name or a raw integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SeverityError::Empty);
        }
        if let Ok(value) = s.parse::<i32>() {
            return Ok(Self(value));
        }
        match s.to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::NONE),
            "error" => Ok(Self::ERROR),
            "warn" | "warning" => Ok(Self::WARN),
            "info" => Ok(Self::INFO),
            "debug" => Ok(Self::DEBUG),
            "trace" => Ok(Self::TRACE),
            _ => Err(SeverityError::Unknown(s.to_owned())),
        }
    }
}
