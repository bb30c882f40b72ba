//! Environment configuration for the host's log gate.

use std::{str::FromStr, sync::Arc};

use minlog::{ConsoleSink, LogGate, LogSink, NoopSink, Severity, SeverityError, TracingSink};

/// Threshold of the gate, in `Severity` syntax (`warn`, `none`, `3`, ...).
pub const LEVEL_VAR: &str = "MINLOG_LEVEL";
/// Which sink the gate writes to: `tracing`, `console` or `none`.
pub const SINK_VAR: &str = "MINLOG_SINK";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {source}")]
    InvalidLevel {
        var: &'static str,
        #[source]
        source: SeverityError,
    },

    #[error("invalid {var}: unknown sink {value:?} (expected tracing, console or none)")]
    UnknownSink { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkKind {
    #[default]
    Tracing,
    Console,
    None,
}

impl SinkKind {
    fn build(self) -> Arc<dyn LogSink> {
        match self {
            Self::Tracing => Arc::new(TracingSink),
            Self::Console => Arc::new(ConsoleSink::stderr()),
            Self::None => Arc::new(NoopSink),
        }
    }
}

impl FromStr for SinkKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tracing" => Ok(Self::Tracing),
            "console" | "stderr" => Ok(Self::Console),
            "none" | "off" => Ok(Self::None),
            _ => Err(ConfigError::UnknownSink { var: SINK_VAR, value: s.to_owned() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostConfig {
    pub level: Severity,
    pub sink: SinkKind,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`; missing keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let level = match lookup(LEVEL_VAR) {
            Some(raw) => raw
                .parse::<Severity>()
                .map_err(|source| ConfigError::InvalidLevel { var: LEVEL_VAR, source })?,
            None => Severity::default(),
        };
        let sink = match lookup(SINK_VAR) {
            Some(raw) => raw.parse::<SinkKind>()?,
            None => SinkKind::default(),
        };
        Ok(Self { level, sink })
    }

    /// Builds the process's single log gate.
    pub fn build_gate(&self) -> LogGate {
        LogGate::with_level(self.sink.build(), self.level)
    }
}
