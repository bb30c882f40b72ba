//! minlog
//!
//! A low overhead, level-filtered logging facade. A [`LogGate`] holds a
//! threshold and five cheap per-level gates; calls that pass are formatted as
//! `"<category>: <message>"` and handed to a replaceable [`LogSink`].
//!
//! - [`TracingSink`] forwards to the `tracing` dispatcher and is the default.
//! - [`ConsoleSink`] writes plain text to stderr or any writer.
//! - [`NoopSink`] drops everything.
//!
//! ```
//! use std::sync::Arc;
//!
//! use minlog::{LogGate, LogOptions, Severity, TracingSink};
//!
//! let gate = LogGate::new(Arc::new(TracingSink));
//! gate.set_warn();
//! assert!(!gate.enabled(Severity::INFO));
//! gate.warn("cache miss", LogOptions::new().with_category("store"));
//! ```

mod gate;
mod gates;
mod macros;
mod options;
pub mod sink;

pub use gate::LogGate;
pub use gates::Gates;
pub use options::LogOptions;
pub use severity::{Severity, SeverityError};
pub use sink::{ConsoleSink, LogSink, NoopSink, TracingSink};
