use std::{
    fmt,
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{AtomicU64, Ordering},
    },
};

use severity::Severity;

use crate::{Gates, LogOptions, LogSink, TracingSink};

/// Target used for the gate's own diagnostics, kept apart from forwarded lines.
const GATE_TARGET: &str = "minlog::gate";

/// Packs a threshold and its derived gates into one word: the low 32 bits hold
/// the raw threshold, the next 8 the gate bits.
const fn pack(threshold: Severity) -> u64 {
    let gates = Gates::for_threshold(threshold).to_bits() as u64;
    (gates << 32) | threshold.raw() as u32 as u64
}

const fn unpack_threshold(state: u64) -> Severity {
    Severity::from_raw(state as u32 as i32)
}

const fn unpack_gates(state: u64) -> Gates {
    Gates::from_bits((state >> 32) as u8)
}

/// Level-filtered front end to a [`LogSink`].
///
/// Holds a threshold, the five gates derived from it, and the active sink.
/// Calls below the threshold return before the message is rendered.
///
/// The gate is meant to be built once at the composition root and passed by
/// reference to the components that log.
pub struct LogGate {
    state: AtomicU64,
    fixed: bool,
    sink: RwLock<Arc<dyn LogSink>>,
}

impl LogGate {
    /// Creates a gate that logs everything, leaving filtering to the sink.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::with_level(sink, Severity::TRACE)
    }

    pub fn with_level(sink: Arc<dyn LogSink>, level: Severity) -> Self {
        Self { state: AtomicU64::new(pack(level)), fixed: false, sink: RwLock::new(sink) }
    }

    /// Creates a gate whose threshold can never change. [`LogGate::set_level`]
    /// on it has no effect.
    pub fn fixed(sink: Arc<dyn LogSink>, level: Severity) -> Self {
        Self { fixed: true, ..Self::with_level(sink, level) }
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Returns the current threshold.
    pub fn level(&self) -> Severity {
        unpack_threshold(self.state.load(Ordering::Acquire))
    }

    /// Returns a snapshot of all five gates.
    pub fn gates(&self) -> Gates {
        unpack_gates(self.state.load(Ordering::Acquire))
    }

    /// Returns whether a message at `level` would currently reach the sink.
    #[inline]
    pub fn enabled(&self, level: Severity) -> bool {
        self.gates().is_open(level)
    }

    /// Sets the threshold and recomputes every gate.
    ///
    /// Any integer is accepted. Values without a name compare numerically
    /// against the five levels.
    pub fn set_level(&self, level: Severity) {
        if self.fixed {
            tracing::debug!(
                target: GATE_TARGET,
                requested = %level,
                fixed = %self.level(),
                "ignoring threshold change on fixed gate"
            );
            return;
        }
        self.state.store(pack(level), Ordering::Release);
        tracing::trace!(target: GATE_TARGET, threshold = %level, "threshold changed");
    }

    pub fn set_none(&self) {
        self.set_level(Severity::NONE);
    }

    pub fn set_error(&self) {
        self.set_level(Severity::ERROR);
    }

    pub fn set_warn(&self) {
        self.set_level(Severity::WARN);
    }

    pub fn set_info(&self) {
        self.set_level(Severity::INFO);
    }

    pub fn set_debug(&self) {
        self.set_level(Severity::DEBUG);
    }

    pub fn set_trace(&self) {
        self.set_level(Severity::TRACE);
    }

    /// Returns the active sink.
    pub fn sink(&self) -> Arc<dyn LogSink> {
        Arc::clone(&self.sink.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replaces the active sink and returns the previous one.
    pub fn set_sink(&self, sink: Arc<dyn LogSink>) -> Arc<dyn LogSink> {
        let previous = {
            let mut slot = self.sink.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *slot, sink)
        };
        tracing::trace!(target: GATE_TARGET, "sink replaced");
        previous
    }

    /// Forwards `message` to the sink if the gate for `level` is open.
    ///
    /// The line is `"<category>: <message>"`, or just the message when no
    /// (or an empty) category is given. [`Severity::NONE`] and unnamed levels
    /// are never forwarded.
    pub fn log(&self, level: Severity, message: impl fmt::Display, options: LogOptions<'_>) {
        if !self.enabled(level) {
            return;
        }
        let line = compose_line(options.category, &message);
        // Clone out of the lock so a sink may swap itself while writing.
        let sink = self.sink();
        sink.write(level, &line, options.error);
    }

    pub fn error(&self, message: impl fmt::Display, options: LogOptions<'_>) {
        self.log(Severity::ERROR, message, options);
    }

    pub fn warn(&self, message: impl fmt::Display, options: LogOptions<'_>) {
        self.log(Severity::WARN, message, options);
    }

    pub fn info(&self, message: impl fmt::Display, options: LogOptions<'_>) {
        self.log(Severity::INFO, message, options);
    }

    pub fn debug(&self, message: impl fmt::Display, options: LogOptions<'_>) {
        self.log(Severity::DEBUG, message, options);
    }

    pub fn trace(&self, message: impl fmt::Display, options: LogOptions<'_>) {
        self.log(Severity::TRACE, message, options);
    }
}

impl Default for LogGate {
    /// A TRACE gate forwarding to [`TracingSink`].
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

impl fmt::Debug for LogGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.load(Ordering::Acquire);
        f.debug_struct("LogGate")
            .field("level", &format_args!("{}", unpack_threshold(state)))
            .field("gates", &unpack_gates(state))
            .field("fixed", &self.fixed)
            .finish_non_exhaustive()
    }
}

fn compose_line(category: Option<&str>, message: &dyn fmt::Display) -> String {
    match category {
        Some(category) if !category.is_empty() => format!("{category}: {message}"),
        _ => message.to_string(),
    }
}
