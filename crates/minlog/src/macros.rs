//! Logging macros that check the gate before evaluating any argument.
//!
//! ```
//! use std::sync::Arc;
//!
//! use minlog::{LogGate, NoopSink};
//!
//! let gate = LogGate::new(Arc::new(NoopSink));
//! let failure = std::io::Error::other("refused");
//! minlog::info!(gate, "listening on port {}", 4433);
//! minlog::warn!(gate, category: "net", "retrying in {}s", 5);
//! minlog::error!(gate, category: "net", error: &failure, "connect failed");
//! minlog::debug!(gate, error: &failure, "raw failure");
//! ```

/// Logs at an explicit level. See the per-level macros for the accepted forms.
#[macro_export]
macro_rules! log {
    ($gate:expr, $level:expr, category: $category:expr, error: $error:expr, $($arg:tt)+) => {{
        let gate: &$crate::LogGate = &$gate;
        let level: $crate::Severity = $level;
        if gate.enabled(level) {
            gate.log(
                level,
                ::core::format_args!($($arg)+),
                $crate::LogOptions::new().with_category($category).with_error($error),
            );
        }
    }};
    ($gate:expr, $level:expr, category: $category:expr, $($arg:tt)+) => {{
        let gate: &$crate::LogGate = &$gate;
        let level: $crate::Severity = $level;
        if gate.enabled(level) {
            gate.log(
                level,
                ::core::format_args!($($arg)+),
                $crate::LogOptions::new().with_category($category),
            );
        }
    }};
    ($gate:expr, $level:expr, error: $error:expr, $($arg:tt)+) => {{
        let gate: &$crate::LogGate = &$gate;
        let level: $crate::Severity = $level;
        if gate.enabled(level) {
            gate.log(
                level,
                ::core::format_args!($($arg)+),
                $crate::LogOptions::new().with_error($error),
            );
        }
    }};
    ($gate:expr, $level:expr, $($arg:tt)+) => {{
        let gate: &$crate::LogGate = &$gate;
        let level: $crate::Severity = $level;
        if gate.enabled(level) {
            gate.log(level, ::core::format_args!($($arg)+), $crate::LogOptions::new());
        }
    }};
}

/// Logs at [`Severity::ERROR`](crate::Severity::ERROR).
///
/// Accepts `gate, [category: expr,] [error: expr,] format, args...`.
#[macro_export]
macro_rules! error {
    ($gate:expr, $($rest:tt)+) => {
        $crate::log!($gate, $crate::Severity::ERROR, $($rest)+)
    };
}

/// Logs at [`Severity::WARN`](crate::Severity::WARN).
#[macro_export]
macro_rules! warn {
    ($gate:expr, $($rest:tt)+) => {
        $crate::log!($gate, $crate::Severity::WARN, $($rest)+)
    };
}

/// Logs at [`Severity::INFO`](crate::Severity::INFO).
#[macro_export]
macro_rules! info {
    ($gate:expr, $($rest:tt)+) => {
        $crate::log!($gate, $crate::Severity::INFO, $($rest)+)
    };
}

/// Logs at [`Severity::DEBUG`](crate::Severity::DEBUG).
#[macro_export]
macro_rules! debug {
    ($gate:expr, $($rest:tt)+) => {
        $crate::log!($gate, $crate::Severity::DEBUG, $($rest)+)
    };
}

/// Logs at [`Severity::TRACE`](crate::Severity::TRACE).
#[macro_export]
macro_rules! trace {
    ($gate:expr, $($rest:tt)+) => {
        $crate::log!($gate, $crate::Severity::TRACE, $($rest)+)
    };
}
