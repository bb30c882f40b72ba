use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Everything passes by default so the log gate decides what is emitted. The
/// gate's own bookkeeping events stay quiet unless asked for.
const DEFAULT_DIRECTIVES: &str = "trace,minlog::gate=info";

/// Logging configuration and initialization.
#[derive(Debug, Default)]
pub struct Logging;

impl Logging {
    pub fn new() -> Self {
        Self
    }

    /// Initializes the tracing subscriber (fmt + EnvFilter) that receives
    /// lines forwarded by `TracingSink`.
    /// Filtering is controlled by `RUST_LOG`; if unset or invalid, defaults to
    /// [`DEFAULT_DIRECTIVES`].
    pub fn early_init(self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
        tracing_subscriber::registry().with(fmt::layer()).with(filter).init();
    }
}
