mod gating;
mod macros;
mod tracing_sink;
