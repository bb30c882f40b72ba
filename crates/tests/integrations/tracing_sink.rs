use std::sync::Arc;

use minlog::{LogGate, LogOptions, LogSink, Severity, TracingSink};
use test_util::TestError;
use tracing::Level;

use crate::capture::{Captured, capture};

#[test]
fn levels_map_one_to_one() {
    let events = capture(|| {
        for level in Severity::LEVELS {
            TracingSink.write(level, "line", None);
        }
    });
    let levels: Vec<Level> = events.iter().map(|event| event.level).collect();
    assert_eq!(levels, vec![Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE]);
    assert!(events.iter().all(|event| event.message == "line"));
}

#[test]
fn none_and_unnamed_levels_emit_nothing() {
    let events = capture(|| {
        TracingSink.write(Severity::NONE, "line", None);
        TracingSink.write(Severity::from_raw(0), "line", None);
        TracingSink.write(Severity::from_raw(7), "line", None);
    });
    assert!(events.is_empty(), "{events:?}");
}

#[test]
fn error_is_recorded_as_a_field() {
    let failure = TestError::Plain("timeout");
    let events = capture(|| TracingSink.write(Severity::WARN, "fetch", Some(&failure)));
    assert_eq!(
        events,
        vec![Captured { level: Level::WARN, message: "fetch".to_owned(), error: Some("timeout".to_owned()) }]
    );
}

#[test]
fn default_gate_forwards_to_tracing() {
    let gate = LogGate::default();
    let events = capture(|| {
        gate.info("up", LogOptions::new().with_category("net"));
        gate.set_error();
        gate.warn("hidden", LogOptions::new());
        gate.error("down", LogOptions::new());
    });
    assert_eq!(events, vec![Captured::new(Level::INFO, "net: up"), Captured::new(Level::ERROR, "down")]);
}

#[test]
fn gate_bookkeeping_stays_off_the_sink_target() {
    let gate = LogGate::with_level(Arc::new(TracingSink), Severity::INFO);
    let events = capture(|| {
        gate.set_debug();
        gate.set_sink(Arc::new(TracingSink));
    });
    assert!(events.is_empty(), "{events:?}");
}
