use std::sync::Arc;

use minlog::{Gates, LogGate, LogOptions, Severity};
use test_util::{Record, RecordingSink};

fn recording_gate() -> (LogGate, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    (LogGate::new(sink.clone()), sink)
}

fn log_at_every_level(gate: &LogGate) {
    gate.error("e", LogOptions::new());
    gate.warn("w", LogOptions::new());
    gate.info("i", LogOptions::new());
    gate.debug("d", LogOptions::new());
    gate.trace("t", LogOptions::new());
}

#[test]
fn sink_sees_exactly_the_open_levels() {
    let (gate, sink) = recording_gate();
    for raw in -3..=10 {
        gate.set_level(Severity::from_raw(raw));
        sink.clear();
        log_at_every_level(&gate);
        for level in Severity::LEVELS {
            let expected = usize::from(raw <= level.raw());
            assert_eq!(sink.count_at(level), expected, "threshold {raw}, level {level}");
        }
    }
}

#[test]
fn none_silences_every_level() {
    let (gate, sink) = recording_gate();
    gate.set_none();
    assert_eq!(gate.gates(), Gates { error: false, warn: false, info: false, debug: false, trace: false });
    log_at_every_level(&gate);
    assert_eq!(sink.count(), 0);
}

#[test]
fn trace_opens_every_level() {
    let (gate, sink) = recording_gate();
    gate.set_none();
    gate.set_trace();
    assert_eq!(gate.gates(), Gates { error: true, warn: true, info: true, debug: true, trace: true });
    log_at_every_level(&gate);
    assert_eq!(sink.lines(), vec!["e", "w", "i", "d", "t"]);
}

#[test]
fn repeated_set_level_changes_nothing() {
    let (gate, _sink) = recording_gate();
    for level in Severity::LEVELS.into_iter().chain([Severity::NONE, Severity::from_raw(0)]) {
        gate.set_level(level);
        let once = (gate.level(), gate.gates());
        gate.set_level(level);
        assert_eq!((gate.level(), gate.gates()), once);
    }
}

#[test]
fn category_formatting() {
    let (gate, sink) = recording_gate();
    gate.error("boom", LogOptions::new().with_category("Cat"));
    gate.error("boom", LogOptions::new());
    assert_eq!(sink.lines(), vec!["Cat: boom", "boom"]);
}

#[test]
fn swapped_sink_gets_later_calls_only() {
    let (gate, old) = recording_gate();
    let new = Arc::new(RecordingSink::new());
    gate.warn("one", LogOptions::new());
    gate.set_sink(new.clone());
    gate.warn("two", LogOptions::new());
    gate.error("three", LogOptions::new());

    assert_eq!(old.records(), vec![Record::new(Severity::WARN, "one")]);
    assert_eq!(
        new.records(),
        vec![Record::new(Severity::WARN, "two"), Record::new(Severity::ERROR, "three")]
    );
}

#[test]
fn fixed_gate_keeps_its_threshold() {
    let sink = Arc::new(RecordingSink::new());
    let gate = LogGate::fixed(sink.clone(), Severity::INFO);
    gate.set_none();
    log_at_every_level(&gate);
    assert_eq!(sink.lines(), vec!["e", "w", "i"]);
}
