use std::{cell::Cell, sync::Arc};

use minlog::{LogGate, Severity};
use test_util::{Record, RecordingSink, TestError};

fn expensive(calls: &Cell<u32>) -> u32 {
    calls.set(calls.get() + 1);
    42
}

#[test]
fn arguments_are_not_evaluated_when_gated_off() {
    let sink = Arc::new(RecordingSink::new());
    let gate = LogGate::with_level(sink.clone(), Severity::WARN);
    let calls = Cell::new(0);

    minlog::info!(gate, "value {}", expensive(&calls));
    minlog::debug!(gate, category: "calc", "value {}", expensive(&calls));
    minlog::trace!(gate, "value {}", expensive(&calls));

    assert_eq!(calls.get(), 0);
    assert_eq!(sink.count(), 0);
}

#[test]
fn arguments_are_evaluated_once_when_open() {
    let sink = Arc::new(RecordingSink::new());
    let gate = LogGate::new(sink.clone());
    let calls = Cell::new(0);

    minlog::warn!(gate, "value {}", expensive(&calls));

    assert_eq!(calls.get(), 1);
    assert_eq!(sink.records(), vec![Record::new(Severity::WARN, "value 42")]);
}

#[test]
fn every_option_form() {
    let sink = Arc::new(RecordingSink::new());
    let gate = Arc::new(LogGate::new(sink.clone()));
    let failure = TestError::Plain("refused");
    let port = 4433;

    minlog::error!(gate, "plain {port}");
    minlog::error!(gate, category: "net", "with category");
    minlog::error!(gate, error: &failure, "with error");
    minlog::error!(gate, category: "net", error: &failure, "with both");
    minlog::log!(gate, Severity::INFO, "explicit level");

    assert_eq!(
        sink.records(),
        vec![
            Record::new(Severity::ERROR, "plain 4433"),
            Record::new(Severity::ERROR, "net: with category"),
            Record::new(Severity::ERROR, "with error").with_error("refused"),
            Record::new(Severity::ERROR, "net: with both").with_error("refused"),
            Record::new(Severity::INFO, "explicit level"),
        ]
    );
}

#[test]
fn none_level_is_a_no_op() {
    let sink = Arc::new(RecordingSink::new());
    let gate = LogGate::with_level(sink.clone(), Severity::from_raw(i32::MIN));
    minlog::log!(gate, Severity::NONE, "never");
    assert_eq!(sink.count(), 0);
}
