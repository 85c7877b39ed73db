//! Integration tests for the tracing feature.
//!
//! These tests verify that label dispatch reports unrecognized labels through
//! a `debug` event carrying the label only, never the value being passed
//! through.

#![cfg(feature = "tracing")]

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex},
};

use masker::mask_by_label;
use tracing::{
    Event, Level, Metadata, Subscriber,
    field::{Field, Visit},
    span,
};

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: Level,
    fields: HashMap<String, String>,
}

// A test subscriber that captures every event's level and fields
#[derive(Clone, Default)]
struct CapturingSubscriber {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CapturingSubscriber {
    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct FieldCapture {
    fields: HashMap<String, String>,
}

impl Visit for FieldCapture {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{value:?}"));
    }
}

impl Subscriber for CapturingSubscriber {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut capture = FieldCapture::default();
        event.record(&mut capture);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: capture.fields,
        });
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {}
}

fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedEvent>) {
    let subscriber = CapturingSubscriber::default();
    let result = tracing::subscriber::with_default(subscriber.clone(), f);
    (result, subscriber.events())
}

#[test]
fn unknown_label_emits_one_debug_event_with_label() {
    let (masked, events) = capture(|| mask_by_label("ssn", "123-45-6789"));

    assert_eq!(masked, "123-45-6789");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::DEBUG);
    assert_eq!(events[0].fields.get("label").map(String::as_str), Some("ssn"));
}

#[test]
fn unknown_label_event_never_contains_value() {
    let (_, events) = capture(|| mask_by_label("ssn", "123-45-6789"));

    for event in &events {
        for (name, value) in &event.fields {
            assert!(!value.contains("123-45-6789"), "field {name} leaked the value");
        }
    }
}

#[test]
fn known_label_emits_no_event() {
    let (masked, events) = capture(|| mask_by_label("mobile", "79191232323"));

    assert_eq!(masked, "7919***2323");
    assert!(events.is_empty());
}
