//! Integration tests for the slog module.
//!
//! These tests verify that the `slog::Value` implementations emit only the
//! masked text under the given key.

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use masker::{
    FieldKind, MaskExt,
    slog::{MaskedValue, SlogMaskedExt},
};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, String>>,
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), val.to_string());
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured.borrow_mut().insert(key.into(), val.into());
        Ok(())
    }
}

fn serialize_to_capture<V: slog::Value>(value: &V, key: &'static str) -> CapturingSerializer {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    let mut serializer = CapturingSerializer::new();
    value.serialize(&record, key, &mut serializer).unwrap();
    serializer
}

#[test]
fn slog_masked_emits_masked_string() {
    let value = "test.mail@gmail.com".slog_masked(FieldKind::Email);
    let serializer = serialize_to_capture(&value, "email");
    assert_eq!(serializer.get("email").as_deref(), Some("tes****il@gmail.com"));
}

#[test]
fn masked_value_exposes_only_masked_text() {
    let value = MaskedValue::new(FieldKind::Password, "hunter2");
    assert_eq!(value.as_str(), "************");
    assert!(!format!("{value:?}").contains("hunter2"));
}

#[test]
fn masked_wrapper_is_a_slog_value() {
    let card = String::from("1234567890123456");
    let serializer = serialize_to_capture(&card.masked_as(FieldKind::CreditCard), "card");
    assert_eq!(serializer.get("card").as_deref(), Some("123456******3456"));
}

#[test]
fn empty_value_is_logged_empty() {
    let serializer = serialize_to_capture(&String::new().slog_masked(FieldKind::Name), "name");
    assert_eq!(serializer.get("name").as_deref(), Some(""));
}
