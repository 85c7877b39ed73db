//! Adapters for emitting masked values through `slog`.
//!
//! This module provides `slog::Value` implementations that emit only the
//! masked form of a value. It does not configure `slog` or choose which
//! fields are sensitive.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{display::Masked, policy::FieldKind};

/// An already-masked string, logged as a plain `slog` string value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedValue(String);

impl MaskedValue {
    /// Masks `value` as `kind`.
    #[must_use]
    pub fn new(kind: FieldKind, value: &str) -> Self {
        Self(kind.mask(value))
    }

    /// The masked text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SlogValue for MaskedValue {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.0)
    }
}

impl SlogValue for Masked<'_> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.to_masked_string())
    }
}

/// Extension trait for ergonomic slog logging of masked values.
///
/// ## Example
/// ```ignore
/// use masker::{FieldKind, slog::SlogMaskedExt};
///
/// info!(logger, "signed in"; "email" => user.email.slog_masked(FieldKind::Email));
/// ```
pub trait SlogMaskedExt {
    /// Masks `self` as `kind` and returns a `slog::Value` holding only the
    /// masked text.
    fn slog_masked(&self, kind: FieldKind) -> MaskedValue;
}

impl<T> SlogMaskedExt for T
where
    T: AsRef<str> + ?Sized,
{
    fn slog_masked(&self, kind: FieldKind) -> MaskedValue {
        MaskedValue::new(kind, self.as_ref())
    }
}
