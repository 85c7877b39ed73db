//! Adapters for emitting masked values through `tracing`.
//!
//! # Example
//!
//! ```ignore
//! use masker::{FieldKind, tracing::TracingMaskedExt};
//!
//! tracing::info!(email = %user.email.tracing_masked(FieldKind::Email), "signed in");
//! ```

use tracing::field::{DisplayValue, display};

use crate::{display::Masked, policy::FieldKind};

/// Extension trait for logging string-like values in masked form.
///
/// The masked text is computed eagerly, so the raw value is never captured
/// by the returned field value.
pub trait TracingMaskedExt {
    /// Masks `self` as `kind` and wraps it as a `tracing` display value.
    fn tracing_masked(&self, kind: FieldKind) -> DisplayValue<String>;
}

impl<T> TracingMaskedExt for T
where
    T: AsRef<str> + ?Sized,
{
    fn tracing_masked(&self, kind: FieldKind) -> DisplayValue<String> {
        display(kind.mask(self.as_ref()))
    }
}

/// Masks eagerly into a `DisplayValue<String>`, so only the masked text is captured.
impl<'a> From<Masked<'a>> for DisplayValue<String> {
    fn from(masked: Masked<'a>) -> Self {
        display(masked.to_masked_string())
    }
}
