//! Masked formatting support.
//!
//! - [`Masked`]: borrows a value and formats it with a field policy applied
//! - [`MaskExt`]: builds a [`Masked`] from anything string-like

use std::fmt;

use crate::policy::FieldKind;

// =============================================================================
// Masked - Display wrapper for masked values
// =============================================================================

/// Borrowed value that formats as its masked form.
///
/// Both `Display` and `Debug` print the masked text, so the raw value cannot
/// leak through either formatter.
///
/// ```
/// use masker::{FieldKind, MaskExt};
///
/// let email = String::from("test.mail@gmail.com");
/// assert_eq!(format!("{}", email.masked_as(FieldKind::Email)), "tes****il@gmail.com");
/// assert_eq!(format!("{:?}", email.masked_as(FieldKind::Email)), "\"tes****il@gmail.com\"");
/// ```
#[derive(Clone, Copy)]
pub struct Masked<'a> {
    kind: FieldKind,
    value: &'a str,
}

impl<'a> Masked<'a> {
    /// Wraps `value` for masking as `kind`.
    #[must_use]
    pub fn new(kind: FieldKind, value: &'a str) -> Self {
        Self { kind, value }
    }

    /// The field kind whose policy is applied.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Computes the masked text.
    #[must_use]
    pub fn to_masked_string(&self) -> String {
        self.kind.mask(self.value)
    }
}

impl fmt::Display for Masked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_masked_string())
    }
}

impl fmt::Debug for Masked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_masked_string(), f)
    }
}

// =============================================================================
// MaskExt - Extension trait for string-like values
// =============================================================================

/// Extension trait for formatting string-like values in masked form.
pub trait MaskExt {
    /// Wraps `self` so that formatting it applies the policy for `kind`.
    fn masked_as(&self, kind: FieldKind) -> Masked<'_>;
}

impl<T> MaskExt for T
where
    T: AsRef<str> + ?Sized,
{
    fn masked_as(&self, kind: FieldKind) -> Masked<'_> {
        Masked::new(kind, self.as_ref())
    }
}
