//! In-place masking of struct fields.
//!
//! - [`MaskFields`]: implemented by `#[derive(MaskFields)]` for structs
//! - [`MaskText`]: the string-like leaf types a `#[mask(kind)]` field may have

use crate::policy::FieldKind;

/// Masks the annotated fields of a value in place.
///
/// Usually derived:
///
/// ```
/// use masker::MaskFields;
///
/// #[derive(MaskFields)]
/// struct Customer {
///     id: u64,
///     #[mask(name)]
///     full_name: String,
///     #[mask(email)]
///     email: Option<String>,
/// }
///
/// let customer = Customer {
///     id: 7,
///     full_name: "Charles Dickens".into(),
///     email: Some("test.mail@gmail.com".into()),
/// }
/// .masked();
///
/// assert_eq!(customer.id, 7);
/// assert_eq!(customer.full_name, "C**rles D**kens");
/// assert_eq!(customer.email.as_deref(), Some("tes****il@gmail.com"));
/// ```
pub trait MaskFields {
    /// Replaces every annotated field with its masked form.
    fn mask_fields(&mut self);

    /// Consumes `self` and returns it with every annotated field masked.
    #[must_use]
    fn masked(mut self) -> Self
    where
        Self: Sized,
    {
        self.mask_fields();
        self
    }
}

impl<T: MaskFields> MaskFields for Option<T> {
    fn mask_fields(&mut self) {
        if let Some(inner) = self {
            inner.mask_fields();
        }
    }
}

impl<T: MaskFields> MaskFields for Vec<T> {
    fn mask_fields(&mut self) {
        for item in self {
            item.mask_fields();
        }
    }
}

impl<T: MaskFields + ?Sized> MaskFields for Box<T> {
    fn mask_fields(&mut self) {
        (**self).mask_fields();
    }
}

/// A string-like leaf that can be masked in place with a field policy.
pub trait MaskText {
    /// Replaces the text with its masked form under `kind`.
    fn mask_text(&mut self, kind: FieldKind);
}

impl MaskText for String {
    fn mask_text(&mut self, kind: FieldKind) {
        *self = kind.mask(self.as_str());
    }
}

impl<T: MaskText> MaskText for Option<T> {
    fn mask_text(&mut self, kind: FieldKind) {
        if let Some(inner) = self {
            inner.mask_text(kind);
        }
    }
}

impl<T: MaskText> MaskText for Vec<T> {
    fn mask_text(&mut self, kind: FieldKind) {
        for item in self {
            item.mask_text(kind);
        }
    }
}

impl<T: MaskText + ?Sized> MaskText for Box<T> {
    fn mask_text(&mut self, kind: FieldKind) {
        (**self).mask_text(kind);
    }
}
