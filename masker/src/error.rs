//! Error returned by the strict label parser.
//!
//! Masking itself never fails; only [`crate::FieldKind`]'s `FromStr` impl can.

/// A label that does not name any [`crate::FieldKind`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown field kind label `{label}`")]
pub struct UnknownFieldKind {
    label: String,
}

impl UnknownFieldKind {
    pub(crate) fn new(label: &str) -> Self {
        Self {
            label: label.to_owned(),
        }
    }

    /// The label that failed to parse.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::UnknownFieldKind;

    #[test]
    fn message_names_the_label() {
        let err = UnknownFieldKind::new("ssn");
        assert_eq!(err.to_string(), "unknown field kind label `ssn`");
    }
}
