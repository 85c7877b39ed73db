//! Field policies and label dispatch.
//!
//! [`Masker`] carries no state: each method computes its masking parameters
//! from the input's character count and hands them to one of the primitives in
//! [`crate::policy::text`]. [`DEFAULT`] and the free functions at the bottom of
//! this module are conveniences over a shared instance.

use crate::policy::{FieldKind, MASK_CHAR, mask_except_first_last, mask_except_last, overlay};

/// Fixed output of [`Masker::password`] for any non-empty input.
pub const PASSWORD_MASK: &str = "************";

/// Fallback for passport series shorter than [`PASSPORT_SERIES_MIN_LEN`].
pub const PASSPORT_SERIES_MASK: &str = "****";

/// Fallback for passport numbers shorter than [`PASSPORT_NUMBER_MIN_LEN`].
pub const PASSPORT_NUMBER_MASK: &str = "******";

/// Fallback for last-four-digits values shorter than [`LAST_FOUR_DIGITS_MIN_LEN`].
pub const LAST_FOUR_DIGITS_MASK: &str = "****";

/// Shortest passport series whose edges are kept.
pub const PASSPORT_SERIES_MIN_LEN: usize = 4;

/// Shortest passport number whose edges are kept.
pub const PASSPORT_NUMBER_MIN_LEN: usize = 6;

/// Shortest value whose last four characters are kept.
pub const LAST_FOUR_DIGITS_MIN_LEN: usize = 5;

/// The shared stateless instance used by the free functions.
pub const DEFAULT: Masker = Masker;

/// Applies per-field masking policies to strings.
///
/// Every method is total: empty input yields empty output, and no input causes
/// a panic. Lengths are counted in Unicode scalar values.
///
/// # Example
/// ```
/// use masker::Masker;
///
/// let masker = Masker::new();
/// assert_eq!(masker.name("Виктор Иванов"), "В**тор И**нов");
/// assert_eq!(masker.email("test.mail@gmail.com"), "tes****il@gmail.com");
/// assert_eq!(masker.mask_by_label("unknown", "kept"), "kept");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Masker;

impl Masker {
    /// Creates a masker. Equivalent to [`DEFAULT`].
    #[must_use]
    pub const fn new() -> Self {
        Masker
    }

    /// Masks `value` with the policy for `label`.
    ///
    /// Unrecognized labels, including the empty label, return `value`
    /// unchanged.
    #[must_use]
    pub fn mask_by_label(self, label: &str, value: &str) -> String {
        match label.parse::<FieldKind>() {
            Ok(kind) => self.apply(kind, value),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    label = _err.label(),
                    "unrecognized field kind label, value passed through unmasked"
                );
                value.to_owned()
            }
        }
    }

    /// Masks `value` with the policy for `kind`.
    #[must_use]
    pub fn apply(self, kind: FieldKind, value: &str) -> String {
        match kind {
            FieldKind::Password => self.password(value),
            FieldKind::Name => self.name(value),
            FieldKind::Email => self.email(value),
            FieldKind::Mobile => self.mobile(value),
            FieldKind::CreditCard => self.credit_card(value),
            FieldKind::PassportSeries => self.passport_series(value),
            FieldKind::PassportNumber => self.passport_number(value),
            FieldKind::Code => self.code(value),
            FieldKind::LastFourDigits => self.last_four_digits(value),
        }
    }

    /// Masks a person's name.
    ///
    /// Surrounding whitespace is trimmed. A multi-part name is split on
    /// whitespace and each part is masked on its own, then rejoined with single
    /// spaces. For a single part:
    ///
    /// | Length | Result                   |
    /// |--------|--------------------------|
    /// | 1      | `*`                      |
    /// | 2..=3  | `[1, 2)` becomes `*`     |
    /// | 4+     | `[1, 3)` becomes `**`    |
    #[must_use]
    pub fn name(self, value: &str) -> String {
        let trimmed = value.trim();
        if trimmed.contains(char::is_whitespace) {
            return trimmed
                .split_whitespace()
                .map(|part| self.name(part))
                .collect::<Vec<_>>()
                .join(" ");
        }

        match trimmed.chars().count() {
            0 => String::new(),
            1 => MASK_CHAR.to_string(),
            2 | 3 => overlay(trimmed, "*", 1, 2),
            _ => overlay(trimmed, "**", 1, 3),
        }
    }

    /// Masks the local part of an email address, keeping the domain.
    ///
    /// Characters `[3, 7)` of the local part become `****`. Short local parts
    /// get the mask appended rather than overlaid, so the output never reveals
    /// the local part's length. Without an `@`, the whole value is treated as
    /// the local part.
    #[must_use]
    pub fn email(self, value: &str) -> String {
        match value.split_once('@') {
            Some((local, domain)) => format!("{}@{domain}", overlay(local, "****", 3, 7)),
            None => overlay(value, "****", 3, 7),
        }
    }

    /// Masks characters `[4, 7)` of a phone number with `***`.
    #[must_use]
    pub fn mobile(self, value: &str) -> String {
        overlay(value, "***", 4, 7)
    }

    /// Masks characters `[6, 12)` of a card number with `******`.
    ///
    /// The leading six (issuer) digits and everything after the twelfth stay
    /// visible, which works for both 15- and 16-digit cards.
    #[must_use]
    pub fn credit_card(self, value: &str) -> String {
        overlay(value, "******", 6, 12)
    }

    /// Replaces any non-empty password with [`PASSWORD_MASK`].
    #[must_use]
    pub fn password(self, value: &str) -> String {
        if value.is_empty() {
            String::new()
        } else {
            PASSWORD_MASK.to_owned()
        }
    }

    /// Keeps the first and last character of a passport series.
    ///
    /// Values shorter than [`PASSPORT_SERIES_MIN_LEN`] become
    /// [`PASSPORT_SERIES_MASK`].
    #[must_use]
    pub fn passport_series(self, value: &str) -> String {
        keep_edges_or(value, PASSPORT_SERIES_MIN_LEN, PASSPORT_SERIES_MASK)
    }

    /// Keeps the first and last character of a passport number.
    ///
    /// Values shorter than [`PASSPORT_NUMBER_MIN_LEN`] become
    /// [`PASSPORT_NUMBER_MASK`].
    #[must_use]
    pub fn passport_number(self, value: &str) -> String {
        keep_edges_or(value, PASSPORT_NUMBER_MIN_LEN, PASSPORT_NUMBER_MASK)
    }

    /// Masks a generic code.
    ///
    /// One character is fully masked; two or three keep only the first; four
    /// or more keep the first and the last.
    #[must_use]
    pub fn code(self, value: &str) -> String {
        match value.chars().count() {
            0 => String::new(),
            1 => MASK_CHAR.to_string(),
            2 | 3 => mask_except_first_last(value, MASK_CHAR, false),
            _ => mask_except_first_last(value, MASK_CHAR, true),
        }
    }

    /// Keeps only the last four characters.
    ///
    /// Values shorter than [`LAST_FOUR_DIGITS_MIN_LEN`] become
    /// [`LAST_FOUR_DIGITS_MASK`].
    #[must_use]
    pub fn last_four_digits(self, value: &str) -> String {
        match value.chars().count() {
            0 => String::new(),
            len if len < LAST_FOUR_DIGITS_MIN_LEN => LAST_FOUR_DIGITS_MASK.to_owned(),
            _ => mask_except_last(value, MASK_CHAR, 4),
        }
    }
}

fn keep_edges_or(value: &str, min_len: usize, fallback: &str) -> String {
    match value.chars().count() {
        0 => String::new(),
        len if len < min_len => fallback.to_owned(),
        _ => mask_except_first_last(value, MASK_CHAR, true),
    }
}

/// Masks `value` with the policy for `label` using [`DEFAULT`].
///
/// Unrecognized labels return `value` unchanged.
#[must_use]
pub fn mask_by_label(label: &str, value: &str) -> String {
    DEFAULT.mask_by_label(label, value)
}

/// See [`Masker::name`].
#[must_use]
pub fn mask_name(value: &str) -> String {
    DEFAULT.name(value)
}

/// See [`Masker::email`].
#[must_use]
pub fn mask_email(value: &str) -> String {
    DEFAULT.email(value)
}

/// See [`Masker::mobile`].
#[must_use]
pub fn mask_mobile(value: &str) -> String {
    DEFAULT.mobile(value)
}

/// See [`Masker::credit_card`].
#[must_use]
pub fn mask_credit_card(value: &str) -> String {
    DEFAULT.credit_card(value)
}

/// See [`Masker::password`].
#[must_use]
pub fn mask_password(value: &str) -> String {
    DEFAULT.password(value)
}

/// See [`Masker::passport_series`].
#[must_use]
pub fn mask_passport_series(value: &str) -> String {
    DEFAULT.passport_series(value)
}

/// See [`Masker::passport_number`].
#[must_use]
pub fn mask_passport_number(value: &str) -> String {
    DEFAULT.passport_number(value)
}

/// See [`Masker::code`].
#[must_use]
pub fn mask_code(value: &str) -> String {
    DEFAULT.code(value)
}

/// See [`Masker::last_four_digits`].
#[must_use]
pub fn mask_last_four_digits(value: &str) -> String {
    DEFAULT.last_four_digits(value)
}

// =============================================================================
// Tests
// =============================================================================
