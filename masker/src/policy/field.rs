//! The closed set of sensitive field kinds and their string labels.

use std::{fmt, str::FromStr};

use crate::{display::Masked, error::UnknownFieldKind, masking::DEFAULT};

/// A kind of sensitive field, each mapped to one masking policy.
///
/// Labels are the snake_case names returned by [`FieldKind::as_str`]. With the
/// `serde` feature the enum (de)serializes to the same labels, so field-kind
/// tables can live in a caller's own configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldKind {
    /// Replaced by a fixed 12-character mask.
    Password,
    /// Each whitespace-separated part keeps its first character(s).
    Name,
    /// Local part partially masked, domain kept.
    Email,
    /// Characters 4..7 masked.
    Mobile,
    /// Characters 6..12 masked, keeping the BIN and the tail.
    #[cfg_attr(feature = "serde", serde(alias = "creditcard"))]
    CreditCard,
    /// First and last character kept once at least 4 long.
    PassportSeries,
    /// First and last character kept once at least 6 long.
    PassportNumber,
    /// Generic code: first (and, from 4 characters, last) character kept.
    Code,
    /// Only the last 4 characters kept once at least 5 long.
    LastFourDigits,
}

impl FieldKind {
    /// Every kind, in label order.
    pub const ALL: [FieldKind; 9] = [
        FieldKind::Password,
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Mobile,
        FieldKind::CreditCard,
        FieldKind::PassportSeries,
        FieldKind::PassportNumber,
        FieldKind::Code,
        FieldKind::LastFourDigits,
    ];

    /// Returns the label for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKind::Password => "password",
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Mobile => "mobile",
            FieldKind::CreditCard => "credit_card",
            FieldKind::PassportSeries => "passport_series",
            FieldKind::PassportNumber => "passport_number",
            FieldKind::Code => "code",
            FieldKind::LastFourDigits => "last_four_digits",
        }
    }

    /// Applies this kind's policy to `value`.
    ///
    /// ```
    /// use masker::FieldKind;
    ///
    /// assert_eq!(FieldKind::CreditCard.mask("1234567890123456"), "123456******3456");
    /// ```
    #[must_use]
    pub fn mask(self, value: &str) -> String {
        DEFAULT.apply(self, value)
    }

    /// Borrows `value` in a wrapper that formats as the masked text.
    #[must_use]
    pub fn masked(self, value: &str) -> Masked<'_> {
        Masked::new(self, value)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    /// Parses a label. Matching is exact; `creditcard` is accepted as an alias
    /// of `credit_card`.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "password" => Ok(FieldKind::Password),
            "name" => Ok(FieldKind::Name),
            "email" => Ok(FieldKind::Email),
            "mobile" => Ok(FieldKind::Mobile),
            "credit_card" | "creditcard" => Ok(FieldKind::CreditCard),
            "passport_series" => Ok(FieldKind::PassportSeries),
            "passport_number" => Ok(FieldKind::PassportNumber),
            "code" => Ok(FieldKind::Code),
            "last_four_digits" => Ok(FieldKind::LastFourDigits),
            _ => Err(UnknownFieldKind::new(label)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FieldKind;

    #[test]
    fn labels_round_trip_through_from_str() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.as_str().parse::<FieldKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn legacy_credit_card_label_is_accepted() {
        assert_eq!("creditcard".parse::<FieldKind>(), Ok(FieldKind::CreditCard));
    }

    #[test]
    fn unknown_labels_are_rejected() {
        let err = "Email".parse::<FieldKind>().unwrap_err();
        assert_eq!(err.label(), "Email");
        assert!("".parse::<FieldKind>().is_err());
        assert!("ssn".parse::<FieldKind>().is_err());
    }

    #[test]
    fn masked_formats_with_kind_policy() {
        let masked = FieldKind::Email.masked("t@gmail.com");
        assert_eq!(masked.kind(), FieldKind::Email);
        assert_eq!(masked.to_string(), "t****@gmail.com");
        assert_eq!(format!("{masked:?}"), "\"t****@gmail.com\"");
    }
}
