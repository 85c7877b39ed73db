//! Parsing of `#[mask(...)]` field attributes.
//!
//! This module maps attribute syntax to masking decisions and produces
//! structured errors for invalid forms.

use proc_macro2::{Ident, Span};
use syn::{Attribute, Meta, Result, spanned::Spanned};

/// Labels accepted inside `#[mask(...)]`, paired with their `FieldKind` variant.
const KINDS: [(&str, &str); 9] = [
    ("password", "Password"),
    ("name", "Name"),
    ("email", "Email"),
    ("mobile", "Mobile"),
    ("credit_card", "CreditCard"),
    ("passport_series", "PassportSeries"),
    ("passport_number", "PassportNumber"),
    ("code", "Code"),
    ("last_four_digits", "LastFourDigits"),
];

/// Field masking strategy based on `#[mask(...)]` attributes.
///
/// | Attribute          | Strategy        | Behavior                               |
/// |--------------------|-----------------|----------------------------------------|
/// | None               | `Skip`          | Field left untouched                   |
/// | `#[mask(email)]`   | `Kind(Email)`   | `MaskText::mask_text` with that kind   |
/// | `#[mask(nested)]`  | `Nested`        | `MaskFields::mask_fields` on the field |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    Skip,
    /// Holds the `FieldKind` variant identifier.
    Kind(Ident),
    Nested,
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[mask] attributes on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

fn expected_kinds() -> String {
    KINDS
        .iter()
        .map(|(label, _)| *label)
        .chain(std::iter::once("nested"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_kind(ident: &Ident) -> Result<Strategy> {
    let label = ident.to_string();
    if label == "nested" {
        return Ok(Strategy::Nested);
    }
    KINDS
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map(|(_, variant)| Strategy::Kind(Ident::new(variant, ident.span())))
        .ok_or_else(|| {
            syn::Error::new(
                ident.span(),
                format!("unknown field kind `{label}`, expected one of: {}", expected_kinds()),
            )
        })
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("mask") {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => match syn::parse2::<Ident>(list.tokens.clone()) {
                Ok(ident) => {
                    set_strategy(&mut strategy, parse_kind(&ident)?, attr.span())?;
                }
                Err(_) => {
                    return Err(syn::Error::new(
                        attr.span(),
                        "expected a single field kind (e.g., #[mask(email)])",
                    ));
                }
            },
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "missing field kind: use #[mask(kind)] (e.g., #[mask(email)], #[mask(nested)])",
                ));
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected #[mask(kind)] syntax (e.g., #[mask(email)])",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::Skip))
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_returns_skip() {
        let attrs = parse_attrs(quote! {});
        let strategy = parse_field_strategy(&attrs).unwrap();
        assert!(matches!(strategy, Strategy::Skip));
    }

    #[test]
    fn unrelated_attributes_are_ignored() {
        let attrs = parse_attrs(quote! { #[doc = "customer"] #[allow(dead_code)] });
        let strategy = parse_field_strategy(&attrs).unwrap();
        assert!(matches!(strategy, Strategy::Skip));
    }

    #[test]
    fn kind_maps_to_variant() {
        let attrs = parse_attrs(quote! { #[mask(last_four_digits)] });
        match parse_field_strategy(&attrs).unwrap() {
            Strategy::Kind(variant) => assert_eq!(variant, "LastFourDigits"),
            other => panic!("expected Kind, got {other:?}"),
        }
    }

    #[test]
    fn nested_is_recognized() {
        let attrs = parse_attrs(quote! { #[mask(nested)] });
        let strategy = parse_field_strategy(&attrs).unwrap();
        assert!(matches!(strategy, Strategy::Nested));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let attrs = parse_attrs(quote! { #[mask(ssn)] });
        let err = parse_field_strategy(&attrs).unwrap_err();
        assert!(err.to_string().contains("unknown field kind `ssn`"));
    }

    #[test]
    fn bare_attribute_is_rejected() {
        let attrs = parse_attrs(quote! { #[mask] });
        let err = parse_field_strategy(&attrs).unwrap_err();
        assert!(err.to_string().contains("missing field kind"));
    }

    #[test]
    fn name_value_is_rejected() {
        let attrs = parse_attrs(quote! { #[mask = "email"] });
        assert!(parse_field_strategy(&attrs).is_err());
    }

    #[test]
    fn multiple_kinds_in_one_attribute_are_rejected() {
        let attrs = parse_attrs(quote! { #[mask(email, name)] });
        assert!(parse_field_strategy(&attrs).is_err());
    }

    #[test]
    fn duplicate_attributes_are_rejected() {
        let attrs = parse_attrs(quote! { #[mask(email)] #[mask(name)] });
        let err = parse_field_strategy(&attrs).unwrap_err();
        assert!(err.to_string().contains("multiple #[mask]"));
    }
}
