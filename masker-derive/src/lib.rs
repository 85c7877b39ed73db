//! Derive macro for `masker`.
//!
//! This crate generates the code behind `#[derive(MaskFields)]`. It:
//! - reads `#[mask(...)]` field attributes
//! - emits a `masker::MaskFields` implementation that masks each annotated
//!   field in place
//!
//! It does **not** define field kinds or masking policies. Those live in the
//! main `masker` crate and are applied at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input};

mod derive_struct;
mod strategy;
use derive_struct::{StructOutput, derive_struct};

/// Derives `masker::MaskFields` for structs.
///
/// # Field Attributes
///
/// - **No annotation**: the field is left untouched.
///
/// - `#[mask(kind)]`: masks the field in place with the policy for `kind`, one
///   of `password`, `name`, `email`, `mobile`, `credit_card`,
///   `passport_series`, `passport_number`, `code` or `last_four_digits`. The
///   field type must implement `masker::MaskText` (`String`, and `Option`,
///   `Vec` or `Box` of one).
///
/// - `#[mask(nested)]`: calls `masker::MaskFields::mask_fields` on the field,
///   for nested structs that derive `MaskFields` themselves.
///
/// Fields whose type mentions a generic parameter get the matching
/// `MaskText` or `MaskFields` bound added to the generated impl.
///
/// Enums and unions are rejected at compile time.
#[proc_macro_derive(MaskFields, attributes(mask))]
pub fn derive_mask_fields(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        mut generics,
        data,
        ..
    } = input;

    let StructOutput { body, predicates } = match data {
        Data::Struct(data) => derive_struct(data, &generics)?,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "`MaskFields` can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "`MaskFields` cannot be derived for unions",
            ));
        }
    };

    if !predicates.is_empty() {
        generics.make_where_clause().predicates.extend(predicates);
    }

    let root = crate_root();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #root::MaskFields for #ident #ty_generics #where_clause {
            fn mask_fields(&mut self) {
                #body
            }
        }
    })
}

/// Returns the token stream to reference the `masker` crate root.
///
/// Handles crate renaming (e.g., `pii = { package = "masker", ... }`). Inside
/// `masker` itself the path resolves through its `extern crate self as masker`.
pub(crate) fn crate_root() -> TokenStream {
    match crate_name("masker") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::masker },
    }
}
