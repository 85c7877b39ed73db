//! Struct-specific `MaskFields` derivation.
//!
//! This module generates one masking statement per annotated field and
//! collects the `where` predicates needed for fields whose type mentions a
//! generic parameter.

use proc_macro2::{Ident, TokenStream, TokenTree};
use quote::{ToTokens, quote, quote_spanned};
use syn::{DataStruct, Member, Result, WherePredicate, parse_quote, spanned::Spanned};

use crate::{
    crate_root,
    strategy::{Strategy, parse_field_strategy},
};

pub(crate) struct StructOutput {
    pub(crate) body: TokenStream,
    pub(crate) predicates: Vec<WherePredicate>,
}

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<StructOutput> {
    let root = crate_root();
    let params: Vec<Ident> = generics.type_params().map(|p| p.ident.clone()).collect();

    let mut statements = Vec::new();
    let mut predicates = Vec::new();

    for (index, field) in data.fields.into_iter().enumerate() {
        let span = field.span();
        let member = match field.ident {
            Some(ident) => Member::Named(ident),
            None => Member::Unnamed(syn::Index {
                index: u32::try_from(index)
                    .map_err(|_| syn::Error::new(span, "too many fields for #[derive(MaskFields)]"))?,
                span,
            }),
        };
        let ty = &field.ty;
        let generic = mentions_any(ty.to_token_stream(), &params);

        match parse_field_strategy(&field.attrs)? {
            Strategy::Skip => {}
            Strategy::Kind(variant) => {
                if generic {
                    predicates.push(parse_quote! { #ty: #root::MaskText });
                }
                statements.push(quote_spanned! { span =>
                    #root::MaskText::mask_text(&mut self.#member, #root::FieldKind::#variant);
                });
            }
            Strategy::Nested => {
                if generic {
                    predicates.push(parse_quote! { #ty: #root::MaskFields });
                }
                statements.push(quote_spanned! { span =>
                    #root::MaskFields::mask_fields(&mut self.#member);
                });
            }
        }
    }

    Ok(StructOutput {
        body: quote! { #(#statements)* },
        predicates,
    })
}

/// Reports whether `tokens` contains any of `params` as an identifier.
fn mentions_any(tokens: TokenStream, params: &[Ident]) -> bool {
    if params.is_empty() {
        return false;
    }
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => params.contains(&ident),
        TokenTree::Group(group) => mentions_any(group.stream(), params),
        TokenTree::Punct(_) | TokenTree::Literal(_) => false,
    })
}
