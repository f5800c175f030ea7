//! Code generation for Store derive macro.

mod actions;
mod shape;

use crate::field_kind::FieldKind;
use crate::parse::{FieldInput, StoreInput, Tag};
use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// A field with its validated tag.
pub struct TaggedField<'a> {
    pub input: &'a FieldInput,
    pub tag: Option<Tag>,
    pub kind: FieldKind,
}

/// Main entry point for code generation.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = StoreInput::from_derive_input(input)
        .map_err(|e| syn::Error::new_spanned(input, e.to_string()))?;

    if !parsed.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &parsed.generics,
            "#[derive(Store)] does not support generic structs",
        ));
    }

    let mut fields = Vec::new();
    for field in parsed.fields() {
        let tag = field.tag()?;
        let kind = FieldKind::from_type(&field.ty);

        if tag == Some(Tag::Array) && kind.element().is_none() {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "#[store(array)] requires a Vec<T> field",
            ));
        }

        fields.push(TaggedField {
            input: field,
            tag,
            kind,
        });
    }

    let shape_impl = shape::generate(&parsed, &fields)?;
    let actions = actions::generate(&parsed, &fields)?;

    Ok(quote! {
        #shape_impl
        #actions
    })
}
