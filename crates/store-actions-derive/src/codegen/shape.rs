//! `StoreShape` implementation: the field manifest built from `Default`.

use super::TaggedField;
use crate::parse::{StoreInput, Tag};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Generate `impl StoreShape for {Name}`.
pub fn generate(input: &StoreInput, fields: &[TaggedField<'_>]) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;
    let actions_name = format_ident!("{}Actions", struct_name);
    let definition_name = input.definition_name();

    let declarations = fields.iter().map(|field| {
        let ident = field.input.ident();
        let key = field.input.state_key();
        let default = quote! {
            ::serde_json::to_value(&__instance.#ident).unwrap_or(::serde_json::Value::Null)
        };
        match field.tag {
            Some(tag) => {
                let tag = tag_tokens(tag);
                quote! { .tagged(#key, #default, #tag) }
            }
            None => quote! { .field(#key, #default) },
        }
    });

    Ok(quote! {
        impl ::store_actions::StoreShape for #struct_name {
            type Actions = #actions_name;

            fn definition() -> ::store_actions::StoreDefinition {
                #[allow(unused_variables)]
                let __instance: Self = ::core::default::Default::default();
                ::store_actions::StoreDefinition::new(#definition_name)
                    #(#declarations)*
            }
        }
    })
}

fn tag_tokens(tag: Tag) -> TokenStream {
    match tag {
        Tag::Number => quote!(::store_actions::TypeTag::Number),
        Tag::String => quote!(::store_actions::TypeTag::String),
        Tag::Boolean => quote!(::store_actions::TypeTag::Boolean),
        Tag::Array => quote!(::store_actions::TypeTag::Array),
        Tag::Any => quote!(::store_actions::TypeTag::Any),
    }
}
