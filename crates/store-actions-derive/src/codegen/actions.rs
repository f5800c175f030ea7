//! Typed action wrapper generation.
//!
//! Generates `{Name}Actions`, which flattens the per-field action table of
//! an `AugmentedStore` into snake-case methods (`get_count`,
//! `increment_count`, `bears_has_item`, ...).

use super::TaggedField;
use crate::parse::{StoreInput, Tag};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Generate the wrapper struct, its `From` impl and its methods.
pub fn generate(input: &StoreInput, fields: &[TaggedField<'_>]) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;
    let actions_name = format_ident!("{}Actions", struct_name);
    let vis = &input.vis;

    let mut methods = TokenStream::new();
    for field in fields {
        if let Some(tag) = field.tag {
            methods.extend(generate_field_methods(field, tag));
        }
    }

    let doc = format!("Generated actions of [`{}`].", struct_name);

    Ok(quote! {
        #[doc = #doc]
        #[derive(Clone, Debug)]
        #vis struct #actions_name {
            store: ::store_actions::AugmentedStore,
        }

        impl ::core::convert::From<::store_actions::AugmentedStore> for #actions_name {
            fn from(store: ::store_actions::AugmentedStore) -> Self {
                Self { store }
            }
        }

        impl #actions_name {
            /// The underlying action table.
            pub fn store(&self) -> &::store_actions::AugmentedStore {
                &self.store
            }

            #methods
        }
    })
}

fn generate_field_methods(field: &TaggedField<'_>, tag: Tag) -> TokenStream {
    let ident = field.input.ident();
    let field_ty = &field.input.ty;
    let key = field.input.state_key();

    let get_name = format_ident!("get_{}", ident);
    let set_name = format_ident!("set_{}", ident);

    let mut methods = quote! {
        /// Read the field's current value.
        pub fn #get_name(&self) -> ::store_actions::StoreResult<#field_ty> {
            self.store.actions(#key)?.get_as()
        }

        /// Replace the field's value.
        pub fn #set_name(&self, value: #field_ty) -> ::store_actions::StoreResult<()> {
            self.store.actions(#key)?.set_as(&value)
        }
    };

    match tag {
        Tag::Number => {
            let reset_name = format_ident!("reset_{}", ident);
            let increment_name = format_ident!("increment_{}", ident);
            methods.extend(quote! {
                /// Set the field to zero.
                pub fn #reset_name(&self) -> ::store_actions::StoreResult<()> {
                    self.store.actions(#key)?.reset()
                }

                /// Add one to the field.
                pub fn #increment_name(&self) -> ::store_actions::StoreResult<()> {
                    self.store.actions(#key)?.increment()
                }
            });
        }
        Tag::Boolean => {
            let toggle_name = format_ident!("toggle_{}", ident);
            methods.extend(quote! {
                /// Negate the field.
                pub fn #toggle_name(&self) -> ::store_actions::StoreResult<()> {
                    self.store.actions(#key)?.toggle()
                }
            });
        }
        Tag::Array => {
            // Validated in `expand`: array fields are `Vec<T>`.
            let Some(item_ty) = field.kind.element() else {
                return methods;
            };
            let has_item_name = format_ident!("{}_has_item", ident);
            let add_name = format_ident!("add_{}", ident);
            let remove_name = format_ident!("remove_{}", ident);
            methods.extend(quote! {
                /// Whether the array holds an element equal to `item`.
                pub fn #has_item_name(&self, item: &#item_ty) -> ::store_actions::StoreResult<bool> {
                    let item = ::serde_json::to_value(item)?;
                    self.store.actions(#key)?.has_item(&item)
                }

                /// Append `item` to the array.
                pub fn #add_name(&self, item: #item_ty) -> ::store_actions::StoreResult<()> {
                    let item = ::serde_json::to_value(&item)?;
                    self.store.actions(#key)?.add(item)
                }

                /// Remove every element equal to `item`.
                pub fn #remove_name(&self, item: &#item_ty) -> ::store_actions::StoreResult<()> {
                    let item = ::serde_json::to_value(item)?;
                    self.store.actions(#key)?.remove(item)
                }
            });
        }
        Tag::String | Tag::Any => {}
    }

    methods
}
