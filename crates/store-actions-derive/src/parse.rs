//! Parsing logic for Store derive macro.

use darling::{ast, FromDeriveInput, FromField};
use syn::ext::IdentExt;
use syn::{Generics, Ident, Type, Visibility};

/// Parsed struct-level options.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(store), supports(struct_named))]
pub struct StoreInput {
    /// The struct identifier.
    pub ident: Ident,

    /// The struct visibility.
    pub vis: Visibility,

    /// Generic parameters.
    pub generics: Generics,

    /// Struct data (fields).
    pub data: ast::Data<(), FieldInput>,

    /// Definition name (e.g., `#[store(name = "BearStore")]`).
    #[darling(default)]
    pub name: Option<String>,
}

impl StoreInput {
    /// Get the fields as a vector.
    pub fn fields(&self) -> Vec<&FieldInput> {
        self.data
            .as_ref()
            .take_struct()
            .map(|s| s.fields.to_vec())
            .unwrap_or_default()
    }

    /// Definition name, defaulting to the struct name.
    pub fn definition_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.ident.unraw().to_string())
    }
}

/// Tag attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Number,
    String,
    Boolean,
    Array,
    Any,
}

/// Parsed field-level options.
#[derive(Debug, FromField)]
#[darling(attributes(store))]
pub struct FieldInput {
    /// Field identifier.
    pub ident: Option<Ident>,

    /// Field type.
    pub ty: Type,

    #[darling(default)]
    pub number: bool,

    #[darling(default)]
    pub string: bool,

    #[darling(default)]
    pub boolean: bool,

    #[darling(default)]
    pub array: bool,

    #[darling(default)]
    pub any: bool,
}

impl FieldInput {
    /// Get the field identifier (panics if None).
    pub fn ident(&self) -> &Ident {
        self.ident.as_ref().expect("named field required")
    }

    /// Key of this field in the state object.
    pub fn state_key(&self) -> String {
        self.ident().unraw().to_string()
    }

    /// The field's tag, `None` for plain data.
    pub fn tag(&self) -> syn::Result<Option<Tag>> {
        let flags = [
            (self.number, Tag::Number),
            (self.string, Tag::String),
            (self.boolean, Tag::Boolean),
            (self.array, Tag::Array),
            (self.any, Tag::Any),
        ];
        let mut set = flags.iter().filter(|(on, _)| *on).map(|(_, tag)| *tag);
        let tag = set.next();
        if set.next().is_some() {
            return Err(syn::Error::new_spanned(
                self.ident(),
                "a field takes at most one of #[store(number)], #[store(string)], \
                 #[store(boolean)], #[store(array)], #[store(any)]",
            ));
        }
        Ok(tag)
    }
}
