//! Derive macro for store-actions `StoreShape` trait.
//!
//! This crate provides the `#[derive(Store)]` macro that generates:
//! - `impl StoreShape for {Name}`: the field manifest, tags and defaults
//! - `{Name}Actions`: a typed wrapper with one method per generated action
//!
//! # Usage
//!
//! ```ignore
//! use serde::Serialize;
//! use store_actions::Store;
//!
//! #[derive(Default, Serialize, Store)]
//! struct BearStore {
//!     #[store(boolean)]
//!     is_dangerous: bool,
//!     #[store(number)]
//!     count: i64,
//!     #[store(array)]
//!     bears: Vec<String>,
//!     notes: String,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod field_kind;
mod parse;

/// Derive the `StoreShape` trait for a struct.
///
/// The struct must implement `Default` (field defaults are taken from
/// `Self::default()`) and every field must implement `Serialize`; tagged
/// fields must also implement `Deserialize`. Generated code refers to
/// `::serde_json`, so the using crate depends on it directly.
///
/// # Attributes
///
/// ## Field Attributes
///
/// Exactly one tag per managed field; untagged fields stay plain data.
///
/// - `#[store(number)]`: `get_x`, `set_x`, `reset_x`, `increment_x`
/// - `#[store(boolean)]`: `get_x`, `set_x`, `toggle_x`
/// - `#[store(array)]`: `get_x`, `set_x`, `x_has_item`, `add_x`, `remove_x`
///   (field must be a `Vec<T>`)
/// - `#[store(string)]`, `#[store(any)]`: `get_x`, `set_x`
///
/// ## Struct Attributes
///
/// - `#[store(name = "...")]`: definition name used in logs (defaults to
///   the struct name)
///
/// # Examples
///
/// ```ignore
/// let store = store_actions::Store::from_shape::<BearStore>();
/// let bears = store.typed::<BearStore>();
///
/// bears.set_count(10)?;
/// bears.increment_count()?;
/// assert_eq!(bears.get_count()?, 11);
///
/// bears.toggle_is_dangerous()?;
/// bears.add_bears("Yogi".to_string())?;
/// ```
#[proc_macro_derive(Store, attributes(store))]
pub fn derive_store(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match codegen::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
