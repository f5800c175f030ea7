//! Typed store shapes.
//!
//! `StoreShape` is implemented by `#[derive(Store)]`; it ties a Rust struct
//! to its [`StoreDefinition`] and to the typed wrapper generated around the
//! [`AugmentedStore`].

use crate::{AugmentedStore, StoreDefinition};

/// A struct that describes a store.
///
/// # Example
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use store_actions::{Store, StoreShape, TypeTag};
///
/// #[derive(Default, Serialize, Deserialize, store_actions::Store)]
/// struct Counter {
///     #[store(number)]
///     count: i64,
///     label: String,
/// }
///
/// # fn main() -> store_actions::StoreResult<()> {
/// let definition = Counter::definition();
/// assert_eq!(definition.lookup("count"), Some(TypeTag::Number));
/// assert_eq!(definition.lookup("label"), None);
///
/// let store = Store::from_shape::<Counter>();
/// let counter = store.typed::<Counter>();
/// counter.increment_count()?;
/// assert_eq!(counter.get_count()?, 1);
/// # Ok(())
/// # }
/// ```
pub trait StoreShape {
    /// Typed wrapper exposing the generated actions as methods.
    type Actions: From<AugmentedStore>;

    /// The ordered field manifest with tags and defaults.
    fn definition() -> StoreDefinition;
}
