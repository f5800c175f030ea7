//! Generated action APIs for JSON state stores.
//!
//! `store-actions` takes a store definition (an ordered list of fields with
//! default values) plus a type tag per field, and generates a uniform set of
//! actions bound to a state container's `get`/`set` pair.
//!
//! # Core Concepts
//!
//! - **TypeTag**: `number`, `string`, `boolean`, `array` or `any`; decides
//!   which actions a field gets
//! - **StoreDefinition**: the field manifest with its `Classification`
//! - **StateBinding**: the `get`/`set` pair supplied by a state container
//! - **AugmentedStore**: the base instance plus one `FieldActions` table per
//!   tagged field
//! - **Store**: a small container that hosts an augmented store
//!
//! # Generated actions
//!
//! | Tag | Actions |
//! |---|---|
//! | every tag | `get<Field>`, `set<Field>` |
//! | `number` | `reset<Field>`, `increment<Field>` |
//! | `boolean` | `toggle<Field>` |
//! | `array` | `<field>HasItem`, `add<Field>`, `remove<Field>` |
//!
//! Untagged fields stay plain data and get nothing.
//!
//! # Quick Start
//!
//! ```
//! use store_actions::{Store, StoreDefinition};
//! use serde_json::json;
//!
//! let store = Store::from_definition(
//!     StoreDefinition::new("BearStore")
//!         .boolean("isDangerous", false)
//!         .number("count", 0)
//!         .array("bears", json!([])),
//! );
//!
//! let actions = store.actions();
//! actions.actions("count").unwrap().increment().unwrap();
//! actions.actions("isDangerous").unwrap().toggle().unwrap();
//! actions.invoke("addBears", Some(json!({"name": "Yogi"}))).unwrap();
//!
//! let state = store.get_state();
//! assert_eq!(state["count"], 1);
//! assert_eq!(state["isDangerous"], true);
//! assert_eq!(state["bears"], json!([{"name": "Yogi"}]));
//! ```
//!
//! # Using a derived shape
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use store_actions::Store;
//!
//! #[derive(Default, Serialize, Deserialize, Store)]
//! struct BearStore {
//!     #[store(boolean)]
//!     is_dangerous: bool,
//!     #[store(number)]
//!     count: i64,
//!     #[store(array)]
//!     bears: Vec<String>,
//! }
//!
//! # fn main() -> store_actions::StoreResult<()> {
//! let store = Store::from_shape::<BearStore>();
//! let bears = store.typed::<BearStore>();
//! bears.increment_count()?;
//! bears.toggle_is_dangerous()?;
//! bears.add_bears("Yogi".to_string())?;
//! assert!(bears.bears_has_item(&"Yogi".to_string())?);
//! assert_eq!(bears.get_count()?, 1);
//! # Ok(())
//! # }
//! ```

mod action;
mod augment;
mod binding;
mod cell;
mod definition;
mod error;
mod registry;
mod shape;
mod store;
mod tag;

pub use action::{
    Action, ActionDescriptor, ArrayActions, BooleanActions, FieldActions, ItemAction,
    ItemPredicate, NumberActions, ValueGetter, ValueSetter,
};
pub use augment::{augment, initializer, AugmentedStore};
pub use binding::{GetFn, SetFn, StateBinding};
pub use cell::StateCell;
pub use definition::{FieldDescriptor, StoreDefinition};
pub use error::{value_type_name, StoreError, StoreResult};
pub use registry::Classification;
pub use shape::StoreShape;
pub use store::{Listener, Store, SubscriptionId};
pub use tag::{pascal_case, ActionKind, TypeTag};

// Re-export derive macro when feature is enabled
#[cfg(feature = "derive")]
pub use store_actions_derive::Store;

// Re-export serde_json::Value for convenience
pub use serde_json::Value;
