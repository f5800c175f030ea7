//! A minimal state container hosting augmented stores.
//!
//! `Store` owns the authoritative state, hands the augmentation engine a
//! [`StateBinding`] over it, and keeps the resulting [`AugmentedStore`].
//!
//! # Example
//!
//! ```
//! use store_actions::{initializer, Store, StoreDefinition};
//! use serde_json::json;
//!
//! let store = Store::create(initializer(
//!     StoreDefinition::new("Counter").number("value", 0),
//! ));
//!
//! let value = store.field("value").unwrap();
//! value.set(10);
//! value.increment().unwrap();
//! assert_eq!(store.get_state()["value"], json!(11));
//! ```

use crate::{
    initializer, AugmentedStore, FieldActions, StateBinding, StateCell, StoreDefinition,
    StoreResult, StoreShape,
};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Called after every write with `(next, previous)` state.
pub type Listener = Arc<dyn Fn(&Value, &Value) + Send + Sync>;

/// Handle returned by [`Store::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Shared {
    cell: StateCell,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

impl Shared {
    fn listeners(&self) -> Vec<Listener> {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect()
    }

    fn write(&self, partial: Map<String, Value>) {
        tracing::trace!(keys = partial.len(), "merging partial state");
        let listeners = self.listeners();
        if listeners.is_empty() {
            self.cell.merge(partial);
            return;
        }
        // Listeners run outside the state lock so they may read or write.
        let (previous, next) = self.cell.merge_observed(partial);
        for listener in listeners {
            listener(&next, &previous);
        }
    }
}

/// State container for one augmented store.
///
/// Cloning a `Store` yields another handle to the same state.
#[derive(Clone)]
pub struct Store {
    shared: Arc<Shared>,
    augmented: AugmentedStore,
}

impl Store {
    /// Run `initializer` with a binding over a fresh state, then fill in
    /// the instance's fields the initializer did not write.
    pub fn create<F>(initializer: F) -> Self
    where
        F: FnOnce(StateBinding) -> AugmentedStore,
    {
        let shared = Arc::new(Shared {
            cell: StateCell::default(),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        });

        let binding = {
            let read = shared.clone();
            let write = shared.clone();
            StateBinding::new(
                move || read.cell.snapshot(),
                move |partial| write.write(partial),
            )
        };

        // Writes the initializer made through its binding win over defaults.
        let augmented = initializer(binding);
        shared.cell.seed(augmented.data().clone());
        tracing::debug!(
            store = augmented.name(),
            fields = augmented.data().len(),
            actions = augmented.descriptors().len(),
            "created store"
        );

        Self { shared, augmented }
    }

    /// Create a store from a definition.
    pub fn from_definition(definition: StoreDefinition) -> Self {
        Self::create(initializer(definition))
    }

    /// Create a store from a `#[derive(Store)]` shape.
    pub fn from_shape<S: StoreShape>() -> Self {
        Self::from_definition(S::definition())
    }

    /// Snapshot of the current state.
    pub fn get_state(&self) -> Value {
        self.shared.cell.snapshot()
    }

    /// Shallow-merge `partial` into the state, notifying listeners.
    pub fn set_state(&self, partial: Map<String, Value>) {
        self.shared.write(partial);
    }

    /// The generated action table.
    pub fn actions(&self) -> &AugmentedStore {
        &self.augmented
    }

    /// Action table of one tagged field.
    pub fn field(&self, name: &str) -> StoreResult<&FieldActions> {
        self.augmented.actions(name)
    }

    /// Typed wrapper generated for shape `S`.
    pub fn typed<S: StoreShape>(&self) -> S::Actions {
        S::Actions::from(self.augmented.clone())
    }

    /// Register a listener called after every write.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Value, &Value) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.shared.next_id.fetch_add(1, Ordering::Relaxed));
        self.shared
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self
            .shared
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.augmented.name())
            .field("state", &self.get_state())
            .finish()
    }
}
