//! The get/set contract between generated actions and a state container.

use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Reads the current authoritative state object.
pub type GetFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Shallow-merges a partial state object into the authoritative state.
pub type SetFn = Arc<dyn Fn(Map<String, Value>) + Send + Sync>;

/// The bound `get`/`set` pair a state container hands to an initializer.
///
/// `get` must return the current state, not a stale snapshot, and `set`
/// must make its merge visible to the next `get` before it returns.
#[derive(Clone)]
pub struct StateBinding {
    get: GetFn,
    set: SetFn,
}

impl StateBinding {
    /// Bind a getter and a partial setter.
    pub fn new<G, S>(get: G, set: S) -> Self
    where
        G: Fn() -> Value + Send + Sync + 'static,
        S: Fn(Map<String, Value>) + Send + Sync + 'static,
    {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// Read the whole current state.
    #[inline]
    pub fn get(&self) -> Value {
        (self.get)()
    }

    /// Merge `partial` into the state.
    #[inline]
    pub fn set(&self, partial: Map<String, Value>) {
        (self.set)(partial)
    }

    /// Read one field of the current state; `Null` when absent.
    pub fn get_field(&self, field: &str) -> Value {
        match self.get() {
            Value::Object(mut state) => state.remove(field).unwrap_or(Value::Null),
            _ => Value::Null,
        }
    }

    /// Write one field.
    pub fn set_field(&self, field: &str, value: Value) {
        let mut partial = Map::with_capacity(1);
        partial.insert(field.to_string(), value);
        self.set(partial);
    }
}

impl fmt::Debug for StateBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateBinding").finish_non_exhaustive()
    }
}
