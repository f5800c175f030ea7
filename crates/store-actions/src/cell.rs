//! Shared mutable state object with shallow-merge writes.
//!
//! `StateCell` wraps a `Mutex<Value>` so a merge made through one handle is
//! visible to the next read through any other handle.

use serde_json::{Map, Value};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Authoritative state object of a [`Store`](crate::Store).
pub struct StateCell(Mutex<Value>);

impl StateCell {
    /// Create a cell holding `value`.
    pub fn new(value: Value) -> Self {
        Self(Mutex::new(value))
    }

    /// Lock the state.
    ///
    /// Callers should clone what they need before dropping the guard.
    #[inline]
    pub fn get(&self) -> MutexGuard<'_, Value> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clone the current state.
    pub fn snapshot(&self) -> Value {
        self.get().clone()
    }

    /// Replace the whole state.
    pub fn replace(&self, value: Value) -> Value {
        std::mem::replace(&mut *self.get(), value)
    }

    /// Shallow-merge `partial` into the state object.
    ///
    /// A non-object state is replaced by an empty object first.
    pub fn merge(&self, partial: Map<String, Value>) {
        let mut guard = self.get();
        merge_into(&mut guard, partial);
    }

    /// Insert the entries of `defaults` whose keys the state lacks.
    ///
    /// Keys already present keep their current value.
    pub fn seed(&self, defaults: Map<String, Value>) {
        let mut guard = self.get();
        if !guard.is_object() {
            *guard = Value::Object(Map::new());
        }
        if let Value::Object(obj) = &mut *guard {
            for (key, value) in defaults {
                obj.entry(key).or_insert(value);
            }
        }
    }

    /// Merge and return `(previous, next)` snapshots taken under one lock.
    pub fn merge_observed(&self, partial: Map<String, Value>) -> (Value, Value) {
        let mut guard = self.get();
        let previous = guard.clone();
        merge_into(&mut guard, partial);
        (previous, guard.clone())
    }
}

fn merge_into(state: &mut Value, partial: Map<String, Value>) {
    if !state.is_object() {
        *state = Value::Object(Map::new());
    }
    if let Value::Object(obj) = state {
        obj.extend(partial);
    }
}

impl Default for StateCell {
    fn default() -> Self {
        Self::new(Value::Object(Map::new()))
    }
}

impl std::fmt::Debug for StateCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StateCell").field(&"<Value>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn partial(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("partial must be an object"),
        }
    }

    #[test]
    fn test_merge_is_shallow() {
        let cell = StateCell::new(json!({"a": {"x": 1}, "b": 2}));
        cell.merge(partial(json!({"a": {"y": 2}})));
        assert_eq!(cell.snapshot(), json!({"a": {"y": 2}, "b": 2}));
    }

    #[test]
    fn test_merge_observed_returns_both_sides() {
        let cell = StateCell::new(json!({"count": 1}));
        let (previous, next) = cell.merge_observed(partial(json!({"count": 2})));
        assert_eq!(previous, json!({"count": 1}));
        assert_eq!(next, json!({"count": 2}));
    }

    #[test]
    fn test_seed_keeps_existing_keys() {
        let cell = StateCell::new(json!({"count": 5}));
        cell.seed(partial(json!({"count": 0, "label": "counter"})));
        assert_eq!(cell.snapshot(), json!({"count": 5, "label": "counter"}));
    }

    #[test]
    fn test_merge_into_non_object() {
        let cell = StateCell::new(Value::Null);
        cell.merge(partial(json!({"a": 1})));
        assert_eq!(cell.snapshot(), json!({"a": 1}));
    }

    #[test]
    fn test_replace() {
        let cell = StateCell::default();
        let old = cell.replace(json!({"a": 1}));
        assert_eq!(old, json!({}));
        assert_eq!(cell.snapshot(), json!({"a": 1}));
    }
}
