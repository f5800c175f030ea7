//! The augmentation engine: turns a [`StoreDefinition`] into an
//! [`AugmentedStore`] whose generated actions are bound to a
//! [`StateBinding`].
//!
//! ```
//! use store_actions::{augment, StateBinding, StoreDefinition};
//! use serde_json::{json, Value};
//! use std::sync::{Arc, Mutex};
//!
//! let state = Arc::new(Mutex::new(json!({"count": 0})));
//! let (read, write) = (state.clone(), state.clone());
//! let binding = StateBinding::new(
//!     move || read.lock().unwrap().clone(),
//!     move |partial| {
//!         if let Value::Object(obj) = &mut *write.lock().unwrap() {
//!             obj.extend(partial);
//!         }
//!     },
//! );
//!
//! let store = augment(&StoreDefinition::new("Counter").number("count", 0), binding);
//! store.actions("count").unwrap().increment().unwrap();
//! assert_eq!(state.lock().unwrap()["count"], 1);
//! ```

use crate::action::{
    Action, ArrayActions, BooleanActions, FieldActions, ItemAction, ItemPredicate, NumberActions,
    ValueGetter, ValueSetter,
};
use crate::{
    ActionDescriptor, ActionKind, StateBinding, StoreDefinition, StoreError, StoreResult, TypeTag,
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// A store definition's base instance plus its generated action table.
#[derive(Clone, Debug)]
pub struct AugmentedStore {
    name: String,
    data: Map<String, Value>,
    fields: Vec<FieldActions>,
    by_field: HashMap<String, usize>,
    by_name: HashMap<String, (usize, ActionKind)>,
}

impl AugmentedStore {
    /// Name of the definition this store was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base instance: every declared field with its default value.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Action table of a tagged field.
    pub fn actions(&self, field: &str) -> StoreResult<&FieldActions> {
        self.by_field
            .get(field)
            .map(|&i| &self.fields[i])
            .ok_or_else(|| StoreError::field_not_found(field))
    }

    /// Whether `field` received generated actions.
    pub fn has_actions(&self, field: &str) -> bool {
        self.by_field.contains_key(field)
    }

    /// Action tables in field declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldActions> {
        self.fields.iter()
    }

    /// Whether a generated action with this flat name exists.
    pub fn has_action(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Every action reachable by flat name, in field order then kind order.
    ///
    /// When two fields generate the same name, only the later field's
    /// action is listed; the earlier one stays reachable through
    /// [`AugmentedStore::actions`].
    pub fn descriptors(&self) -> Vec<ActionDescriptor> {
        self.fields
            .iter()
            .enumerate()
            .flat_map(|(index, field)| {
                field
                    .descriptors()
                    .into_iter()
                    .filter(move |d| {
                        self.by_name
                            .get(&d.generated_name)
                            .is_some_and(|&(owner, _)| owner == index)
                    })
            })
            .collect()
    }

    /// Flat names of every generated action.
    pub fn action_names(&self) -> Vec<String> {
        self.descriptors()
            .into_iter()
            .map(|d| d.generated_name)
            .collect()
    }

    /// Call a generated action by its flat name (`incrementCount`,
    /// `bearsHasItem`, ...).
    pub fn invoke(&self, name: &str, argument: Option<Value>) -> StoreResult<Option<Value>> {
        let &(index, kind) = self
            .by_name
            .get(name)
            .ok_or_else(|| StoreError::action_not_found(name))?;
        self.fields[index].invoke(kind, argument)
    }
}

/// Build the initializer a state container calls with its `get`/`set` pair.
pub fn initializer(
    definition: StoreDefinition,
) -> impl Fn(StateBinding) -> AugmentedStore + Send + Sync + 'static {
    move |binding| augment(&definition, binding)
}

/// Instantiate `definition` and attach actions for every tagged field.
pub fn augment(definition: &StoreDefinition, binding: StateBinding) -> AugmentedStore {
    let data = definition.instantiate();
    let mut fields = Vec::new();
    let mut by_field = HashMap::new();
    let mut by_name = HashMap::new();

    for field in definition.field_names() {
        let Some(tag) = definition.lookup(field) else {
            tracing::trace!(store = definition.name(), field, "skipping untagged field");
            continue;
        };

        let actions = synthesize(field, tag, &binding);
        let index = fields.len();
        for kind in actions.kinds() {
            let name = kind.action_name(field);
            if let Some((previous, _)) = by_name.insert(name.clone(), (index, kind)) {
                tracing::debug!(
                    store = definition.name(),
                    action = %name,
                    shadowed_field = fields
                        .get(previous)
                        .map(FieldActions::field)
                        .unwrap_or_default(),
                    "generated action name collides with an earlier field"
                );
            }
        }
        tracing::debug!(
            store = definition.name(),
            field,
            %tag,
            actions = actions.kinds().len(),
            "synthesized field actions"
        );
        by_field.insert(field.to_string(), index);
        fields.push(actions);
    }

    AugmentedStore {
        name: definition.name().to_string(),
        data,
        fields,
        by_field,
        by_name,
    }
}

/// Build the closure table for one field.
///
/// The three extra families are checked one after another without an early
/// exit; tags are disjoint, so at most one matches.
fn synthesize(field: &str, tag: TypeTag, binding: &StateBinding) -> FieldActions {
    let get: ValueGetter = {
        let binding = binding.clone();
        let field = field.to_string();
        Arc::new(move || binding.get_field(&field))
    };
    let set: ValueSetter = {
        let binding = binding.clone();
        let field = field.to_string();
        Arc::new(move |value: Value| binding.set_field(&field, value))
    };
    let mut actions = FieldActions::new(field, tag, get, set);

    if tag == TypeTag::Number {
        actions.attach_number(number_actions(field, binding));
    }
    if tag == TypeTag::Boolean {
        actions.attach_boolean(boolean_actions(field, binding));
    }
    if tag == TypeTag::Array {
        actions.attach_array(array_actions(field, binding));
    }
    actions
}

fn number_actions(field: &str, binding: &StateBinding) -> NumberActions {
    let reset: Action = {
        let binding = binding.clone();
        let field = field.to_string();
        Arc::new(move || -> StoreResult<()> {
            binding.set_field(&field, Value::from(0));
            Ok(())
        })
    };
    let increment: Action = {
        let binding = binding.clone();
        let field = field.to_string();
        Arc::new(move || -> StoreResult<()> {
            let next = add_one(&field, &binding.get_field(&field))?;
            binding.set_field(&field, next);
            Ok(())
        })
    };
    NumberActions { reset, increment }
}

fn boolean_actions(field: &str, binding: &StateBinding) -> BooleanActions {
    let binding = binding.clone();
    let field = field.to_string();
    let toggle: Action = Arc::new(move || match binding.get_field(&field) {
        Value::Bool(current) => {
            binding.set_field(&field, Value::Bool(!current));
            Ok(())
        }
        other => Err(StoreError::type_mismatch(field.as_str(), "boolean", &other)),
    });
    BooleanActions { toggle }
}

fn array_actions(field: &str, binding: &StateBinding) -> ArrayActions {
    let has_item: ItemPredicate = {
        let binding = binding.clone();
        let field = field.to_string();
        Arc::new(move |item: &Value| -> StoreResult<bool> {
            let items = current_array(&field, &binding)?;
            Ok(items.contains(item))
        })
    };
    let add: ItemAction = {
        let binding = binding.clone();
        let field = field.to_string();
        Arc::new(move |item: Value| -> StoreResult<()> {
            let mut items = current_array(&field, &binding)?;
            items.push(item);
            binding.set_field(&field, Value::Array(items));
            Ok(())
        })
    };
    let remove: ItemAction = {
        let binding = binding.clone();
        let field = field.to_string();
        Arc::new(move |item: Value| -> StoreResult<()> {
            let mut items = current_array(&field, &binding)?;
            items.retain(|existing| *existing != item);
            binding.set_field(&field, Value::Array(items));
            Ok(())
        })
    };
    ArrayActions {
        has_item,
        add,
        remove,
    }
}

fn current_array(field: &str, binding: &StateBinding) -> StoreResult<Vec<Value>> {
    match binding.get_field(field) {
        Value::Array(items) => Ok(items),
        other => Err(StoreError::type_mismatch(field, "array", &other)),
    }
}

/// `current + 1`, integral while it fits in i64/u64, float otherwise.
fn add_one(field: &str, current: &Value) -> StoreResult<Value> {
    let Value::Number(n) = current else {
        return Err(StoreError::type_mismatch(field, "number", current));
    };
    if let Some(next) = n.as_i64().and_then(|i| i.checked_add(1)) {
        return Ok(Value::from(next));
    }
    if let Some(next) = n.as_u64().and_then(|u| u.checked_add(1)) {
        return Ok(Value::from(next));
    }
    n.as_f64()
        .and_then(|f| serde_json::Number::from_f64(f + 1.0))
        .map(Value::Number)
        .ok_or_else(|| StoreError::type_mismatch(field, "finite number", current))
}
