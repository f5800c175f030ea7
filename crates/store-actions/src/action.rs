//! Generated per-field action tables.
//!
//! Each tagged field gets one [`FieldActions`]: a `get`/`set` pair plus at
//! most one extra family of closures selected by the field's tag. All
//! closures are bound to the [`StateBinding`](crate::StateBinding) the store
//! was initialized with.

use crate::{ActionKind, StoreError, StoreResult, TypeTag};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Reads the field's current value.
pub type ValueGetter = Arc<dyn Fn() -> Value + Send + Sync>;
/// Replaces the field's value.
pub type ValueSetter = Arc<dyn Fn(Value) + Send + Sync>;
/// A zero-argument mutation.
pub type Action = Arc<dyn Fn() -> StoreResult<()> + Send + Sync>;
/// A mutation taking one array item.
pub type ItemAction = Arc<dyn Fn(Value) -> StoreResult<()> + Send + Sync>;
/// A membership test over the field's current array.
pub type ItemPredicate = Arc<dyn Fn(&Value) -> StoreResult<bool> + Send + Sync>;

/// Extra actions of a `number` field.
#[derive(Clone)]
pub struct NumberActions {
    /// Set the field to `0`.
    pub reset: Action,
    /// Add `1` to the field.
    pub increment: Action,
}

/// Extra actions of a `boolean` field.
#[derive(Clone)]
pub struct BooleanActions {
    /// Negate the field.
    pub toggle: Action,
}

/// Extra actions of an `array` field.
#[derive(Clone)]
pub struct ArrayActions {
    /// True iff an equal element is present.
    pub has_item: ItemPredicate,
    /// Append an element.
    pub add: ItemAction,
    /// Remove every equal element.
    pub remove: ItemAction,
}

/// Describes one generated action by its flat name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Generated name, e.g. `incrementCount` or `bearsHasItem`.
    pub generated_name: String,
    /// What the action does.
    pub kind: ActionKind,
    /// The field it is bound to.
    pub field: String,
}

impl ActionDescriptor {
    /// Build the descriptor of `kind` on `field`.
    pub fn new(field: impl Into<String>, kind: ActionKind) -> Self {
        let field = field.into();
        Self {
            generated_name: kind.action_name(&field),
            kind,
            field,
        }
    }
}

/// The closure table generated for one tagged field.
#[derive(Clone)]
pub struct FieldActions {
    field: String,
    tag: TypeTag,
    get: ValueGetter,
    set: ValueSetter,
    number: Option<NumberActions>,
    boolean: Option<BooleanActions>,
    array: Option<ArrayActions>,
}

impl FieldActions {
    pub(crate) fn new(
        field: impl Into<String>,
        tag: TypeTag,
        get: ValueGetter,
        set: ValueSetter,
    ) -> Self {
        Self {
            field: field.into(),
            tag,
            get,
            set,
            number: None,
            boolean: None,
            array: None,
        }
    }

    pub(crate) fn attach_number(&mut self, actions: NumberActions) {
        self.number = Some(actions);
    }

    pub(crate) fn attach_boolean(&mut self, actions: BooleanActions) {
        self.boolean = Some(actions);
    }

    pub(crate) fn attach_array(&mut self, actions: ArrayActions) {
        self.array = Some(actions);
    }

    /// The bound field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The field's tag.
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Read the field's current value (`Null` if the state lacks it).
    pub fn get(&self) -> Value {
        (self.get)()
    }

    /// Read and deserialize the field's current value.
    pub fn get_as<T: DeserializeOwned>(&self) -> StoreResult<T> {
        Ok(serde_json::from_value(self.get())?)
    }

    /// Replace the field's value.
    pub fn set(&self, value: impl Into<Value>) {
        (self.set)(value.into())
    }

    /// Serialize `value` and store it in the field.
    pub fn set_as<T: Serialize + ?Sized>(&self, value: &T) -> StoreResult<()> {
        (self.set)(serde_json::to_value(value)?);
        Ok(())
    }

    /// Set a `number` field to `0`.
    pub fn reset(&self) -> StoreResult<()> {
        (self.number_family(ActionKind::Reset)?.reset)()
    }

    /// Add `1` to a `number` field.
    pub fn increment(&self) -> StoreResult<()> {
        (self.number_family(ActionKind::Increment)?.increment)()
    }

    /// Negate a `boolean` field.
    pub fn toggle(&self) -> StoreResult<()> {
        let family = self
            .boolean
            .as_ref()
            .ok_or_else(|| StoreError::action_unavailable(&self.field, ActionKind::Toggle))?;
        (family.toggle)()
    }

    /// Whether an `array` field currently holds an element equal to `item`.
    pub fn has_item(&self, item: &Value) -> StoreResult<bool> {
        (self.array_family(ActionKind::HasItem)?.has_item)(item)
    }

    /// Append `item` to an `array` field.
    pub fn add(&self, item: impl Into<Value>) -> StoreResult<()> {
        (self.array_family(ActionKind::Add)?.add)(item.into())
    }

    /// Remove every element equal to `item` from an `array` field.
    pub fn remove(&self, item: impl Into<Value>) -> StoreResult<()> {
        (self.array_family(ActionKind::Remove)?.remove)(item.into())
    }

    /// Whether this field has the given action.
    pub fn provides(&self, kind: ActionKind) -> bool {
        self.tag.provides(kind)
    }

    /// Kinds attached to this field, `get`/`set` first.
    pub fn kinds(&self) -> Vec<ActionKind> {
        self.tag.action_kinds()
    }

    /// Descriptors of every attached action.
    pub fn descriptors(&self) -> Vec<ActionDescriptor> {
        self.kinds()
            .into_iter()
            .map(|kind| ActionDescriptor::new(&self.field, kind))
            .collect()
    }

    /// Run an action by kind; item-taking kinds need `argument`.
    ///
    /// Returns the value read by `get` or the boolean answered by
    /// `hasItem`; mutations return `None`.
    pub fn invoke(&self, kind: ActionKind, argument: Option<Value>) -> StoreResult<Option<Value>> {
        if !self.provides(kind) {
            return Err(StoreError::action_unavailable(&self.field, kind));
        }
        let argument = match argument {
            Some(value) => value,
            None if kind.takes_argument() => {
                return Err(StoreError::missing_argument(kind.action_name(&self.field)));
            }
            None => Value::Null,
        };
        match kind {
            ActionKind::Get => Ok(Some(self.get())),
            ActionKind::Set => {
                self.set(argument);
                Ok(None)
            }
            ActionKind::Reset => self.reset().map(|_| None),
            ActionKind::Increment => self.increment().map(|_| None),
            ActionKind::Toggle => self.toggle().map(|_| None),
            ActionKind::HasItem => self
                .has_item(&argument)
                .map(|found| Some(Value::Bool(found))),
            ActionKind::Add => self.add(argument).map(|_| None),
            ActionKind::Remove => self.remove(argument).map(|_| None),
        }
    }

    fn number_family(&self, kind: ActionKind) -> StoreResult<&NumberActions> {
        self.number
            .as_ref()
            .ok_or_else(|| StoreError::action_unavailable(&self.field, kind))
    }

    fn array_family(&self, kind: ActionKind) -> StoreResult<&ArrayActions> {
        self.array
            .as_ref()
            .ok_or_else(|| StoreError::action_unavailable(&self.field, kind))
    }
}

impl fmt::Debug for FieldActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldActions")
            .field("field", &self.field)
            .field("tag", &self.tag)
            .field("kinds", &self.kinds())
            .finish()
    }
}
