//! Type tags, action kinds, and the action naming convention.
//!
//! A field's [`TypeTag`] fully determines which [`ActionKind`]s are
//! generated for it. Generated names follow one rule: the kind prefix
//! followed by the pascal-cased field name (`count` + increment →
//! `incrementCount`), except [`ActionKind::HasItem`] which is a suffix on
//! the raw field name (`countHasItem`).

use crate::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic classification of a store field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// Numeric field: reset and increment.
    Number,
    /// String field: get/set only.
    String,
    /// Boolean field: toggle.
    Boolean,
    /// Array field: membership, add, remove.
    Array,
    /// Any other value: get/set only.
    #[serde(alias = "object")]
    Any,
}

impl TypeTag {
    /// All tags, in declaration order.
    pub const ALL: [TypeTag; 5] = [
        TypeTag::Number,
        TypeTag::String,
        TypeTag::Boolean,
        TypeTag::Array,
        TypeTag::Any,
    ];

    /// Lowercase tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Boolean => "boolean",
            TypeTag::Array => "array",
            TypeTag::Any => "any",
        }
    }

    /// Actions this tag adds on top of `get`/`set`.
    pub fn extra_kinds(&self) -> &'static [ActionKind] {
        match self {
            TypeTag::Number => &[ActionKind::Reset, ActionKind::Increment],
            TypeTag::Boolean => &[ActionKind::Toggle],
            TypeTag::Array => &[ActionKind::HasItem, ActionKind::Add, ActionKind::Remove],
            TypeTag::String | TypeTag::Any => &[],
        }
    }

    /// Every action generated for a field with this tag, `get`/`set` first.
    pub fn action_kinds(&self) -> Vec<ActionKind> {
        let mut kinds = vec![ActionKind::Get, ActionKind::Set];
        kinds.extend_from_slice(self.extra_kinds());
        kinds
    }

    /// Whether a field with this tag gets the given action.
    pub fn provides(&self, kind: ActionKind) -> bool {
        matches!(kind, ActionKind::Get | ActionKind::Set) || self.extra_kinds().contains(&kind)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = StoreError;

    fn from_str(s: &str) -> StoreResult<Self> {
        match s {
            "number" => Ok(TypeTag::Number),
            "string" => Ok(TypeTag::String),
            "boolean" => Ok(TypeTag::Boolean),
            "array" => Ok(TypeTag::Array),
            "any" | "object" => Ok(TypeTag::Any),
            other => Err(StoreError::UnknownTag {
                tag: other.to_string(),
            }),
        }
    }
}

/// One generated action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    /// Read the field's current value.
    Get,
    /// Replace the field's value.
    Set,
    /// Negate a boolean field.
    Toggle,
    /// Set a numeric field to zero.
    Reset,
    /// Add one to a numeric field.
    Increment,
    /// Test array membership.
    HasItem,
    /// Append to an array.
    Add,
    /// Remove every equal element from an array.
    Remove,
}

impl ActionKind {
    /// The name fragment used when building generated names.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Get => "get",
            ActionKind::Set => "set",
            ActionKind::Toggle => "toggle",
            ActionKind::Reset => "reset",
            ActionKind::Increment => "increment",
            ActionKind::HasItem => "HasItem",
            ActionKind::Add => "add",
            ActionKind::Remove => "remove",
        }
    }

    /// Whether the action takes a value or item argument.
    pub fn takes_argument(&self) -> bool {
        matches!(
            self,
            ActionKind::Set | ActionKind::HasItem | ActionKind::Add | ActionKind::Remove
        )
    }

    /// Generated name of this action for `field`.
    pub fn action_name(&self, field: &str) -> String {
        match self {
            ActionKind::HasItem => format!("{field}HasItem"),
            prefix => format!("{}{}", prefix.as_str(), pascal_case(field)),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::HasItem => f.write_str("hasItem"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Upper-case the first character, leave the rest unchanged.
pub fn pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
