//! Store definitions: the ordered field manifest a store is built from.
//!
//! A [`StoreDefinition`] lists every field with its default value, in a
//! fixed order, together with the [`Classification`] that says which fields
//! are store-managed. It can be built in code, generated by
//! `#[derive(Store)]`, or loaded from data:
//!
//! ```
//! use store_actions::{StoreDefinition, TypeTag};
//! use serde_json::json;
//!
//! let definition: StoreDefinition = serde_json::from_value(json!({
//!     "name": "BearStore",
//!     "fields": [
//!         {"name": "count", "default": 0, "tag": "number"},
//!         {"name": "note", "default": null}
//!     ]
//! }))
//! .unwrap();
//!
//! assert_eq!(definition.lookup("count"), Some(TypeTag::Number));
//! assert_eq!(definition.lookup("note"), None);
//! ```

use crate::{Classification, StoreError, TypeTag};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// A tagged field as seen by the augmentation engine.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// The field's type tag.
    pub tag: TypeTag,
    /// Declared default value.
    pub default: Value,
}

/// Template describing one store: field names, defaults, and tags.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DefinitionManifest", into = "DefinitionManifest")]
pub struct StoreDefinition {
    name: String,
    fields: Vec<(String, Value)>,
    classification: Classification,
}

impl StoreDefinition {
    /// Create an empty definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            classification: Classification::new(),
        }
    }

    /// Definition name (used in logs).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare an untagged (plain data) field.
    ///
    /// Declaring a name twice replaces the earlier default in place.
    pub fn field(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.declare(name.into(), default.into());
        self
    }

    /// Declare a field tagged `number`.
    pub fn number(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.tagged(name, default, TypeTag::Number)
    }

    /// Declare a field tagged `string`.
    pub fn string(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.tagged(name, default, TypeTag::String)
    }

    /// Declare a field tagged `boolean`.
    pub fn boolean(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.tagged(name, default, TypeTag::Boolean)
    }

    /// Declare a field tagged `array`.
    pub fn array(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.tagged(name, default, TypeTag::Array)
    }

    /// Declare a field tagged `any`.
    pub fn any(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.tagged(name, default, TypeTag::Any)
    }

    /// Declare a field with an explicit tag.
    pub fn tagged(
        mut self,
        name: impl Into<String>,
        default: impl Into<Value>,
        tag: TypeTag,
    ) -> Self {
        let name = name.into();
        self.classification.tag(name.clone(), tag);
        self.declare(name, default.into());
        self
    }

    /// Attach a tag to a field, declared or not yet declared.
    pub fn tag(&mut self, field: impl Into<String>, tag: TypeTag) -> Option<TypeTag> {
        self.classification.tag(field, tag)
    }

    /// Look up a field's tag.
    pub fn lookup(&self, field: &str) -> Option<TypeTag> {
        self.classification.lookup(field)
    }

    /// The definition's classification.
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Declared default of a field.
    pub fn default_of(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Tagged fields in declaration order.
    ///
    /// Tags recorded for names that were never declared are ignored.
    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        self.fields
            .iter()
            .filter_map(|(name, default)| {
                self.classification.lookup(name).map(|tag| FieldDescriptor {
                    name: name.clone(),
                    tag,
                    default: default.clone(),
                })
            })
            .collect()
    }

    /// Produce a fresh base instance: every declared field with its default.
    pub fn instantiate(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(name, default)| (name.clone(), default.clone()))
            .collect()
    }

    fn declare(&mut self, name: String, default: Value) {
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = default,
            None => self.fields.push((name, default)),
        }
    }
}

/// Serialized form of a [`StoreDefinition`].
#[derive(Clone, Debug, Serialize, Deserialize)]
struct DefinitionManifest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    fields: Vec<ManifestField>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct ManifestField {
    name: String,
    #[serde(default)]
    default: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tag: Option<TypeTag>,
}

impl TryFrom<DefinitionManifest> for StoreDefinition {
    type Error = StoreError;

    fn try_from(manifest: DefinitionManifest) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        let mut definition = StoreDefinition::new(manifest.name);
        for field in manifest.fields {
            if !seen.insert(field.name.clone()) {
                return Err(StoreError::DuplicateField { field: field.name });
            }
            definition = match field.tag {
                Some(tag) => definition.tagged(field.name, field.default, tag),
                None => definition.field(field.name, field.default),
            };
        }
        Ok(definition)
    }
}

impl From<StoreDefinition> for DefinitionManifest {
    fn from(definition: StoreDefinition) -> Self {
        let fields = definition
            .fields
            .into_iter()
            .map(|(name, default)| ManifestField {
                tag: definition.classification.lookup(&name),
                name,
                default,
            })
            .collect();
        DefinitionManifest {
            name: definition.name,
            fields,
        }
    }
}
