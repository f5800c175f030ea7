//! Per-definition field classification.
//!
//! A [`Classification`] records which [`TypeTag`] applies to which field of
//! one store definition. It is owned by the definition and handed to the
//! augmentation engine explicitly; there is no process-wide registry.

use crate::TypeTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name → type tag association for one store definition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Classification {
    tags: BTreeMap<String, TypeTag>,
}

impl Classification {
    /// Create an empty classification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `tag` for `field`.
    ///
    /// Tagging a field twice keeps the last tag and returns the previous one.
    pub fn tag(&mut self, field: impl Into<String>, tag: TypeTag) -> Option<TypeTag> {
        self.tags.insert(field.into(), tag)
    }

    /// Builder form of [`Classification::tag`].
    pub fn with(mut self, field: impl Into<String>, tag: TypeTag) -> Self {
        self.tag(field, tag);
        self
    }

    /// Look up the tag of `field`. `None` means the field is plain data.
    pub fn lookup(&self, field: &str) -> Option<TypeTag> {
        self.tags.get(field).copied()
    }

    /// Remove the tag from `field`, turning it back into plain data.
    pub fn untag(&mut self, field: &str) -> Option<TypeTag> {
        self.tags.remove(field)
    }

    /// Number of tagged fields.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if no field is tagged.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over `(field, tag)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TypeTag)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, TypeTag)> for Classification {
    fn from_iter<I: IntoIterator<Item = (K, TypeTag)>>(iter: I) -> Self {
        let mut classification = Classification::new();
        for (field, tag) in iter {
            classification.tag(field, tag);
        }
        classification
    }
}
