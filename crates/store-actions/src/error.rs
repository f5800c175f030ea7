//! Error types for store-actions operations.

use crate::ActionKind;
use thiserror::Error;

/// Result type alias for store-actions operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while building or driving an augmented store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The field has no generated actions (unknown or untagged).
    #[error("field not found: {field}")]
    FieldNotFound {
        /// The field that was looked up.
        field: String,
    },

    /// No generated action has this name.
    #[error("action not found: {name}")]
    ActionNotFound {
        /// The generated action name that was looked up.
        name: String,
    },

    /// The field exists but its tag does not provide this action.
    #[error("action {kind} is not available for field {field}")]
    ActionUnavailable {
        /// The field the action was requested on.
        field: String,
        /// The requested action kind.
        kind: ActionKind,
    },

    /// The current value does not have the type the action operates on.
    #[error("type mismatch at {field}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The field whose value was inspected.
        field: String,
        /// The expected JSON type.
        expected: &'static str,
        /// The JSON type actually found.
        found: &'static str,
    },

    /// An item-taking action was invoked without an argument.
    #[error("action {action} requires an argument")]
    MissingArgument {
        /// The generated action name.
        action: String,
    },

    /// A store definition declares the same field twice.
    #[error("duplicate field in store definition: {field}")]
    DuplicateField {
        /// The repeated field name.
        field: String,
    },

    /// A type tag name could not be parsed.
    #[error("unknown type tag: {tag}")]
    UnknownTag {
        /// The unrecognized tag text.
        tag: String,
    },

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Create a field not found error.
    #[inline]
    pub fn field_not_found(field: impl Into<String>) -> Self {
        StoreError::FieldNotFound {
            field: field.into(),
        }
    }

    /// Create an action not found error.
    #[inline]
    pub fn action_not_found(name: impl Into<String>) -> Self {
        StoreError::ActionNotFound { name: name.into() }
    }

    /// Create an action unavailable error.
    #[inline]
    pub fn action_unavailable(field: impl Into<String>, kind: ActionKind) -> Self {
        StoreError::ActionUnavailable {
            field: field.into(),
            kind,
        }
    }

    /// Create a type mismatch error from the offending value.
    #[inline]
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        found: &serde_json::Value,
    ) -> Self {
        StoreError::TypeMismatch {
            field: field.into(),
            expected,
            found: value_type_name(found),
        }
    }

    /// Create a missing argument error.
    #[inline]
    pub fn missing_argument(action: impl Into<String>) -> Self {
        StoreError::MissingArgument {
            action: action.into(),
        }
    }
}

/// Get the type name of a JSON value.
#[inline]
pub fn value_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = StoreError::field_not_found("count");
        assert_eq!(err.to_string(), "field not found: count");

        let err = StoreError::action_unavailable("name", ActionKind::Increment);
        assert_eq!(
            err.to_string(),
            "action increment is not available for field name"
        );
    }

    #[test]
    fn test_type_mismatch_reports_found_type() {
        let err = StoreError::type_mismatch("items", "array", &json!("oops"));
        assert_eq!(
            err.to_string(),
            "type mismatch at items: expected array, found string"
        );
    }

    #[test]
    fn test_value_type_name() {
        assert_eq!(value_type_name(&json!(null)), "null");
        assert_eq!(value_type_name(&json!(true)), "boolean");
        assert_eq!(value_type_name(&json!(42)), "number");
        assert_eq!(value_type_name(&json!("hello")), "string");
        assert_eq!(value_type_name(&json!([1, 2, 3])), "array");
        assert_eq!(value_type_name(&json!({"a": 1})), "object");
    }
}
