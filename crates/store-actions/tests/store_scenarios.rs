//! End-to-end store scenarios over the builder API.
#![allow(missing_docs)]

use serde_json::{json, Map, Value};
use store_actions::{
    initializer, ActionKind, StateBinding, Store, StoreDefinition, StoreError, TypeTag,
};
use std::sync::{Arc, Mutex};

fn number_store() -> Store {
    Store::from_definition(StoreDefinition::new("NumberStore").number("value", 0))
}

fn boolean_store() -> Store {
    Store::from_definition(StoreDefinition::new("BooleanStore").boolean("value", false))
}

fn array_store(items: Value) -> Store {
    Store::from_definition(StoreDefinition::new("ArrayStore").array("items", items))
}

// ============================================================================
// Generated surface
// ============================================================================

#[test]
fn test_boolean_actions_exist() {
    let store = boolean_store();
    let actions = store.actions();
    assert!(actions.has_action("getValue"));
    assert!(actions.has_action("setValue"));
    assert!(actions.has_action("toggleValue"));
    assert!(!actions.has_action("incrementValue"));
}

#[test]
fn test_number_actions_exist() {
    let store = number_store();
    let actions = store.actions();
    assert!(actions.has_action("getValue"));
    assert!(actions.has_action("setValue"));
    assert!(actions.has_action("incrementValue"));
    assert!(actions.has_action("resetValue"));
    assert!(!actions.has_action("toggleValue"));
}

#[test]
fn test_array_actions_exist() {
    let store = array_store(json!([]));
    let actions = store.actions();
    assert!(actions.has_action("getItems"));
    assert!(actions.has_action("setItems"));
    assert!(actions.has_action("itemsHasItem"));
    assert!(actions.has_action("addItems"));
    assert!(actions.has_action("removeItems"));
}

#[test]
fn test_string_and_any_only_get_set() {
    let store = Store::from_definition(
        StoreDefinition::new("S")
            .string("userName", Value::Null)
            .any("mainBear", Value::Null),
    );
    assert_eq!(
        store.actions().action_names(),
        vec!["getUserName", "setUserName", "getMainBear", "setMainBear"]
    );
}

#[test]
fn test_untagged_field_has_no_methods() {
    let store = Store::from_definition(
        StoreDefinition::new("Mixed")
            .field("plain", 5)
            .number("count", 0),
    );
    let actions = store.actions();

    assert!(actions
        .descriptors()
        .iter()
        .all(|descriptor| descriptor.field == "count"));
    assert!(matches!(
        store.field("plain"),
        Err(StoreError::FieldNotFound { .. })
    ));
    assert!(matches!(
        actions.invoke("getPlain", None),
        Err(StoreError::ActionNotFound { .. })
    ));
    assert_eq!(store.get_state()["plain"], json!(5));
}

// ============================================================================
// Number
// ============================================================================

#[test]
fn test_get_returns_default() {
    let store = number_store();
    assert_eq!(store.field("value").unwrap().get(), json!(0));
}

#[test]
fn test_set_then_get() {
    let store = number_store();
    let value = store.field("value").unwrap();
    value.set(10);
    assert_eq!(value.get(), json!(10));
    assert_eq!(store.get_state()["value"], json!(10));
}

#[test]
fn test_increment() {
    let store = number_store();
    store.field("value").unwrap().increment().unwrap();
    assert_eq!(store.get_state()["value"], json!(1));
}

#[test]
fn test_reset() {
    let store = number_store();
    let value = store.field("value").unwrap();
    value.set(10);
    assert_eq!(store.get_state()["value"], json!(10));
    value.reset().unwrap();
    assert_eq!(store.get_state()["value"], json!(0));
}

#[test]
fn test_number_scenario() {
    let store = number_store();
    let actions = store.actions();

    actions.invoke("setValue", Some(json!(10))).unwrap();
    assert_eq!(actions.invoke("getValue", None).unwrap(), Some(json!(10)));
    actions.invoke("incrementValue", None).unwrap();
    assert_eq!(store.get_state()["value"], json!(11));
    actions.invoke("resetValue", None).unwrap();
    assert_eq!(store.get_state()["value"], json!(0));
}

#[test]
fn test_float_number_field() {
    let store = Store::from_definition(StoreDefinition::new("S").number("ratio", 0.5));
    let ratio = store.field("ratio").unwrap();
    ratio.increment().unwrap();
    assert_eq!(ratio.get(), json!(1.5));
    ratio.reset().unwrap();
    assert_eq!(ratio.get(), json!(0));
}

// ============================================================================
// Boolean
// ============================================================================

#[test]
fn test_toggle() {
    let store = boolean_store();
    store.field("value").unwrap().toggle().unwrap();
    assert_eq!(store.get_state()["value"], json!(true));
}

#[test]
fn test_toggle_pair_restores() {
    let store = boolean_store();
    let value = store.field("value").unwrap();
    value.toggle().unwrap();
    value.toggle().unwrap();
    assert_eq!(store.get_state()["value"], json!(false));
}

#[test]
fn test_toggle_on_mismatched_default() {
    let store = Store::from_definition(StoreDefinition::new("S").boolean("flag", 1));
    let err = store.field("flag").unwrap().toggle().unwrap_err();
    assert!(matches!(
        err,
        StoreError::TypeMismatch {
            expected: "boolean",
            found: "number",
            ..
        }
    ));
    assert_eq!(store.get_state()["flag"], json!(1));
}

// ============================================================================
// Array
// ============================================================================

#[test]
fn test_add_item() {
    let store = array_store(json!([]));
    let item = json!({"a": 1});
    store.field("items").unwrap().add(item.clone()).unwrap();

    let state = store.get_state();
    assert_eq!(state["items"].as_array().unwrap().len(), 1);
    assert_eq!(state["items"][0], item);
}

#[test]
fn test_add_preserves_order() {
    let store = array_store(json!(["a", "b"]));
    store.field("items").unwrap().add("c").unwrap();
    assert_eq!(store.get_state()["items"], json!(["a", "b", "c"]));
}

#[test]
fn test_remove_item() {
    let item = json!({"a": 1});
    let store = array_store(json!([item.clone()]));
    store.field("items").unwrap().remove(item).unwrap();
    assert_eq!(store.get_state()["items"], json!([]));
}

#[test]
fn test_remove_drops_every_equal_element() {
    let store = array_store(json!([1, 2, 1, 3, 1]));
    store.field("items").unwrap().remove(1).unwrap();
    assert_eq!(store.get_state()["items"], json!([2, 3]));
}

#[test]
fn test_remove_absent_item_is_noop() {
    let store = array_store(json!([1, 2]));
    store.field("items").unwrap().remove(9).unwrap();
    assert_eq!(store.get_state()["items"], json!([1, 2]));
}

#[test]
fn test_has_item_true() {
    let item = json!({"a": 1});
    let store = array_store(json!([item.clone()]));
    assert!(store.field("items").unwrap().has_item(&item).unwrap());
}

#[test]
fn test_has_item_false() {
    let store = array_store(json!([]));
    assert!(!store
        .field("items")
        .unwrap()
        .has_item(&json!({"a": 1}))
        .unwrap());
}

#[test]
fn test_array_scenario() {
    let store = array_store(json!([]));
    let item = json!({"a": 1});
    let actions = store.actions();

    actions.invoke("addItems", Some(item.clone())).unwrap();
    assert_eq!(store.get_state()["items"].as_array().unwrap().len(), 1);
    assert_eq!(
        actions.invoke("itemsHasItem", Some(item.clone())).unwrap(),
        Some(json!(true))
    );
    actions.invoke("removeItems", Some(item)).unwrap();
    assert_eq!(store.get_state()["items"].as_array().unwrap().len(), 0);
}

// ============================================================================
// Container contract
// ============================================================================

#[test]
fn test_actions_observe_external_writes() {
    let store = number_store();
    let mut partial = Map::new();
    partial.insert("value".into(), json!(5));
    store.set_state(partial);
    assert_eq!(store.field("value").unwrap().get(), json!(5));
}

#[test]
fn test_custom_container_binding() {
    // A container that records every partial it receives.
    let state = Arc::new(Mutex::new(json!({"count": 0})));
    let writes = Arc::new(Mutex::new(Vec::new()));

    let read = state.clone();
    let write = state.clone();
    let log = writes.clone();
    let binding = StateBinding::new(
        move || read.lock().unwrap().clone(),
        move |partial: Map<String, Value>| {
            log.lock().unwrap().push(Value::Object(partial.clone()));
            if let Value::Object(obj) = &mut *write.lock().unwrap() {
                obj.extend(partial);
            }
        },
    );

    let init = initializer(StoreDefinition::new("Counter").number("count", 0));
    let store = init(binding);
    let count = store.actions("count").unwrap();
    count.increment().unwrap();
    count.increment().unwrap();
    count.reset().unwrap();

    assert_eq!(
        *writes.lock().unwrap(),
        vec![json!({"count": 1}), json!({"count": 2}), json!({"count": 0})]
    );
}

#[test]
fn test_definition_from_manifest() {
    let definition: StoreDefinition = serde_json::from_value(json!({
        "name": "BearStore",
        "fields": [
            {"name": "isDangerous", "default": false, "tag": "boolean"},
            {"name": "count", "default": 0, "tag": "number"},
            {"name": "bears", "default": [], "tag": "array"},
            {"name": "mainBear", "default": null, "tag": "object"},
            {"name": "notes", "default": "plain"}
        ]
    }))
    .unwrap();

    assert_eq!(definition.lookup("mainBear"), Some(TypeTag::Any));
    let store = Store::from_definition(definition);
    let field = store.field("isDangerous").unwrap();
    assert_eq!(
        field.kinds(),
        vec![ActionKind::Get, ActionKind::Set, ActionKind::Toggle]
    );
    assert!(!store.actions().has_actions("notes"));
}
