//! Integration tests for `serde_json::Value` documents and serde-configured
//! options.

#![cfg(feature = "json")]

use redact_path::{
    MapEntryPolicy, MissingKeyPolicy, RedactError, RedactOptions, Redactable, Redactor, redact,
};
use serde_json::json;

#[test]
fn test_document_fields_are_nulled_across_arrays() {
    let mut doc = json!({
        "users": [
            {"name": "John", "password": "letmein"},
            {"name": "Mary", "password": "123456"}
        ],
        "count": 2
    });
    redact(&["users", "password"], &mut doc).unwrap();
    assert_eq!(
        doc,
        json!({
            "users": [
                {"name": "John", "password": null},
                {"name": "Mary", "password": null}
            ],
            "count": 2
        })
    );
}

#[test]
fn test_document_inside_a_record() {
    #[derive(Debug, Redactable)]
    struct Event {
        kind: String,
        payload: serde_json::Value,
    }

    let mut event = Event {
        kind: "login".into(),
        payload: json!({"token": "abc", "user": {"id": 1, "email": "john@example.com"}}),
    };
    redact(&["payload", "user", "email"], &mut event).unwrap();
    assert_eq!(
        event.payload,
        json!({"token": "abc", "user": {"id": 1, "email": null}})
    );
    assert_eq!(event.kind, "login");
}

#[test]
fn test_error_serializes_to_structured_json() {
    let mut doc = json!({"user": "john"});
    let err = redact(&["user", "name"], &mut doc).unwrap_err();
    assert!(matches!(err, RedactError::UnsupportedType { .. }));

    let value = err.to_json();
    assert_eq!(value["code"], "unsupported_type");
    assert_eq!(value["kind"], "leaf");
    assert_eq!(value["path"], json!(["user"]));
    assert!(value["message"].as_str().is_some_and(|m| m.contains("name")));
}

#[test]
fn test_options_load_from_configuration() {
    let options: RedactOptions =
        serde_json::from_value(json!({"missing_keys": "reject", "map_entries": "in_place"}))
            .unwrap();
    assert_eq!(options.missing_keys, MissingKeyPolicy::Reject);
    assert_eq!(options.map_entries, MapEntryPolicy::InPlace);

    let partial: RedactOptions = serde_json::from_value(json!({"missing_keys": "reject"})).unwrap();
    assert_eq!(partial.map_entries, MapEntryPolicy::ByReference);

    let mut doc = json!({});
    let err = Redactor::with_options(options)
        .redact(&["token"], &mut doc)
        .unwrap_err();
    assert_eq!(err.code(), "no_such_key");
}
