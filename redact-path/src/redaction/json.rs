//! `serde_json::Value` support for path redaction.
//!
//! A JSON document is walked by its dynamic structure: objects are keyed maps
//! whose entries can be descended into, arrays are sequences, and every other
//! value is a leaf. The zero value of any JSON value is `null`, so redacting
//! a field keeps the key and nulls its value.

use serde_json::{Map, Value};

use super::traits::{KeyedMap, Redactable, Shape};

impl Redactable for Value {
    fn reset(&mut self) {
        *self = Value::Null;
    }

    fn shape(&mut self) -> Shape<'_> {
        match self {
            Value::Object(map) => Shape::KeyedMap(map),
            Value::Array(elements) => Shape::Sequence(elements),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Shape::Leaf,
        }
    }

    fn zeroed() -> Self {
        Value::Null
    }
}

impl Redactable for Map<String, Value> {
    fn reset(&mut self) {
        self.clear();
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::KeyedMap(self)
    }

    fn zeroed() -> Self {
        Map::new()
    }
}

impl KeyedMap for Map<String, Value> {
    fn entry_mut(&mut self, key: &str) -> Option<&mut dyn Redactable> {
        let value: &mut dyn Redactable = self.get_mut(key)?;
        Some(value)
    }

    fn insert_zeroed(&mut self, key: &str) -> bool {
        self.insert(key.to_owned(), Value::Null);
        true
    }

    // Entries are owned by the document and borrowed in place.
    fn entries_addressable(&self) -> bool {
        true
    }
}
