//! HTTP Request body types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key/value form body.
///
/// Top-level fields keep insertion order. Array and object values are sent
/// in bracket notation (`data[0][event_name]=Purchase`); a field the remote
/// API wants as JSON text must be serialized to a string before insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormBody {
    fields: Map<String, Value>,
}

impl FormBody {
    /// Creates an empty form body.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Inserts a field, replacing any previous value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the fields as `(key, text)` pairs ready for form encoding.
    ///
    /// Strings are used verbatim, numbers and booleans in their JSON text
    /// form. Nested values expand to one pair per leaf, keyed as
    /// `field[index]` or `field[key]`. Nulls are omitted at any depth.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.fields {
            flatten_into(key.clone(), value, &mut pairs);
        }
        pairs
    }

    /// Returns true if the body has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn flatten_into(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (name, item) in map {
                flatten_into(format!("{key}[{name}]"), item, pairs);
            }
        }
        scalar => pairs.push((key, scalar.to_string())),
    }
}

/// HTTP request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "fields", rename_all = "snake_case")]
pub enum RequestBody {
    /// No body
    #[default]
    None,
    /// Form URL encoded body
    Form(FormBody),
}

impl RequestBody {
    /// Creates an empty body.
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Returns the form body, if any.
    #[must_use]
    pub const fn as_form(&self) -> Option<&FormBody> {
        match self {
            Self::Form(form) => Some(form),
            Self::None => None,
        }
    }

    /// Returns the Content-Type header value for this body.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Form(_) => Some("application/x-www-form-urlencoded"),
        }
    }

    /// Returns true if there is no body.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
