//! Input-consumption tracking for hydrating nodes from untyped JSON.

use std::collections::HashSet;

use serde_json::Value;

use crate::JsonMap;
use crate::error::{Error, HydrationError};
use crate::node::Parse;

/// Wraps one raw JSON object for the duration of one node's hydration.
///
/// Every `use_*` accessor marks its key as consumed, whether or not the key is
/// present. Whatever is left unconsumed at the end becomes the node's extras.
///
/// # Example
///
/// ```ignore
/// fn hydrate_fields(&mut self, data: &mut HydrationData) -> Result<(), Error> {
///     self.value = data.use_str("value")?;
///     self.text = data.use_node("text")?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HydrationData {
    data: JsonMap,
    consumed: HashSet<String>,
}

impl HydrationData {
    pub fn new(data: JsonMap) -> Self {
        Self {
            data,
            consumed: HashSet::new(),
        }
    }

    /// Whether `key` is present with a non-null value. Does not consume.
    pub fn has(&self, key: &str) -> bool {
        matches!(self.data.get(key), Some(value) if !value.is_null())
    }

    /// Peek at a value without consuming it.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key).filter(|value| !value.is_null())
    }

    /// Whether `key` has been consumed.
    pub fn is_consumed(&self, key: &str) -> bool {
        self.consumed.contains(key)
    }

    fn mark(&mut self, key: &str) {
        self.consumed.insert(key.to_string());
    }

    /// Consume `key` and return its value. Null counts as absent.
    pub fn use_value(&mut self, key: &str) -> Option<Value> {
        self.mark(key);
        self.get(key).cloned()
    }

    /// Consume `key` as a list; empty when absent.
    pub fn use_list(&mut self, key: &str) -> Result<Vec<Value>, HydrationError> {
        match self.use_value(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(unexpected(key, "a list", &other)),
        }
    }

    /// Consume `key` as an object; empty when absent.
    pub fn use_object(&mut self, key: &str) -> Result<JsonMap, HydrationError> {
        match self.use_value(key) {
            None => Ok(JsonMap::new()),
            Some(Value::Object(map)) => Ok(map),
            Some(other) => Err(unexpected(key, "an object", &other)),
        }
    }

    pub fn use_str(&mut self, key: &str) -> Result<Option<String>, HydrationError> {
        match self.use_value(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(unexpected(key, "a string", &other)),
        }
    }

    pub fn use_bool(&mut self, key: &str) -> Result<Option<bool>, HydrationError> {
        match self.use_value(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(other) => Err(unexpected(key, "a boolean", &other)),
        }
    }

    pub fn use_u64(&mut self, key: &str) -> Result<Option<u64>, HydrationError> {
        match self.use_value(key) {
            None => Ok(None),
            Some(value) => match value.as_u64() {
                Some(n) => Ok(Some(n)),
                None => Err(unexpected(key, "a non-negative integer", &value)),
            },
        }
    }

    /// Consume `key` as a list of strings.
    pub fn use_strings(&mut self, key: &str) -> Result<Vec<String>, HydrationError> {
        self.use_list(key)?
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(unexpected(key, "a list of strings", &other)),
            })
            .collect()
    }

    /// Consume `key` as one of the strings accepted by `parse`.
    pub fn use_enum<T>(
        &mut self,
        key: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>, HydrationError> {
        self.use_str(key)?
            .map(|value| parse(&value).ok_or_else(|| unsupported(key, value)))
            .transpose()
    }

    /// Consume `key` as a list of strings accepted by `parse`.
    pub fn use_enums<T>(
        &mut self,
        key: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Vec<T>, HydrationError> {
        self.use_strings(key)?
            .into_iter()
            .map(|value| parse(&value).ok_or_else(|| unsupported(key, value)))
            .collect()
    }

    /// Consume `key` and parse it as a nested node.
    pub fn use_node<T: Parse>(&mut self, key: &str) -> Result<Option<T>, Error> {
        match self.use_value(key) {
            None => Ok(None),
            Some(Value::Object(map)) => T::from_map(map).map(Some),
            Some(other) => Err(unexpected(key, "an object", &other).into()),
        }
    }

    /// Consume `key` and parse each entry as a nested node.
    pub fn use_nodes<T: Parse>(&mut self, key: &str) -> Result<Vec<T>, Error> {
        self.use_list(key)?
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => T::from_map(map),
                other => Err(unexpected(key, "a list of objects", &other).into()),
            })
            .collect()
    }

    /// All entries not consumed so far, in input order.
    pub fn extras(&self) -> JsonMap {
        self.data
            .iter()
            .filter(|(key, _)| !self.consumed.contains(key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Like [`extras`](Self::extras), consuming the tracker.
    pub fn into_extras(self) -> JsonMap {
        let consumed = self.consumed;
        self.data
            .into_iter()
            .filter(|(key, _)| !consumed.contains(key.as_str()))
            .collect()
    }
}

/// Short name of a JSON value's shape, for error messages.
pub(crate) fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn unexpected(key: &str, expected: &'static str, found: &Value) -> HydrationError {
    HydrationError::UnexpectedShape {
        field: key.to_string(),
        expected,
        found: shape_of(found),
    }
}

fn unsupported(key: &str, value: String) -> HydrationError {
    HydrationError::UnsupportedValue {
        field: key.to_string(),
        value,
    }
}
