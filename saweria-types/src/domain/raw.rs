//! Raw provider payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::normalize;

/// Untyped response returned by the provider.
///
/// The provider's schema drifts between versions, so the payload is kept as a
/// loosely typed JSON value. Field lookups only succeed when the payload is an object;
/// any other shape behaves like an object with no keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawProviderResponse(Value);

impl RawProviderResponse {
    /// Wraps a provider value. Falsy values (`null`, `false`, `0`, `""`) become an empty object.
    pub fn new(value: Value) -> Self {
        if normalize::is_truthy(&value) {
            Self(value)
        } else {
            Self::default()
        }
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(key))
    }

    /// First truthy value among `keys`, in order.
    pub fn first_truthy(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.get(key))
            .find(|value| normalize::is_truthy(value))
    }

    /// Resolves a text field: first truthy candidate as a string, or `""`.
    pub fn text(&self, keys: &[&str]) -> String {
        normalize::text(self.first_truthy(keys))
    }

    /// Resolves a text field with a literal fallback.
    pub fn text_or(&self, keys: &[&str], fallback: &str) -> String {
        match self.first_truthy(keys) {
            Some(value) => normalize::text(Some(value)),
            None => fallback.to_string(),
        }
    }

    /// Resolves a numeric field: the first candidate that parses as a finite number.
    pub fn number(&self, keys: &[&str]) -> Option<serde_json::Number> {
        keys.iter()
            .find_map(|key| normalize::number(self.get(key)))
    }

    /// Resolves a passthrough field: the first truthy candidate, cloned verbatim.
    pub fn passthrough(&self, keys: &[&str]) -> Option<Value> {
        self.first_truthy(keys).cloned()
    }

    /// Inserts `value` under `key` unless a truthy value is already present.
    ///
    /// Non-object payloads are left untouched.
    pub fn fill(&mut self, key: &str, value: Value) {
        if let Value::Object(map) = &mut self.0 {
            let present = map.get(key).is_some_and(normalize::is_truthy);
            if !present {
                map.insert(key.to_string(), value);
            }
        }
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl Default for RawProviderResponse {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl From<Value> for RawProviderResponse {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<Map<String, Value>> for RawProviderResponse {
    fn from(map: Map<String, Value>) -> Self {
        Self(Value::Object(map))
    }
}
