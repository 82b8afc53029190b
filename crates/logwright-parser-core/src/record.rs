//! The log record parsers read and enrich.
//!
//! A `LogRecord` is a mutable mapping from string keys to arbitrary JSON
//! values. Records are owned by the host and passed into parsers by mutable
//! reference; a parser may read and write entries but never takes ownership.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A mutable, string-keyed log record.
///
/// Keys are plain strings; values are arbitrary [`serde_json::Value`]s so a
/// parser can attach structured data, not just text. Iteration order is the
/// lexicographic key order, which keeps debug output and serialized records
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    values: BTreeMap<String, Value>,
}

impl LogRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Set a field, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a field as a string slice, if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Remove a field, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Check whether a field is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Remove all fields.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for LogRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
