//! Parser configuration options.
//!
//! Options are an opaque table of TOML values. The loading machinery forwards
//! them verbatim to a parser's init hook; only the parser interprets their
//! shape.

use crate::error::OptionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration passed to a parser's init hook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParserOptions {
    values: BTreeMap<String, toml::Value>,
}

impl ParserOptions {
    /// Create an empty option table.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Build an option table from a parsed TOML table.
    pub fn from_table(table: toml::value::Table) -> Self {
        Self {
            values: table.into_iter().collect(),
        }
    }

    /// Set an option, replacing any previous value under the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Get an option by key.
    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.values.get(key)
    }

    /// Get an option as a string slice, if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(toml::Value::as_str)
    }

    /// Get a string option that must be present.
    pub fn require_str(&self, key: &str) -> Result<&str, OptionError> {
        match self.values.get(key) {
            Some(value) => value.as_str().ok_or_else(|| {
                OptionError::invalid_value(key, value.to_string(), "a string")
            }),
            None => Err(OptionError::missing_required_option(key)),
        }
    }

    /// Remove an option, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<toml::Value> {
        self.values.remove(key)
    }

    /// Check whether an option is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over option keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    /// Number of options in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<toml::Value>> FromIterator<(K, V)> for ParserOptions {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut options = ParserOptions::new();
        options.set("field", "message").set("limit", 10);

        assert_eq!(options.get_str("field"), Some("message"));
        assert_eq!(options.get("limit").and_then(toml::Value::as_integer), Some(10));
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_require_str_present() {
        let options: ParserOptions = [("field", "message")].into_iter().collect();
        assert_eq!(options.require_str("field").unwrap(), "message");
    }

    #[test]
    fn test_require_str_missing() {
        let options = ParserOptions::new();
        let err = options.require_str("field").unwrap_err();
        assert!(matches!(err, OptionError::MissingRequiredOption(_)));
    }

    #[test]
    fn test_require_str_wrong_type() {
        let mut options = ParserOptions::new();
        options.set("field", 42);
        let err = options.require_str("field").unwrap_err();
        assert!(matches!(err, OptionError::InvalidValue { .. }));
    }

    #[test]
    fn test_from_table() {
        let table: toml::value::Table = toml::from_str("until = \"|\"\nfield = \"msg\"").unwrap();
        let options = ParserOptions::from_table(table);

        assert_eq!(options.get_str("until"), Some("|"));
        assert_eq!(options.get_str("field"), Some("msg"));
    }

    #[test]
    fn test_remove() {
        let mut options = ParserOptions::new();
        options.set("once", true);

        assert!(options.remove("once").is_some());
        assert!(options.is_empty());
        assert!(options.remove("once").is_none());
    }
}
