//! # Parser Registry
//!
//! Holds the validated set of parser descriptors, keyed by name, in
//! registration order.
//!
//! The registry is deliberately a plain struct with no interior locking:
//! population is a single-writer phase, after which the registry is read-only
//! and safe for concurrent lookups through shared references. Registering
//! under an existing name overwrites the previous descriptor
//! (last-write-wins) while keeping its original slot in iteration order.

use indexmap::IndexMap;
use logwright_runtime::ParserDescriptor;
use tracing::debug;

/// Registry of validated parser descriptors.
pub struct ParserRegistry {
    parsers: IndexMap<String, ParserDescriptor>,
}

impl ParserRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            parsers: IndexMap::new(),
        }
    }

    /// Register a descriptor under its name.
    ///
    /// If a descriptor with the same name already exists it is replaced; the
    /// name keeps its original position in iteration order.
    pub fn register(&mut self, descriptor: ParserDescriptor) {
        let name = descriptor.name().to_string();
        if self.parsers.insert(name.clone(), descriptor).is_some() {
            debug!(parser = %name, "Replaced previously registered parser");
        } else {
            debug!(parser = %name, "Registered parser");
        }
    }

    /// Get a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&ParserDescriptor> {
        self.parsers.get(name)
    }

    /// Iterate over descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ParserDescriptor> {
        self.parsers.values()
    }

    /// All registered parser names, in registration order.
    pub fn list(&self) -> Vec<&str> {
        self.parsers.keys().map(|s| s.as_str()).collect()
    }

    /// Check if a parser with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.parsers.contains_key(name)
    }

    /// Number of registered parsers.
    pub fn count(&self) -> usize {
        self.parsers.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Remove a parser from the registry, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<ParserDescriptor> {
        self.parsers.shift_remove(name)
    }

    /// Clear all parsers from the registry.
    pub fn clear(&mut self) {
        self.parsers.clear();
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parsers", &self.list())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logwright_parser_core::{LogRecord, Parser, ProcessError};
    use logwright_runtime::{qualify, scan, Namespace, Symbol};

    struct MarkerParser {
        marker: &'static str,
    }

    impl Parser for MarkerParser {
        fn process(&mut self, record: &mut LogRecord, _payload: &str) -> Result<bool, ProcessError> {
            record.insert("marker", self.marker);
            Ok(true)
        }
    }

    fn descriptor(name: &str, marker: &'static str) -> ParserDescriptor {
        let mut ns = Namespace::new("test_module");
        ns.define(Symbol::parser(name, move || {
            Box::new(MarkerParser { marker })
        }));
        qualify(&scan(&ns).next().unwrap()).unwrap()
    }

    #[test]
    fn test_new_registry() {
        let registry = ParserRegistry::new();
        assert_eq!(registry.count(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ParserRegistry::new();
        registry.register(descriptor("kv", "kv"));

        assert_eq!(registry.count(), 1);
        assert!(registry.contains("kv"));
        assert_eq!(registry.get("kv").unwrap().name(), "kv");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_iteration_follows_registration_order() {
        let mut registry = ParserRegistry::new();
        registry.register(descriptor("third", "c"));
        registry.register(descriptor("first", "a"));
        registry.register(descriptor("second", "b"));

        assert_eq!(registry.list(), vec!["third", "first", "second"]);
    }

    #[test]
    fn test_reregistration_is_last_write_wins() {
        let mut registry = ParserRegistry::new();
        registry.register(descriptor("kv", "old"));
        registry.register(descriptor("other", "x"));
        registry.register(descriptor("kv", "new"));

        // Still one entry per name, in the original slot.
        assert_eq!(registry.count(), 2);
        assert_eq!(registry.list(), vec!["kv", "other"]);

        // Only the second registration is resolvable.
        let mut parser = registry.get("kv").unwrap().construct();
        let mut record = LogRecord::new();
        parser.process(&mut record, "").unwrap();
        assert_eq!(record.get_str("marker"), Some("new"));
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut registry = ParserRegistry::new();
        registry.register(descriptor("a", "a"));
        registry.register(descriptor("b", "b"));
        registry.register(descriptor("c", "c"));

        assert!(registry.remove("b").is_some());
        assert_eq!(registry.list(), vec!["a", "c"]);
        assert!(registry.remove("b").is_none());
    }

    #[test]
    fn test_clear() {
        let mut registry = ParserRegistry::new();
        registry.register(descriptor("a", "a"));
        registry.register(descriptor("b", "b"));

        registry.clear();
        assert!(registry.is_empty());
    }
}
