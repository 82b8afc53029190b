//! Option-driven construction of a single parser instance.
//!
//! The builder mirrors how a host configuration block turns into a running
//! parser: accumulate options, name the parser through the well-known
//! `parser` option, and let `build` resolve, construct, and initialize in
//! one step. Every option other than `parser` is forwarded to the init hook.

use crate::instance::ParserInstance;
use crate::registry::ParserRegistry;
use logwright_parser_core::ParserOptions;
use logwright_runtime::{RuntimeError, RuntimeResult};
use tracing::debug;

/// Well-known option names understood by the builder itself.
pub mod options {
    /// Names the registered parser to instantiate. Required.
    pub const PARSER: &str = "parser";
}

/// Builds one initialized parser instance from an option table.
#[derive(Debug)]
pub struct InstanceBuilder<'a> {
    registry: &'a ParserRegistry,
    options: ParserOptions,
}

impl<'a> InstanceBuilder<'a> {
    /// Start building against a populated registry.
    pub fn new(registry: &'a ParserRegistry) -> Self {
        Self {
            registry,
            options: ParserOptions::new(),
        }
    }

    /// Set an option. `parser` selects the parser; everything else is handed
    /// to its init hook.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.options.set(key, value);
        self
    }

    /// Resolve, construct, and initialize the instance.
    pub fn build(mut self) -> RuntimeResult<ParserInstance> {
        let name = self.options.require_str(options::PARSER)?.to_string();
        let descriptor = self
            .registry
            .get(&name)
            .ok_or_else(|| RuntimeError::UnknownParser(name.clone()))?;

        debug!(parser = %name, "Building parser instance");

        let mut instance = ParserInstance::construct(descriptor);
        self.options.remove(options::PARSER);
        instance.initialize(&self.options)?;
        Ok(instance)
    }
}
