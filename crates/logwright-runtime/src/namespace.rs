//! The namespace/symbol model parser plugins are declared in.
//!
//! A namespace is an ordered collection of named symbols, the way a loaded
//! module exposes its definitions. Most symbols are parser types: a
//! constructor plus a declared description of the optional init hook. A
//! namespace may also hold plain values, which the capability filter later
//! turns away as non-constructible.

use logwright_parser_core::Parser;
use std::sync::Arc;

/// A factory producing a fresh, unconfigured parser object.
pub type Constructor = Arc<dyn Fn() -> Box<dyn Parser> + Send + Sync>;

/// Declared shape of a parser type's init hook.
///
/// The hook is an ordinary, distinctly-named lifecycle method, not part of
/// construction. Its declared signature is captured here once, at definition
/// time, so qualification is a predicate over this descriptor rather than a
/// repeated inspection of the hook itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitSignature {
    /// Number of options arguments the hook accepts.
    pub option_params: usize,
    /// Whether the hook reports a value through its return channel.
    pub returns_value: bool,
}

impl InitSignature {
    pub fn new(option_params: usize, returns_value: bool) -> Self {
        Self {
            option_params,
            returns_value,
        }
    }

    /// The signature the capability filter accepts: one options argument,
    /// nothing returned.
    pub fn conforming() -> Self {
        Self::new(1, false)
    }
}

/// A parser type symbol: constructor plus optional declared init hook.
#[derive(Clone)]
pub struct ParserSymbol {
    constructor: Constructor,
    init_hook: Option<InitSignature>,
}

impl ParserSymbol {
    /// The declared init hook signature, if the type has one.
    pub fn init_hook(&self) -> Option<InitSignature> {
        self.init_hook
    }

    /// The constructor for this type.
    pub fn constructor(&self) -> Constructor {
        Arc::clone(&self.constructor)
    }
}

impl std::fmt::Debug for ParserSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserSymbol")
            .field("constructor", &"<constructor>")
            .field("init_hook", &self.init_hook)
            .finish()
    }
}

/// A plain, non-constructible value in a namespace.
#[derive(Debug, Clone)]
pub struct ValueSymbol {
    type_name: String,
}

impl ValueSymbol {
    /// Description of the value's type, used in rejection reports.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// What a symbol is.
#[derive(Debug, Clone)]
pub enum SymbolKind {
    /// A constructible parser type.
    Parser(ParserSymbol),
    /// A plain value; not a plugin candidate.
    Value(ValueSymbol),
}

/// A named entry in a namespace.
#[derive(Debug, Clone)]
pub struct Symbol {
    name: String,
    kind: SymbolKind,
}

impl Symbol {
    /// Declare a parser type without an init hook.
    pub fn parser<F>(name: impl Into<String>, construct: F) -> Self
    where
        F: Fn() -> Box<dyn Parser> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: SymbolKind::Parser(ParserSymbol {
                constructor: Arc::new(construct),
                init_hook: None,
            }),
        }
    }

    /// Declare a parser type with an init hook of the given signature.
    pub fn parser_with_init<F>(
        name: impl Into<String>,
        construct: F,
        signature: InitSignature,
    ) -> Self
    where
        F: Fn() -> Box<dyn Parser> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: SymbolKind::Parser(ParserSymbol {
                constructor: Arc::new(construct),
                init_hook: Some(signature),
            }),
        }
    }

    /// Declare a plain, non-constructible value.
    pub fn value(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Value(ValueSymbol {
                type_name: type_name.into(),
            }),
        }
    }

    /// The symbol's name, unique within its namespace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// What the symbol is.
    pub fn kind(&self) -> &SymbolKind {
        &self.kind
    }
}

/// An ordered collection of named symbols.
///
/// Symbols keep their definition order, so scanning a namespace is
/// deterministic. Re-defining a name replaces the previous symbol in place.
#[derive(Debug, Clone)]
pub struct Namespace {
    name: String,
    symbols: Vec<Symbol>,
}

impl Namespace {
    /// Create an empty namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbols: Vec::new(),
        }
    }

    /// The namespace name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Define a symbol, replacing any previous definition of the same name.
    pub fn define(&mut self, symbol: Symbol) -> &mut Self {
        match self.symbols.iter_mut().find(|s| s.name == symbol.name) {
            Some(existing) => *existing = symbol,
            None => self.symbols.push(symbol),
        }
        self
    }

    /// Look up a symbol by name.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    /// The defined symbols, in definition order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of defined symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check whether the namespace is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logwright_parser_core::{LogRecord, ProcessError};

    struct NoopParser;

    impl Parser for NoopParser {
        fn process(&mut self, _record: &mut LogRecord, _payload: &str) -> Result<bool, ProcessError> {
            Ok(false)
        }
    }

    fn noop() -> Box<dyn Parser> {
        Box::new(NoopParser)
    }

    #[test]
    fn test_define_preserves_order() {
        let mut ns = Namespace::new("test_module");
        ns.define(Symbol::parser("First", noop))
            .define(Symbol::value("SECOND", "integer"))
            .define(Symbol::parser("Third", noop));

        let names: Vec<&str> = ns.symbols().iter().map(Symbol::name).collect();
        assert_eq!(names, vec!["First", "SECOND", "Third"]);
    }

    #[test]
    fn test_redefine_replaces_in_place() {
        let mut ns = Namespace::new("test_module");
        ns.define(Symbol::parser("Target", noop))
            .define(Symbol::parser("Other", noop))
            .define(Symbol::value("Target", "integer"));

        assert_eq!(ns.len(), 2);
        let names: Vec<&str> = ns.symbols().iter().map(Symbol::name).collect();
        assert_eq!(names, vec!["Target", "Other"]);
        assert!(matches!(
            ns.get("Target").unwrap().kind(),
            SymbolKind::Value(_)
        ));
    }

    #[test]
    fn test_get_by_name() {
        let mut ns = Namespace::new("test_module");
        ns.define(Symbol::parser_with_init(
            "Configured",
            noop,
            InitSignature::conforming(),
        ));

        let symbol = ns.get("Configured").unwrap();
        match symbol.kind() {
            SymbolKind::Parser(p) => {
                assert_eq!(p.init_hook(), Some(InitSignature::new(1, false)));
            }
            SymbolKind::Value(_) => panic!("expected a parser symbol"),
        }
        assert!(ns.get("Missing").is_none());
    }

    #[test]
    fn test_constructor_produces_fresh_objects() {
        let symbol = Symbol::parser("Fresh", noop);
        let SymbolKind::Parser(p) = symbol.kind() else {
            panic!("expected a parser symbol");
        };

        let ctor = p.constructor();
        let mut a = (*ctor)();
        let mut b = (*ctor)();
        let mut record = LogRecord::new();
        assert_eq!(a.process(&mut record, "x").unwrap(), false);
        assert_eq!(b.process(&mut record, "x").unwrap(), false);
    }
}
