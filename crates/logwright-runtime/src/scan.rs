//! Candidate scanning over a namespace.
//!
//! Scanning is lazy, finite, and restartable: calling [`scan`] again on an
//! unchanged namespace yields the same candidates in the same order. Only
//! symbols that are actually defined are visited; the scanner has no side
//! effects beyond introspection.

use crate::namespace::{InitSignature, Namespace, Symbol, SymbolKind};
use tracing::debug;

/// A symbol under consideration for plugin registration.
///
/// Candidates are borrowed views produced by the scanner and consumed by the
/// capability filter; they carry no validated state of their own.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    namespace: &'a str,
    symbol: &'a Symbol,
}

impl<'a> Candidate<'a> {
    /// The candidate's name, unique within its namespace.
    pub fn name(&self) -> &'a str {
        self.symbol.name()
    }

    /// The namespace the candidate was scanned from.
    pub fn namespace(&self) -> &'a str {
        self.namespace
    }

    /// Whether the candidate is a constructible parser type.
    pub fn is_constructible(&self) -> bool {
        matches!(self.symbol.kind(), SymbolKind::Parser(_))
    }

    /// The declared init hook signature, if the candidate has one.
    pub fn init_signature(&self) -> Option<InitSignature> {
        match self.symbol.kind() {
            SymbolKind::Parser(p) => p.init_hook(),
            SymbolKind::Value(_) => None,
        }
    }

    /// The underlying symbol.
    pub fn symbol(&self) -> &'a Symbol {
        self.symbol
    }
}

/// Lazy iterator over the candidates of a namespace.
pub struct Scan<'a> {
    namespace: &'a str,
    symbols: std::slice::Iter<'a, Symbol>,
}

impl<'a> Iterator for Scan<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let symbol = self.symbols.next()?;
        debug!(
            namespace = %self.namespace,
            symbol = %symbol.name(),
            "Scanned candidate"
        );
        Some(Candidate {
            namespace: self.namespace,
            symbol,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.symbols.size_hint()
    }
}

/// Scan a namespace, yielding one candidate per defined symbol.
pub fn scan(namespace: &Namespace) -> Scan<'_> {
    debug!(
        namespace = %namespace.name(),
        symbols = namespace.len(),
        "Scanning namespace"
    );
    Scan {
        namespace: namespace.name(),
        symbols: namespace.symbols().iter(),
    }
}
