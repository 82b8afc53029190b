//! The capability filter: structural validation of candidates.
//!
//! Qualification rules, in order, first match wins:
//!
//! 1. A non-constructible candidate is rejected as `NotConstructible`.
//! 2. A candidate without an init hook qualifies; initialization is skipped
//!    entirely at use time.
//! 3. An init hook must accept exactly one options argument, else
//!    `BadInitSignature`.
//! 4. An init hook must not report a value through its return channel, else
//!    `BadInitReturn`. Signaling failure through the error channel is fine
//!    and surfaces as an init failure at call time, not here.

use crate::error::Rejection;
use crate::namespace::{Constructor, SymbolKind};
use crate::scan::Candidate;
use logwright_parser_core::Parser;
use tracing::debug;

/// A validated, registrable parser blueprint.
///
/// Descriptors are immutable once created: the name, constructor, and the
/// cached capability-detection result never change after qualification.
#[derive(Clone)]
pub struct ParserDescriptor {
    name: String,
    constructor: Constructor,
    accepts_config: bool,
}

impl ParserDescriptor {
    /// The parser name the descriptor registers under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether instances of this parser take configuration through an init
    /// hook. When `false`, the loader never invokes the hook.
    pub fn accepts_config(&self) -> bool {
        self.accepts_config
    }

    /// Construct a fresh, unconfigured parser object.
    pub fn construct(&self) -> Box<dyn Parser> {
        (*self.constructor)()
    }
}

impl std::fmt::Debug for ParserDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserDescriptor")
            .field("name", &self.name)
            .field("accepts_config", &self.accepts_config)
            .finish()
    }
}

/// Decide whether a candidate qualifies as a usable parser plugin.
pub fn qualify(candidate: &Candidate<'_>) -> Result<ParserDescriptor, Rejection> {
    let parser = match candidate.symbol().kind() {
        SymbolKind::Parser(parser) => parser,
        SymbolKind::Value(value) => {
            return Err(Rejection::NotConstructible {
                type_name: value.type_name().to_string(),
            });
        }
    };

    let accepts_config = match parser.init_hook() {
        None => false,
        Some(signature) => {
            if signature.option_params != 1 {
                return Err(Rejection::BadInitSignature {
                    found: signature.option_params,
                });
            }
            if signature.returns_value {
                return Err(Rejection::BadInitReturn);
            }
            true
        }
    };

    debug!(
        candidate = %candidate.name(),
        accepts_config,
        "Candidate qualified"
    );

    Ok(ParserDescriptor {
        name: candidate.name().to_string(),
        constructor: parser.constructor(),
        accepts_config,
    })
}
