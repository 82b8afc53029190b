//! # logwright-runtime
//!
//! Candidate discovery and validation for logwright parser plugins.
//!
//! This crate provides:
//! - A namespace/symbol model for declaring parser plugins
//! - Candidate scanning over a namespace
//! - The capability filter that turns candidates into descriptors
//! - The runtime error taxonomy
//!
//! ## Loading pipeline
//!
//! A host declares parser types (and anything else it exports) as symbols in
//! a [`Namespace`]. [`scan`] walks the namespace lazily and yields one
//! [`Candidate`] per defined symbol; [`qualify`] validates each candidate's
//! structural capabilities and produces an immutable [`ParserDescriptor`]
//! for the ones that hold up. Rejected candidates are reported, never fatal:
//! a malformed symbol does not abort the scan.
//!
//! ## Validation model
//!
//! A candidate qualifies when it is constructible and, if it declares an
//! init hook, the hook accepts exactly one options argument and reports
//! nothing through its return value. The check runs once, at qualification
//! time; the result is cached in the descriptor so later invocation is a
//! direct call, not a repeated inspection.

pub mod error;
pub mod filter;
pub mod namespace;
pub mod scan;

pub use error::{Rejection, RuntimeError, RuntimeResult};
pub use filter::{qualify, ParserDescriptor};
pub use namespace::{InitSignature, Namespace, Symbol, SymbolKind};
pub use scan::{scan, Candidate, Scan};
