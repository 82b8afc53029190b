//! The parser plugin contract.

use crate::error::{OptionError, ProcessError};
use crate::options::ParserOptions;
use crate::record::LogRecord;

/// The uniform contract every loaded parser plugin exposes.
///
/// A parser is constructed by the loader, optionally configured once through
/// [`Parser::init`], and then invoked repeatedly through [`Parser::process`].
/// Instances are exclusively owned by one caller at a time; `process` may
/// mutate internal state, so the trait requires `Send` but not `Sync`.
pub trait Parser: Send {
    /// One-shot configuration hook, run before first use.
    ///
    /// The default implementation ignores the options and succeeds, so
    /// parsers that take no configuration simply omit this method. A hook
    /// signals failure only through the error channel; it never reports a
    /// result through its return value.
    fn init(&mut self, options: &ParserOptions) -> Result<(), OptionError> {
        let _ = options;
        Ok(())
    }

    /// Inspect `payload` and fold any derived fields into `record`.
    ///
    /// Returns `Ok(true)` when the parser produced or augmented the record,
    /// `Ok(false)` when the payload is not a match ("nothing to do" is not an
    /// error). The record is borrowed from the caller; a parser may mutate it
    /// regardless of which result it returns.
    fn process(&mut self, record: &mut LogRecord, payload: &str) -> Result<bool, ProcessError>;
}
