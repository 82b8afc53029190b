//! # logwright-parser-core
//!
//! Core traits and types shared by every logwright parser plugin.
//!
//! This crate defines:
//! - `LogRecord` - the mutable key/value record parsers read and enrich
//! - `ParserOptions` - the opaque configuration table handed to init hooks
//! - The `Parser` trait - the uniform `init`/`process` contract
//! - `OptionError` / `ProcessError` - the error channels parsers signal on
//!
//! Parser implementations depend on this crate only; the loading machinery
//! lives in `logwright-runtime` and `logwright-plugin-api`.

pub mod error;
pub mod options;
pub mod parser;
pub mod record;

pub use error::{OptionError, ProcessError};
pub use options::ParserOptions;
pub use parser::Parser;
pub use record::LogRecord;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{OptionError, ProcessError};
    pub use crate::options::ParserOptions;
    pub use crate::parser::Parser;
    pub use crate::record::LogRecord;
}
