//! Error types for the logwright runtime.

use logwright_parser_core::{OptionError, ProcessError};
use thiserror::Error;

/// Why the capability filter turned a candidate away.
///
/// Rejections are resolved entirely inside a scan: the offending candidate is
/// skipped, the scan continues, and nothing is surfaced as a hard failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The symbol is a plain value, not a constructible parser type.
    #[error("symbol is not constructible (found {type_name})")]
    NotConstructible {
        /// Description of what the symbol actually was.
        type_name: String,
    },

    /// The init hook does not accept exactly one options argument.
    #[error("init hook must accept exactly one options argument, found {found}")]
    BadInitSignature {
        /// Number of options arguments the hook declares.
        found: usize,
    },

    /// The init hook reports a value through its return channel.
    #[error("init hook must not return a value")]
    BadInitReturn,
}

/// Errors that can occur in the logwright runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A candidate failed capability validation.
    #[error("candidate rejected: {0}")]
    Rejected(#[from] Rejection),

    /// An init hook signaled failure at call time.
    #[error("parser '{name}' failed to initialize: {source}")]
    InitFailed {
        name: String,
        #[source]
        source: OptionError,
    },

    /// A parser signaled failure while processing a record.
    #[error("parser '{name}' failed to process record: {source}")]
    ProcessFailed {
        name: String,
        #[source]
        source: ProcessError,
    },

    /// A disposed instance was invoked.
    #[error("parser instance used after dispose")]
    UseAfterDispose,

    /// An instance was invoked before initialization, or after its init hook
    /// failed.
    #[error("parser instance '{name}' is not ready for use")]
    InstanceNotReady { name: String },

    /// No parser is registered under the requested name.
    #[error("unknown parser: {0}")]
    UnknownParser(String),

    /// The requested parser is disabled by host configuration.
    #[error("parser is disabled: {0}")]
    DisabledParser(String),

    /// A configuration option was missing or malformed.
    #[error("configuration option error: {0}")]
    Option(#[from] OptionError),

    /// The host configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let rejection = Rejection::BadInitSignature { found: 2 };
        assert_eq!(
            rejection.to_string(),
            "init hook must accept exactly one options argument, found 2"
        );
    }

    #[test]
    fn test_rejection_converts_into_runtime_error() {
        let err: RuntimeError = Rejection::BadInitReturn.into();
        assert!(matches!(err, RuntimeError::Rejected(Rejection::BadInitReturn)));
    }

    #[test]
    fn test_init_failure_preserves_source() {
        let err = RuntimeError::InitFailed {
            name: "greedy".to_string(),
            source: OptionError::missing_required_option("until"),
        };
        assert!(err.to_string().contains("greedy"));
        assert!(err.to_string().contains("missing required option"));
    }
}
