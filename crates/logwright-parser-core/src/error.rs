//! Error channels parsers signal failure on.

use thiserror::Error;

/// Errors an init hook reports while consuming its options.
///
/// An init hook never reports anything through its return value; this error
/// channel is the only way for it to signal failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// A required option is missing.
    #[error("missing required option: {0}")]
    MissingRequiredOption(String),

    /// An option was present but its value is unusable.
    #[error("invalid value for option '{option}': got '{value}', expected {expected}")]
    InvalidValue {
        option: String,
        value: String,
        expected: String,
    },

    /// An option the parser does not understand.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Any other initialization failure.
    #[error("{0}")]
    Other(String),
}

impl OptionError {
    pub fn missing_required_option(option: impl Into<String>) -> Self {
        OptionError::MissingRequiredOption(option.into())
    }

    pub fn invalid_value(
        option: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        OptionError::InvalidValue {
            option: option.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    pub fn unknown_option(option: impl Into<String>) -> Self {
        OptionError::UnknownOption(option.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        OptionError::Other(message.into())
    }
}

/// A failure signaled by a parser while processing a record.
///
/// Distinct from a non-match: returning `Ok(false)` from `process` means
/// "nothing to do here" and is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProcessError {
    message: String,
}

impl ProcessError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_error_display() {
        let err = OptionError::missing_required_option("parser");
        assert_eq!(err.to_string(), "missing required option: parser");

        let err = OptionError::invalid_value("until", "42", "a string");
        assert_eq!(
            err.to_string(),
            "invalid value for option 'until': got '42', expected a string"
        );
    }

    #[test]
    fn test_process_error_display() {
        let err = ProcessError::new("payload is not valid UTF-8 key-value data");
        assert_eq!(err.to_string(), "payload is not valid UTF-8 key-value data");
        assert_eq!(err.message(), "payload is not valid UTF-8 key-value data");
    }
}
