//! # parser-greedy
//!
//! A greedy capture parser.
//!
//! Copies the payload into a configured record field, either wholesale or up
//! to (excluding) a configured `until` marker. A payload that does not
//! contain the marker is a non-match, not an error.
//!
//! ## Options
//!
//! - `field` - record field to write the capture into (default: `"captured"`)
//! - `until` - stop capturing at this marker; omit to capture everything

use logwright_parser_core::prelude::*;

const DEFAULT_FIELD: &str = "captured";

/// A parser capturing the payload up to an optional end marker.
pub struct GreedyParser {
    field: String,
    until: Option<String>,
}

impl GreedyParser {
    /// Create a new greedy parser with default options.
    pub fn new() -> Self {
        Self {
            field: DEFAULT_FIELD.to_string(),
            until: None,
        }
    }

    /// Create a greedy parser capturing into `field` up to `until`.
    pub fn with_marker(field: impl Into<String>, until: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            until: Some(until.into()),
        }
    }
}

impl Default for GreedyParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for GreedyParser {
    fn init(&mut self, options: &ParserOptions) -> Result<(), OptionError> {
        for key in options.keys() {
            if key != "field" && key != "until" {
                return Err(OptionError::unknown_option(key));
            }
        }

        if let Some(value) = options.get("field") {
            let field = value.as_str().ok_or_else(|| {
                OptionError::invalid_value("field", value.to_string(), "a string")
            })?;
            self.field = field.to_string();
        }

        if let Some(value) = options.get("until") {
            let until = value.as_str().ok_or_else(|| {
                OptionError::invalid_value("until", value.to_string(), "a string")
            })?;
            self.until = Some(until.to_string());
        }

        Ok(())
    }

    fn process(&mut self, record: &mut LogRecord, payload: &str) -> Result<bool, ProcessError> {
        match &self.until {
            None => {
                record.insert(self.field.clone(), payload);
                Ok(true)
            }
            Some(marker) => match payload.find(marker.as_str()) {
                Some(pos) => {
                    record.insert(self.field.clone(), &payload[..pos]);
                    Ok(true)
                }
                None => Ok(false),
            },
        }
    }
}
