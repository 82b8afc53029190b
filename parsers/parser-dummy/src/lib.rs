//! # parser-dummy
//!
//! A dummy parser implementation for testing and development.
//!
//! This parser takes no configuration, matches every payload, and stamps a
//! couple of fixed fields into the record. It exists to demonstrate the
//! parser contract and to facilitate testing of the loading pipeline without
//! any real parsing logic.

use logwright_parser_core::prelude::*;

/// A parser that matches everything and stamps fixed fields.
pub struct DummyParser;

impl DummyParser {
    /// Create a new dummy parser instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for DummyParser {
    fn process(&mut self, record: &mut LogRecord, payload: &str) -> Result<bool, ProcessError> {
        record.insert("dummy.seen", true);
        record.insert("dummy.payload", payload);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_parser_always_matches() {
        let mut parser = DummyParser::new();
        let mut record = LogRecord::new();

        assert!(parser.process(&mut record, "any payload at all").unwrap());
        assert_eq!(record.get("dummy.seen"), Some(&true.into()));
        assert_eq!(record.get_str("dummy.payload"), Some("any payload at all"));
    }

    #[test]
    fn test_dummy_parser_needs_no_configuration() {
        let mut parser = DummyParser::new();
        assert!(parser.init(&ParserOptions::new()).is_ok());
    }

    #[test]
    fn test_dummy_parser_overwrites_on_repeat() {
        let mut parser = DummyParser::new();
        let mut record = LogRecord::new();

        parser.process(&mut record, "first").unwrap();
        parser.process(&mut record, "second").unwrap();
        assert_eq!(record.get_str("dummy.payload"), Some("second"));
    }
}
