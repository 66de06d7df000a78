//! Error types for the money codec
//!
//! The conversions themselves never fail on malformed input: unparseable
//! strings fall back to the configured blank value and unknown patterns are
//! returned literally. Errors are reserved for two situations:
//!
//! - **Configuration errors**: option values the caller controls directly
//!   (precision out of range, empty separator, invalid credit regex)
//! - **Batch I/O errors**: file access and CSV problems in the batch tool

use thiserror::Error;

/// Main error type for the money codec
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoneyError {
    /// An option value violates a precondition of the codec
    ///
    /// Raised when options are resolved, never during a conversion.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfiguration {
        /// Name of the offending option
        field: String,
        /// Why the value was rejected
        message: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed row is skipped
    /// and processing continues with the next row.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for MoneyError {
    fn from(error: std::io::Error) -> Self {
        MoneyError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for MoneyError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        MoneyError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl MoneyError {
    /// Create an InvalidConfiguration error
    pub fn invalid_configuration(field: &str, message: impl Into<String>) -> Self {
        MoneyError::InvalidConfiguration {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        MoneyError::ParseError {
            line,
            message: message.into(),
        }
    }
}
