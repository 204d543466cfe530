//! Error types for data parsing in airq-types.

use thiserror::Error;

/// Errors that can occur when decoding a vendor payload into readings.
///
/// This error type is platform-agnostic and carries only the information
/// needed to explain which field could not be decoded.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The field label does not occur in the payload.
    #[error("Missing field: {field}")]
    MissingField {
        /// The label that was searched for.
        field: String,
    },

    /// The field was found but its value is not an integer.
    #[error("Invalid value for field {field}: {text:?}")]
    InvalidValue {
        /// The label whose value failed to parse.
        field: String,
        /// The raw text found after the label.
        text: String,
    },
}

impl ParseError {
    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            text: text.into(),
        }
    }
}

/// Result type alias using airq-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
