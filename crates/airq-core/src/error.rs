//! Error types for airq-core.
//!
//! Most sensor conditions are not errors: a refused pairing is reported as
//! `false`, and querying a sensor that is not connected yields an empty
//! [`Reading`](airq_types::Reading). Errors are reserved for data that
//! cannot be trusted and for configuration or output problems.
//!
//! | Error Type | Raised by | Caller strategy |
//! |------------|-----------|-----------------|
//! | [`Error::Parse`] | structured adapter `get_data` | Skip the sensor for this pass |
//! | [`Error::Io`] | renderer output | Abort the report |
//! | [`Error::InvalidConfig`] | threshold validation | Fix configuration and restart |

use thiserror::Error;

use airq_types::ParseError;

/// Errors that can occur in airq-core.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A vendor payload could not be decoded.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// I/O error while writing output.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result type alias using airq-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
