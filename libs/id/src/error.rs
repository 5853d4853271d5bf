//! Error types for identity number construction, parsing, and formatting.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type used across this crate.
pub type PinResult<T> = Result<T, PinError>;

/// Errors that can occur when building or parsing an identity number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PinError {
    /// A required argument was not supplied.
    #[error("missing required argument '{name}'")]
    MissingArgument { name: &'static str },

    /// The ordinal number is outside `0..=max`.
    #[error("ordinal number {ordinal} is out of range: expected a value between 0 and {max}")]
    OrdinalOutOfRange { ordinal: i64, max: u16 },

    /// The date of birth cannot be written with a four-digit year.
    #[error("date of birth {date} is out of range: year must be between 1 and 9999")]
    DateOutOfRange { date: NaiveDate },

    /// The input is not a recognized identity number layout.
    #[error("'{input}' is not a valid format for a Swedish personal identity number")]
    InvalidFormat { input: String },

    /// The name does not match any known format.
    #[error("unknown identity number format '{name}'")]
    UnknownFormat { name: String },
}

impl PinError {
    /// Returns true if this error was caused by malformed input text.
    pub fn is_format_error(&self) -> bool {
        matches!(self, PinError::InvalidFormat { .. })
    }

    /// Returns true if this error was caused by a value outside its allowed range.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            PinError::OrdinalOutOfRange { .. } | PinError::DateOutOfRange { .. }
        )
    }
}
