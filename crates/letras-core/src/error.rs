//! Error types for number-to-words conversion.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while spelling a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A numeral produced by fixed-point formatting did not parse as an integer.
    #[error("invalid numeral '{numeral}': {source}")]
    Parse {
        numeral: String,
        #[source]
        source: ParseIntError,
    },

    /// The integer portion is negative or greater than 999,999,999.
    #[error("number out of range: {numeral} (supported range is 0 to 999,999,999)")]
    OutOfRange { numeral: String },
}

/// Convenience alias used throughout letras-core.
pub type Result<T> = std::result::Result<T, ConversionError>;
