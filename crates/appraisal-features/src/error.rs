//! Error types for property records.

use thiserror::Error;

/// Result type for record operations.
pub type Result<T> = std::result::Result<T, RecordError>;

/// Errors raised while building or validating a property record.
///
/// Encoding itself never fails; these errors belong to the input surface that
/// constructs records.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    /// A numeric field is outside its registered bounds
    #[error("{field} = {value} is out of bounds [{min}, {max}]")]
    OutOfBounds {
        /// Column name of the offending field
        field: &'static str,
        /// Supplied value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// A categorical level is not part of its enumeration
    #[error("unknown {field} level: {level:?}")]
    UnknownLevel {
        /// Column name of the categorical field
        field: &'static str,
        /// Supplied level text
        level: String,
    },
}
