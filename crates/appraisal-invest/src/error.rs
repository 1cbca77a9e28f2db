//! Error types for investment analytics.

use thiserror::Error;

/// Result type for investment operations.
pub type Result<T> = std::result::Result<T, InvestError>;

/// Errors that can occur while deriving investment metrics
#[derive(Debug, Error, PartialEq)]
pub enum InvestError {
    /// An assumption or the estimate itself cannot produce a defined result
    #[error("Invalid assumption: {0}")]
    InvalidAssumption(String),
}
