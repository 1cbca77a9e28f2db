//! Error types for report rendering and export.

use thiserror::Error;

/// Errors that can occur during report generation or export.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
