//! Top-level error type.

use appraisal_features::RecordError;
use appraisal_invest::InvestError;
use appraisal_model::ModelError;
use appraisal_output::ReportError;
use thiserror::Error;

/// Result type for appraisal operations.
pub type Result<T> = std::result::Result<T, AppraisalError>;

/// Any failure along the appraisal pipeline.
#[derive(Debug, Error)]
pub enum AppraisalError {
    /// Input record outside the accepted domain
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Model could not be loaded or could not predict
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Investment assumptions could not produce figures
    #[error(transparent)]
    Invest(#[from] InvestError),

    /// Report rendering or export failed
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
