//! Error types for model loading and prediction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while loading or invoking a model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// No artifact exists at any candidate location
    #[error("model artifact not found (searched: {})", join_paths(.searched))]
    NotFound {
        /// Candidate paths, in the order they were tried
        searched: Vec<PathBuf>,
    },

    /// An artifact exists but cannot be used
    #[error("invalid model artifact {}: {reason}", .path.display())]
    InvalidArtifact {
        /// Path of the artifact
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// The model rejected an input vector
    #[error("prediction failed: {0}")]
    Prediction(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModelError {
    /// Whether the error means no model could be obtained at all.
    pub const fn is_fatal_load(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidArtifact { .. })
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
