#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/appraisal/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod artifact;
pub mod engine;
pub mod error;
pub mod provider;
pub mod regressor;

pub use artifact::{Model, ModelArtifact};
pub use engine::{ValuationEngine, ValuationResult};
pub use error::{ModelError, Result};
pub use provider::{MODEL_FILE_NAME, ModelProvider, default_candidates};
pub use regressor::{
    Aggregation, LinearRegressor, Regressor, RegressorSpec, Tree, TreeEnsemble, TreeNode,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
