#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/appraisal/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod pipeline;

// Re-export main types from sub-crates
pub use appraisal_features as features;
pub use appraisal_invest as invest;
pub use appraisal_model as model;
pub use appraisal_output as output;

pub use config::{AppraisalConfig, DEFAULT_DEVIATION};
pub use error::{AppraisalError, Result};
pub use pipeline::{Appraisal, Appraiser, ValuationWarning};

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
