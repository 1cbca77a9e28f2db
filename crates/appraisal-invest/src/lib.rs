#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/appraisal/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod advisor;
pub mod analytics;
pub mod error;

pub use advisor::{Comparison, Tier, classify, compare};
pub use analytics::{
    InvestmentAssumptions, InvestmentProjection, PROJECTION_YEARS, ProjectionPoint, project,
};
pub use error::{InvestError, Result};

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
