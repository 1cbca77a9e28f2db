//! Configuration
//!
//! Settings come from an optional JSON file; every field has a default so a
//! partial file (or none at all) is valid.
//!
//! ```json
//! {
//!   "model_path": "/srv/models/house_price_model.json",
//!   "deviation": 205000,
//!   "default_horizon_years": 20,
//!   "default_appreciation_pct": 40
//! }
//! ```

use crate::error::{AppraisalError, Result};
use appraisal_invest::InvestmentAssumptions;
use appraisal_model::{ModelProvider, default_candidates};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Half-width of the confidence band, in currency units.
///
/// This is the mean absolute error the shipped model reached on held-out data.
pub const DEFAULT_DEVIATION: f64 = 205_000.0;

/// Workspace configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppraisalConfig {
    /// Artifact tried before any candidate
    pub model_path: Option<PathBuf>,

    /// Candidate artifact locations; empty means the built-in defaults
    pub model_candidates: Vec<PathBuf>,

    /// Confidence band half-width
    pub deviation: f64,

    /// Amortization horizon used when none is given
    pub default_horizon_years: u32,

    /// Yearly appreciation used when none is given, in percent
    pub default_appreciation_pct: f64,
}

impl Default for AppraisalConfig {
    fn default() -> Self {
        let assumptions = InvestmentAssumptions::default();
        Self {
            model_path: None,
            model_candidates: Vec::new(),
            deviation: DEFAULT_DEVIATION,
            default_horizon_years: assumptions.horizon_years,
            default_appreciation_pct: assumptions.appreciation_pct,
        }
    }
}

impl AppraisalConfig {
    /// Read and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| AppraisalError::Config(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| AppraisalError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.deviation.is_finite() || self.deviation < 0.0 {
            return Err(AppraisalError::Config(format!(
                "deviation must be a non-negative number, got {}",
                self.deviation
            )));
        }
        self.default_assumptions()
            .map(|_| ())
            .map_err(|e| AppraisalError::Config(e.to_string()))
    }

    /// Investment assumptions built from the configured defaults.
    pub fn default_assumptions(&self) -> Result<InvestmentAssumptions> {
        Ok(InvestmentAssumptions::new(
            self.default_horizon_years,
            self.default_appreciation_pct,
        )?)
    }

    /// Artifact locations in lookup order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> = self.model_path.iter().cloned().collect();
        if self.model_candidates.is_empty() {
            candidates.extend(default_candidates());
        } else {
            candidates.extend(self.model_candidates.iter().cloned());
        }
        candidates
    }

    /// Model provider over [`candidates`](Self::candidates).
    pub fn provider(&self) -> ModelProvider {
        ModelProvider::new(self.candidates())
    }
}
