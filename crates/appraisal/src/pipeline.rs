//! End-to-end appraisal: encode, predict, compare, project.

use crate::config::AppraisalConfig;
use crate::error::Result;
use appraisal_features::{Alignment, EncodedVector, PropertyRecord, encode};
use appraisal_invest::{Comparison, InvestmentAssumptions, InvestmentProjection, Tier, compare};
use appraisal_model::{ModelProvider, ValuationEngine, ValuationResult};
use appraisal_output::ValuationReport;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Condition that lowers confidence in an estimate without preventing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuationWarning {
    /// The model artifact has no feature names, so the record was passed to
    /// the model in raw one-hot order
    #[display("model artifact has no feature names; features were not aligned to the model")]
    MissingFeatureContract,
}

/// Everything derived from one property.
#[derive(Debug, Clone, PartialEq)]
pub struct Appraisal {
    /// Feature vector given to the model
    pub vector: EncodedVector,
    /// Estimate and deviation band
    pub valuation: ValuationResult,
    /// Asking-price comparison, when a positive asking price was supplied
    pub comparison: Option<Comparison>,
    /// Rent, yield, and value projection
    pub projection: InvestmentProjection,
    /// Degraded-mode conditions
    pub warnings: Vec<ValuationWarning>,
}

impl Appraisal {
    /// Build a report for `record`.
    pub fn report(&self, record: &PropertyRecord, asking_price: Option<f64>) -> ValuationReport {
        self.warnings.iter().fold(
            ValuationReport::new(record.clone(), self.valuation, self.projection.clone())
                .with_asking_price(asking_price),
            |report, warning| report.with_warning(warning),
        )
    }
}

/// Runs the valuation pipeline against a lazily loaded model.
#[derive(Debug)]
pub struct Appraiser {
    provider: ModelProvider,
    deviation: f64,
}

impl Default for Appraiser {
    fn default() -> Self {
        Self::from_config(&AppraisalConfig::default())
    }
}

impl Appraiser {
    /// Create an appraiser over a provider and band half-width.
    pub const fn new(provider: ModelProvider, deviation: f64) -> Self {
        Self {
            provider,
            deviation,
        }
    }

    /// Create an appraiser from configuration.
    pub fn from_config(config: &AppraisalConfig) -> Self {
        Self::new(config.provider(), config.deviation)
    }

    /// Model provider.
    pub const fn provider(&self) -> &ModelProvider {
        &self.provider
    }

    /// Band half-width.
    pub const fn deviation(&self) -> f64 {
        self.deviation
    }

    /// Prediction engine over the loaded model.
    pub fn engine(&self) -> Result<ValuationEngine> {
        Ok(ValuationEngine::new(self.provider.load()?))
    }

    /// Encode `record` against the model's feature contract.
    ///
    /// Without a contract the vector is unaligned and a
    /// [`ValuationWarning::MissingFeatureContract`] is returned alongside.
    pub fn encode(&self, record: &PropertyRecord) -> Result<(EncodedVector, Vec<ValuationWarning>)> {
        let vector = encode(record, self.provider.feature_names()?);
        let warnings = match vector.alignment() {
            Alignment::Aligned => Vec::new(),
            Alignment::Unaligned => vec![ValuationWarning::MissingFeatureContract],
        };
        Ok((vector, warnings))
    }

    /// Estimate the price of `record`.
    pub fn estimate(&self, record: &PropertyRecord) -> Result<ValuationResult> {
        let (vector, _) = self.encode(record)?;
        Ok(self.engine()?.valuate(&vector, self.deviation)?)
    }

    /// Run the full pipeline for one property.
    ///
    /// `asking_price` of `None` or a non-positive value skips the comparison.
    pub fn appraise(
        &self,
        record: &PropertyRecord,
        asking_price: Option<f64>,
        assumptions: &InvestmentAssumptions,
    ) -> Result<Appraisal> {
        let (vector, warnings) = self.encode(record)?;
        for warning in &warnings {
            warn!(%warning, "degraded valuation");
        }

        let valuation = self.engine()?.valuate(&vector, self.deviation)?;
        let comparison = asking_price
            .map(|price| compare(price, valuation.estimate, valuation.deviation))
            .filter(|cmp| cmp.tier != Tier::NoComparison);
        let projection = assumptions.project(valuation.estimate)?;

        info!(
            district = %record.district,
            estimate = valuation.estimate,
            tier = ?comparison.map(|c| c.tier),
            "appraisal complete"
        );

        Ok(Appraisal {
            vector,
            valuation,
            comparison,
            projection,
            warnings,
        })
    }
}
