//! Valuation report.

use crate::error::Result;
use appraisal_features::PropertyRecord;
use appraisal_invest::{Comparison, InvestmentProjection, Tier, compare};
use appraisal_model::ValuationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything produced for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,

    /// Property that was valued.
    pub property: PropertyRecord,

    /// Point estimate and deviation band.
    pub valuation: ValuationResult,

    /// Asking price, when one was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asking_price: Option<f64>,

    /// Asking price against the estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,

    /// Rent, yield, and value projection.
    pub projection: InvestmentProjection,

    /// Conditions that reduce confidence in the estimate.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ValuationReport {
    /// Create a new report.
    pub fn new(
        property: PropertyRecord,
        valuation: ValuationResult,
        projection: InvestmentProjection,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            property,
            valuation,
            asking_price: None,
            comparison: None,
            projection,
            warnings: Vec::new(),
        }
    }

    /// Compare an asking price against the estimate.
    ///
    /// A non-positive price is treated as absent.
    pub fn with_asking_price(mut self, asking_price: Option<f64>) -> Self {
        let comparison = asking_price
            .map(|price| compare(price, self.valuation.estimate, self.valuation.deviation))
            .filter(|cmp| cmp.tier != Tier::NoComparison);
        self.asking_price = comparison.and(asking_price);
        self.comparison = comparison;
        self
    }

    /// Attach a warning.
    pub fn with_warning(mut self, warning: impl ToString) -> Self {
        self.warnings.push(warning.to_string());
        self
    }

    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the report in the given format.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Markdown => Ok(self.to_markdown()),
            ReportFormat::Json => self.to_json(),
        }
    }
}

/// Report rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain text table.
    #[default]
    Text,

    /// Markdown document.
    Markdown,

    /// Pretty-printed JSON.
    Json,
}
