//! Valuation Engine
//!
//! Turns an encoded feature vector into a point price estimate using a loaded
//! model, and wraps the estimate in the fixed deviation band.

use crate::artifact::Model;
use crate::error::{ModelError, Result};
use appraisal_features::{Alignment, EncodedVector};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Point estimate with a symmetric deviation band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Predicted price
    pub estimate: f64,
    /// Half-width of the band around the estimate
    pub deviation: f64,
}

impl ValuationResult {
    /// Create a new valuation result.
    pub const fn new(estimate: f64, deviation: f64) -> Self {
        Self {
            estimate,
            deviation,
        }
    }

    /// Lower edge of the band.
    pub fn lower(&self) -> f64 {
        self.estimate - self.deviation
    }

    /// Upper edge of the band.
    pub fn upper(&self) -> f64 {
        self.estimate + self.deviation
    }

    /// Whether `price` lies inside the band (inclusive).
    pub fn contains(&self, price: f64) -> bool {
        price >= self.lower() && price <= self.upper()
    }
}

/// Stateless predictor over a shared model.
#[derive(Debug, Clone)]
pub struct ValuationEngine {
    model: Arc<Model>,
}

impl ValuationEngine {
    /// Create an engine over a loaded model.
    pub const fn new(model: Arc<Model>) -> Self {
        Self { model }
    }

    /// Model the engine predicts with.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Predict the price for an encoded vector.
    ///
    /// An aligned vector must carry exactly the model's feature contract;
    /// an unaligned vector is passed through and fails only if its width is
    /// wrong for the regressor.
    pub fn predict(&self, vector: &EncodedVector) -> Result<f64> {
        if vector.alignment() == Alignment::Aligned {
            if let Some(contract) = self.model.feature_names() {
                if vector.columns() != contract.columns() {
                    return Err(ModelError::Prediction(
                        "vector columns do not match the model's feature contract".to_string(),
                    ));
                }
            }
        }
        self.model.predict(vector.values().view())
    }

    /// Predict and attach the deviation band.
    pub fn valuate(&self, vector: &EncodedVector, deviation: f64) -> Result<ValuationResult> {
        Ok(ValuationResult::new(self.predict(vector)?, deviation))
    }
}
