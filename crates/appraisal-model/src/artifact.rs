//! Model artifact
//!
//! On-disk form of a trained price model: the fitted regressor plus, when the
//! training tool recorded it, the ordered feature names it was fit on.
//!
//! ```json
//! {
//!   "feature_names": ["m2_gross", "m2_net", "ilce_Adalar", ...],
//!   "target": "fiyat",
//!   "model": { "kind": "linear", "intercept": 250000.0, "coefficients": [...] }
//! }
//! ```

use crate::error::{ModelError, Result};
use crate::regressor::{Regressor, RegressorSpec};
use appraisal_features::FeatureContract;
use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Serialized model artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Training-time column names, in model input order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<FeatureContract>,
    /// Name of the predicted quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Fitted regressor
    pub model: RegressorSpec,
}

impl ModelArtifact {
    /// Read an artifact from a JSON file.
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Write the artifact as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// A loaded, validated model.
#[derive(Debug, Clone)]
pub struct Model {
    source: PathBuf,
    contract: Option<FeatureContract>,
    target: Option<String>,
    regressor: RegressorSpec,
}

impl Model {
    /// Load and validate the artifact at `path`.
    ///
    /// Any read, parse, or consistency failure is reported as
    /// [`ModelError::InvalidArtifact`] naming the path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let artifact = ModelArtifact::read(path).map_err(|e| ModelError::InvalidArtifact {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_artifact(artifact, path)
    }

    /// Validate an in-memory artifact; `source` is used in error messages.
    pub fn from_artifact(artifact: ModelArtifact, source: &Path) -> Result<Self> {
        let invalid = |reason: String| ModelError::InvalidArtifact {
            path: source.to_path_buf(),
            reason,
        };

        artifact.model.check().map_err(invalid)?;

        // An empty name list carries no more information than a missing one
        let contract = artifact.feature_names.filter(|c| !c.is_empty());
        if let Some(contract) = &contract {
            if let Some(dup) = contract.first_duplicate() {
                return Err(invalid(format!("duplicate feature name {dup:?}")));
            }
            if contract.len() != artifact.model.n_features() {
                return Err(invalid(format!(
                    "{} feature names for a model with {} inputs",
                    contract.len(),
                    artifact.model.n_features()
                )));
            }
        }

        Ok(Self {
            source: source.to_path_buf(),
            contract,
            target: artifact.target,
            regressor: artifact.model,
        })
    }

    /// Path the model was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Training-time feature contract, if the artifact recorded one.
    pub const fn feature_names(&self) -> Option<&FeatureContract> {
        self.contract.as_ref()
    }

    /// Name of the predicted quantity, if recorded.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Number of inputs the regressor expects.
    pub fn n_features(&self) -> usize {
        self.regressor.n_features()
    }

    /// Fitted regressor.
    pub const fn regressor(&self) -> &RegressorSpec {
        &self.regressor
    }

    /// Predict one row.
    ///
    /// Fails when the row width differs from the regressor's input width,
    /// when an input is not finite, or when the output is not finite.
    pub fn predict(&self, row: ArrayView1<'_, f64>) -> Result<f64> {
        let expected = self.regressor.n_features();
        if row.len() != expected {
            return Err(ModelError::Prediction(format!(
                "expected {expected} features, got {}",
                row.len()
            )));
        }
        if let Some(i) = row.iter().position(|x| !x.is_finite()) {
            return Err(ModelError::Prediction(format!(
                "feature {i} is not finite ({})",
                row[i]
            )));
        }

        let y = self.regressor.predict_row(row);
        if !y.is_finite() {
            return Err(ModelError::Prediction(format!("model produced {y}")));
        }
        Ok(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regressor::LinearRegressor;
    use ndarray::aview1;

    fn linear(coefficients: Vec<f64>) -> RegressorSpec {
        RegressorSpec::Linear(LinearRegressor {
            intercept: 1.0,
            coefficients,
        })
    }

    #[test]
    fn test_width_mismatch_is_prediction_error() {
        let artifact = ModelArtifact {
            feature_names: None,
            target: None,
            model: linear(vec![1.0, 1.0]),
        };
        let model = Model::from_artifact(artifact, Path::new("mem")).unwrap();
        let err = model.predict(aview1(&[1.0])).unwrap_err();
        assert!(matches!(err, ModelError::Prediction(_)));
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let artifact = ModelArtifact {
            feature_names: None,
            target: None,
            model: linear(vec![1.0]),
        };
        let model = Model::from_artifact(artifact, Path::new("mem")).unwrap();
        assert!(model.predict(aview1(&[f64::NAN])).is_err());
        assert_eq!(model.predict(aview1(&[2.0])).unwrap(), 3.0);
    }

    #[test]
    fn test_contract_width_must_match() {
        let artifact = ModelArtifact {
            feature_names: Some(["a", "b", "c"].into_iter().collect()),
            target: None,
            model: linear(vec![1.0, 1.0]),
        };
        let err = Model::from_artifact(artifact, Path::new("mem")).unwrap_err();
        assert!(matches!(err, ModelError::InvalidArtifact { .. }));
    }

    #[test]
    fn test_duplicate_feature_names_rejected() {
        let artifact = ModelArtifact {
            feature_names: Some(["a", "a"].into_iter().collect()),
            target: None,
            model: linear(vec![1.0, 1.0]),
        };
        let err = Model::from_artifact(artifact, Path::new("mem")).unwrap_err();
        assert!(err.to_string().contains("duplicate feature name"));
    }

    #[test]
    fn test_empty_feature_names_treated_as_missing() {
        let artifact = ModelArtifact {
            feature_names: Some(FeatureContract::default()),
            target: Some("fiyat".to_string()),
            model: linear(vec![1.0]),
        };
        let model = Model::from_artifact(artifact, Path::new("mem")).unwrap();
        assert!(model.feature_names().is_none());
        assert_eq!(model.target(), Some("fiyat"));
    }
}
