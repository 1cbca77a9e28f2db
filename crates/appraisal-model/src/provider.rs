//! Model Provider
//!
//! Resolves the model artifact from an ordered list of candidate locations and
//! keeps the loaded model for the rest of the process.
//!
//! The first candidate that exists wins. A candidate that exists but cannot
//! be loaded is an error; later candidates are not tried.

use crate::artifact::Model;
use crate::error::{ModelError, Result};
use appraisal_features::FeatureContract;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Artifact file name.
pub const MODEL_FILE_NAME: &str = "house_price_model.json";

/// Default candidate locations, in lookup order:
///
/// 1. `models/house_price_model.json` (relative to the working directory)
/// 2. `house_price_model.json`
/// 3. the platform data directory, e.g. `~/.local/share/appraisal/house_price_model.json`
pub fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![
        PathBuf::from("models").join(MODEL_FILE_NAME),
        PathBuf::from(MODEL_FILE_NAME),
    ];
    if let Some(data_dir) = dirs::data_dir() {
        candidates.push(data_dir.join("appraisal").join(MODEL_FILE_NAME));
    }
    candidates
}

/// Lazily loaded, process-lifetime model.
///
/// `load` is safe to call from many threads; the artifact is read at most
/// once and every caller receives the same shared instance.
#[derive(Debug)]
pub struct ModelProvider {
    candidates: Vec<PathBuf>,
    model: OnceCell<Arc<Model>>,
}

impl Default for ModelProvider {
    fn default() -> Self {
        Self::new(default_candidates())
    }
}

impl ModelProvider {
    /// Create a provider over explicit candidate paths.
    pub const fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            model: OnceCell::new(),
        }
    }

    /// Default candidates, preceded by `path` when given.
    pub fn with_override(path: Option<PathBuf>) -> Self {
        let mut candidates: Vec<PathBuf> = path.into_iter().collect();
        candidates.extend(default_candidates());
        Self::new(candidates)
    }

    /// Candidate paths, in lookup order.
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Whether a model has already been loaded.
    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }

    /// The loaded model, loading it on first use.
    ///
    /// # Errors
    ///
    /// [`ModelError::NotFound`] when no candidate exists, or
    /// [`ModelError::InvalidArtifact`] when the first existing candidate
    /// cannot be loaded. A failed load is not cached; a later call retries.
    pub fn load(&self) -> Result<Arc<Model>> {
        self.loaded().cloned()
    }

    /// Feature contract of the loaded model, if it has one.
    pub fn feature_names(&self) -> Result<Option<&FeatureContract>> {
        Ok(self.loaded()?.feature_names())
    }

    fn loaded(&self) -> Result<&Arc<Model>> {
        self.model.get_or_try_init(|| self.resolve().map(Arc::new))
    }

    fn resolve(&self) -> Result<Model> {
        for path in &self.candidates {
            if !path.exists() {
                debug!(path = %path.display(), "model candidate not present");
                continue;
            }

            let model = Model::from_path(path)?;
            info!(
                path = %path.display(),
                inputs = model.n_features(),
                has_feature_names = model.feature_names().is_some(),
                "loaded model artifact"
            );
            return Ok(model);
        }

        Err(ModelError::NotFound {
            searched: self.candidates.clone(),
        })
    }
}
