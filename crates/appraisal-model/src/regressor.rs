//! Regressors
//!
//! Fitted models that map one numeric row to one scalar. Two families are
//! supported, matching what tabular price models are usually exported as:
//!
//! - [`LinearRegressor`]: `intercept + Σ wᵢ·xᵢ`
//! - [`TreeEnsemble`]: boosted (summed, scaled by a learning rate) or bagged
//!   (averaged) regression trees stored as flat node arrays

use ndarray::{ArrayView1, aview1};
use serde::{Deserialize, Serialize};

/// A fitted single-output regression model.
pub trait Regressor {
    /// Number of input features the model was fit on.
    fn n_features(&self) -> usize;

    /// Predict one row.
    ///
    /// The caller guarantees `row.len() == self.n_features()`.
    fn predict_row(&self, row: ArrayView1<'_, f64>) -> f64;

    /// Check internal consistency of the fitted parameters.
    ///
    /// Default implementation accepts everything.
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Ordinary linear model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    /// Constant term
    pub intercept: f64,
    /// One weight per input feature
    pub coefficients: Vec<f64>,
}

impl Regressor for LinearRegressor {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_row(&self, row: ArrayView1<'_, f64>) -> f64 {
        self.intercept + aview1(&self.coefficients).dot(&row)
    }

    fn check(&self) -> Result<(), String> {
        if !self.intercept.is_finite() || self.coefficients.iter().any(|w| !w.is_finite()) {
            return Err("linear model has non-finite parameters".to_string());
        }
        Ok(())
    }
}

/// One node of a regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Internal node: go left when `x[feature] <= threshold`
    Split {
        /// Feature index tested at this node
        feature: usize,
        /// Split threshold
        threshold: f64,
        /// Index of the left child
        left: usize,
        /// Index of the right child
        right: usize,
    },
    /// Terminal node
    Leaf {
        /// Predicted value
        value: f64,
    },
}

/// A regression tree; node 0 is the root.
///
/// Children always sit at higher indices than their parent, so traversal
/// terminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    /// Nodes in breadth- or depth-first order
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    /// Value of the leaf `row` falls into.
    pub fn evaluate(&self, row: ArrayView1<'_, f64>) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    fn check(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Leaf { value } if !value.is_finite() => {
                    return Err(format!("node {idx}: non-finite leaf value"));
                }
                TreeNode::Leaf { .. } => {}
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(format!(
                            "node {idx}: feature {feature} out of range (n_features = {n_features})"
                        ));
                    }
                    if threshold.is_nan() {
                        return Err(format!("node {idx}: threshold is NaN"));
                    }
                    for child in [*left, *right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(format!("node {idx}: invalid child index {child}"));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// How tree outputs are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Gradient boosting: `base + learning_rate · Σ trees`
    #[default]
    Sum,
    /// Random forest: `base + mean(trees)`
    Mean,
}

/// Ensemble of regression trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    /// Number of input features
    pub n_features: usize,
    /// Constant added to the combined tree output
    #[serde(default)]
    pub base_score: f64,
    /// Shrinkage applied to the summed output (ignored for `mean`)
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    /// Combination rule
    #[serde(default)]
    pub aggregation: Aggregation,
    /// Fitted trees
    pub trees: Vec<Tree>,
}

const fn default_learning_rate() -> f64 {
    1.0
}

impl Regressor for TreeEnsemble {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_row(&self, row: ArrayView1<'_, f64>) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.evaluate(row)).sum();
        match self.aggregation {
            Aggregation::Sum => self.base_score + self.learning_rate * total,
            Aggregation::Mean => self.base_score + total / self.trees.len() as f64,
        }
    }

    fn check(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("ensemble has no trees".to_string());
        }
        if !self.base_score.is_finite() || !self.learning_rate.is_finite() {
            return Err("ensemble has non-finite parameters".to_string());
        }
        self.trees
            .iter()
            .enumerate()
            .try_for_each(|(i, tree)| tree.check(self.n_features).map_err(|e| format!("tree {i}: {e}")))
    }
}

/// Serialized regressor, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressorSpec {
    /// Linear model
    Linear(LinearRegressor),
    /// Tree ensemble
    TreeEnsemble(TreeEnsemble),
}

impl Regressor for RegressorSpec {
    fn n_features(&self) -> usize {
        match self {
            Self::Linear(m) => m.n_features(),
            Self::TreeEnsemble(m) => m.n_features(),
        }
    }

    fn predict_row(&self, row: ArrayView1<'_, f64>) -> f64 {
        match self {
            Self::Linear(m) => m.predict_row(row),
            Self::TreeEnsemble(m) => m.predict_row(row),
        }
    }

    fn check(&self) -> Result<(), String> {
        match self {
            Self::Linear(m) => m.check(),
            Self::TreeEnsemble(m) => m.check(),
        }
    }
}
