use crate::classifiers::classifier::{
    ClassifierError, DISEASE_ABSENT, DISEASE_PRESENT, PredictClass, PredictProba, check_row,
};
use crate::utils::math::{logit, sigmoid};
use serde::{Deserialize, Serialize};

fn default_base_score() -> f64 {
    0.5
}

/// A node of a regression tree stored as a flat array; children are indices
/// into the same array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        leaf: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    /// Walks from the root; a row goes left when its value is below the
    /// split threshold.
    pub fn leaf_value(&self, features: &[f64]) -> Result<f64, ClassifierError> {
        let mut idx = 0usize;
        // A well-formed tree reaches a leaf in fewer steps than it has nodes.
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(idx) {
                None => {
                    return Err(ClassifierError::InvalidModel(format!(
                        "tree node {idx} does not exist"
                    )));
                }
                Some(TreeNode::Leaf { leaf }) => return Ok(*leaf),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.get(*feature).ok_or_else(|| {
                        ClassifierError::InvalidModel(format!(
                            "split on feature {feature} outside the row"
                        ))
                    })?;
                    idx = if *value < *threshold { *left } else { *right };
                }
            }
        }
        Err(ClassifierError::InvalidModel(
            "tree traversal does not terminate".to_string(),
        ))
    }
}

/// Additive ensemble of regression trees with a logistic link, as produced
/// by XGBoost's `binary:logistic` objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostedTrees {
    pub num_features: usize,
    #[serde(default = "default_base_score")]
    pub base_score: f64,
    pub trees: Vec<RegressionTree>,
}

impl GradientBoostedTrees {
    pub fn margin(&self, features: &[f64]) -> Result<f64, ClassifierError> {
        check_row(features, self.num_features)?;
        if !(self.base_score > 0.0 && self.base_score < 1.0) {
            return Err(ClassifierError::InvalidModel(format!(
                "base_score {} must lie strictly between 0 and 1",
                self.base_score
            )));
        }

        let mut margin = logit(self.base_score);
        for tree in &self.trees {
            margin += tree.leaf_value(features)?;
        }
        Ok(margin)
    }
}

impl PredictClass for GradientBoostedTrees {
    fn predict(&self, features: &[f64]) -> Result<usize, ClassifierError> {
        let m = self.margin(features)?;
        Ok(if m > 0.0 {
            DISEASE_PRESENT
        } else {
            DISEASE_ABSENT
        })
    }
}

impl PredictProba for GradientBoostedTrees {
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], ClassifierError> {
        let p = sigmoid(self.margin(features)?);
        Ok([1.0 - p, p])
    }
}
