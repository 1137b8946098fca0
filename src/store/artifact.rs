//! On-disk form of a fitted classifier.
//!
//! ```json
//! {
//!   "feature_names": ["age", "sex", "...", "thal"],
//!   "scaler": { "mean": [..], "scale": [..] },
//!   "model": { "type": "logistic-regression", "params": { .. } },
//!   "card": { "test_accuracy": 0.693, "hyperparameters": { "C": 1.0 } }
//! }
//! ```

use crate::classifiers::{
    Classifier, GradientBoostedTrees, LogisticRegression, Pipeline, Standardizer,
    SupportVectorClassifier,
};
use crate::store::algorithm::Algorithm;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
pub enum ModelParams {
    LogisticRegression(LogisticRegression),
    GradientBoostedTrees(GradientBoostedTrees),
    SupportVector(SupportVectorClassifier),
}

impl ModelParams {
    /// The selector name this family is published under.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            ModelParams::LogisticRegression(_) => Algorithm::LogisticRegression,
            ModelParams::GradientBoostedTrees(_) => Algorithm::XgBoostClassifier,
            ModelParams::SupportVector(_) => Algorithm::Svc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSplit {
    pub total: u64,
    pub train: u64,
    pub test: u64,
}

/// Descriptive metadata shipped with an artifact. Never used for scoring.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub hyperparameters: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<DatasetSplit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trained_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler: Option<Standardizer>,
    pub model: ModelParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<ModelCard>,
}

impl ModelArtifact {
    /// Builds the in-memory classifier, tagging it with the capabilities
    /// its family and fitted parameters provide.
    pub fn into_classifier(self) -> Classifier {
        let scaler = self.scaler;
        match self.model {
            ModelParams::LogisticRegression(m) => {
                Classifier::probabilistic(Pipeline::new(scaler, m))
            }
            ModelParams::GradientBoostedTrees(m) => {
                Classifier::probabilistic(Pipeline::new(scaler, m))
            }
            ModelParams::SupportVector(m) => match m.into_calibrated() {
                Ok(calibrated) => Classifier::probabilistic(Pipeline::new(scaler, calibrated)),
                Err(plain) => Classifier::label_only(Pipeline::new(scaler, plain)),
            },
        }
    }
}
