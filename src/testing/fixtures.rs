//! Small hand-fitted artifacts. Every model here scores on age alone or on
//! chest pain type alone so expectations can be worked out by hand.

use crate::classifiers::{
    GradientBoostedTrees, Kernel, LogisticRegression, PlattScaling, RegressionTree,
    SupportVectorClassifier, TreeNode,
};
use crate::core::{FEATURE_COUNT, FEATURE_NAMES};
use crate::store::{Algorithm, DatasetSplit, ModelArtifact, ModelCard, ModelParams};
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};

fn canonical_names() -> Vec<String> {
    FEATURE_NAMES.iter().map(|s| s.to_string()).collect()
}

fn hyperparameters(v: Value) -> Map<String, Value> {
    match v {
        Value::Object(m) => m,
        _ => Map::new(),
    }
}

fn dataset() -> Option<DatasetSplit> {
    Some(DatasetSplit {
        total: 1025,
        train: 820,
        test: 205,
    })
}

/// `P(disease) = sigmoid(0.1 * age - 5)`: 50/50 at age 50, high risk above.
pub fn logistic_artifact() -> ModelArtifact {
    let mut coefficients = vec![0.0; FEATURE_COUNT];
    coefficients[0] = 0.1;
    ModelArtifact {
        feature_names: canonical_names(),
        scaler: None,
        model: ModelParams::LogisticRegression(LogisticRegression::new(coefficients, -5.0)),
        card: Some(ModelCard {
            test_accuracy: Some(0.693),
            hyperparameters: hyperparameters(
                json!({ "C": 1.0, "penalty": "l2", "solver": "liblinear" }),
            ),
            dataset: dataset(),
            trained_at: None,
        }),
    }
}

/// One stump on chest pain: typical angina scores -2, anything else +2.
pub fn boosted_trees_artifact() -> ModelArtifact {
    let stump = RegressionTree {
        nodes: vec![
            TreeNode::Split {
                feature: 2,
                threshold: 0.5,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf { leaf: -2.0 },
            TreeNode::Leaf { leaf: 2.0 },
        ],
    };
    ModelArtifact {
        feature_names: canonical_names(),
        scaler: None,
        model: ModelParams::GradientBoostedTrees(GradientBoostedTrees {
            num_features: FEATURE_COUNT,
            base_score: 0.5,
            trees: vec![stump],
        }),
        card: Some(ModelCard {
            test_accuracy: Some(0.985),
            hyperparameters: hyperparameters(
                json!({ "learning_rate": 0.08, "max_depth": 2, "n_estimators": 2000 }),
            ),
            dataset: dataset(),
            trained_at: None,
        }),
    }
}

/// Linear SVC with decision `0.1 * age - 5`. With `calibrated` the Platt fit
/// makes its probability match [`logistic_artifact`].
pub fn svc_artifact(calibrated: bool) -> ModelArtifact {
    let mut sv = vec![0.0; FEATURE_COUNT];
    sv[0] = 1.0;
    ModelArtifact {
        feature_names: canonical_names(),
        scaler: None,
        model: ModelParams::SupportVector(SupportVectorClassifier {
            kernel: Kernel::Linear,
            support_vectors: vec![sv],
            dual_coefficients: vec![0.1],
            intercept: -5.0,
            platt: calibrated.then_some(PlattScaling {
                prob_a: -1.0,
                prob_b: 0.0,
            }),
        }),
        card: Some(ModelCard {
            test_accuracy: Some(1.0),
            hyperparameters: hyperparameters(json!({ "C": 10, "gamma": 0.01 })),
            dataset: dataset(),
            trained_at: None,
        }),
    }
}

/// Writes `artifact` where a store rooted at `dir` looks for `algorithm`.
pub fn write_artifact(dir: &Path, algorithm: Algorithm, artifact: &ModelArtifact) -> PathBuf {
    let path = dir.join(algorithm.artifact_file_name());
    let bytes = serde_json::to_vec_pretty(artifact).expect("artifact serializes");
    fs::write(&path, bytes).expect("artifact written");
    path
}

/// All three artifacts, SVC uncalibrated.
pub fn write_all(dir: &Path) {
    write_artifact(dir, Algorithm::LogisticRegression, &logistic_artifact());
    write_artifact(dir, Algorithm::XgBoostClassifier, &boosted_trees_artifact());
    write_artifact(dir, Algorithm::Svc, &svc_artifact(false));
}
