use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// The supported classifier families, one artifact each.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[strum(ascii_case_insensitive)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "LogisticRegression")]
    #[strum(
        to_string = "LogisticRegression",
        serialize = "logistic-regression",
        message = "Logistic Regression",
        detailed_message = "Linear model with a logistic link."
    )]
    LogisticRegression,

    #[serde(rename = "XGBoostClassifier")]
    #[strum(
        to_string = "XGBoostClassifier",
        serialize = "xgboost-classifier",
        serialize = "xgboost",
        message = "XGBoost Classifier",
        detailed_message = "Gradient-boosted decision trees."
    )]
    XgBoostClassifier,

    #[serde(rename = "SVC")]
    #[strum(
        to_string = "SVC",
        serialize = "support-vector",
        message = "Support Vector Classifier",
        detailed_message = "Kernel SVM; probabilities only when Platt-calibrated."
    )]
    Svc,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// `<Name>.json`, resolved against the model directory by the store.
    pub fn artifact_file_name(self) -> String {
        format!("{}.json", self.name())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Algorithm::from_str(raw.trim()).ok()
    }
}
