use crate::classifiers::{Classifier, ClassifierError, DISEASE_PRESENT};
use crate::core::ClinicalRecord;
use serde::Serialize;
use tracing::debug;

/// What a classifier said about one record.
///
/// `probability` is the disease-present probability in `[0, 1]`; it is
/// `0.0` when the classifier cannot produce probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskVerdict {
    pub predicted_class: usize,
    pub high_risk: bool,
    pub probability: f64,
}

impl RiskVerdict {
    pub fn percent(&self) -> f64 {
        self.probability * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{cause}")]
pub struct PredictionError {
    pub cause: String,
}

impl From<ClassifierError> for PredictionError {
    fn from(e: ClassifierError) -> Self {
        Self {
            cause: e.to_string(),
        }
    }
}

pub fn infer(
    classifier: &Classifier,
    record: &ClinicalRecord,
) -> Result<RiskVerdict, PredictionError> {
    let features = record.values();
    let predicted_class = classifier.predict(features)?;

    let probability = match classifier {
        Classifier::LabelOnly(_) => 0.0,
        Classifier::Probabilistic(model) => {
            let proba = model.predict_proba(features)?;
            let p = proba[DISEASE_PRESENT];
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(ClassifierError::InvalidProbabilities(proba).into());
            }
            p
        }
    };

    let verdict = RiskVerdict {
        predicted_class,
        high_risk: predicted_class == DISEASE_PRESENT,
        probability,
    };
    debug!(
        class = verdict.predicted_class,
        probability = verdict.probability,
        "verdict"
    );
    Ok(verdict)
}
