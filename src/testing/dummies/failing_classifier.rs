use crate::classifiers::{ClassifierError, PredictClass, PredictProba};

pub struct FailingClassifier {
    reason: String,
}

impl FailingClassifier {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PredictClass for FailingClassifier {
    fn predict(&self, _features: &[f64]) -> Result<usize, ClassifierError> {
        Err(ClassifierError::InvalidModel(self.reason.clone()))
    }
}

impl PredictProba for FailingClassifier {
    fn predict_proba(&self, _features: &[f64]) -> Result<[f64; 2], ClassifierError> {
        Err(ClassifierError::InvalidModel(self.reason.clone()))
    }
}
