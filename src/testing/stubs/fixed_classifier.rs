use crate::classifiers::{ClassifierError, PredictClass, PredictProba};

/// Always answers with the same class.
pub struct FixedLabelClassifier {
    class: usize,
}

impl FixedLabelClassifier {
    pub fn new(class: usize) -> Self {
        Self { class }
    }
}

impl PredictClass for FixedLabelClassifier {
    fn predict(&self, _features: &[f64]) -> Result<usize, ClassifierError> {
        Ok(self.class)
    }
}

/// Always answers with the same class and `[1 - p, p]`.
pub struct FixedProbaClassifier {
    class: usize,
    p_present: f64,
}

impl FixedProbaClassifier {
    pub fn new(class: usize, p_present: f64) -> Self {
        Self { class, p_present }
    }
}

impl PredictClass for FixedProbaClassifier {
    fn predict(&self, _features: &[f64]) -> Result<usize, ClassifierError> {
        Ok(self.class)
    }
}

impl PredictProba for FixedProbaClassifier {
    fn predict_proba(&self, _features: &[f64]) -> Result<[f64; 2], ClassifierError> {
        Ok([1.0 - self.p_present, self.p_present])
    }
}
