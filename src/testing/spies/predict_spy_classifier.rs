use crate::classifiers::{ClassifierError, DISEASE_PRESENT, PredictClass, PredictProba};
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

pub struct PredictSpyHandle {
    predict: Arc<AtomicU64>,
    proba: Arc<AtomicU64>,
}

impl PredictSpyHandle {
    pub fn predict_calls(&self) -> u64 {
        self.predict.load(Ordering::Relaxed)
    }

    pub fn proba_calls(&self) -> u64 {
        self.proba.load(Ordering::Relaxed)
    }
}

/// Counts calls and records nothing else. Predicts disease for any row whose
/// first value is above 50, with probability `first / 100`.
pub struct PredictSpyClassifier {
    predict: Arc<AtomicU64>,
    proba: Arc<AtomicU64>,
}

impl PredictSpyClassifier {
    pub fn new() -> (Self, PredictSpyHandle) {
        let predict = Arc::new(AtomicU64::new(0));
        let proba = Arc::new(AtomicU64::new(0));
        (
            Self {
                predict: predict.clone(),
                proba: proba.clone(),
            },
            PredictSpyHandle { predict, proba },
        )
    }
}

impl PredictClass for PredictSpyClassifier {
    fn predict(&self, features: &[f64]) -> Result<usize, ClassifierError> {
        self.predict.fetch_add(1, Ordering::Relaxed);
        let first = features.first().copied().unwrap_or_default();
        Ok(if first > 50.0 { DISEASE_PRESENT } else { 0 })
    }
}

impl PredictProba for PredictSpyClassifier {
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], ClassifierError> {
        self.proba.fetch_add(1, Ordering::Relaxed);
        let p = (features.first().copied().unwrap_or_default() / 100.0).clamp(0.0, 1.0);
        Ok([1.0 - p, p])
    }
}
