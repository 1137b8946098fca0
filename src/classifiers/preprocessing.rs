use crate::classifiers::classifier::{ClassifierError, PredictClass, PredictProba, check_row};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Per-feature standardization `(x - mean) / scale`, fitted at training time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standardizer {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl Standardizer {
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ClassifierError> {
        if self.mean.len() != self.scale.len() {
            return Err(ClassifierError::InvalidModel(format!(
                "scaler has {} means but {} scales",
                self.mean.len(),
                self.scale.len()
            )));
        }
        check_row(features, self.mean.len())?;

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (m, s))| {
                // constant columns are stored with a zero scale
                let s = if *s == 0.0 { 1.0 } else { *s };
                (x - m) / s
            })
            .collect())
    }
}

/// An estimator preceded by optional standardization.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline<E> {
    scaler: Option<Standardizer>,
    estimator: E,
}

impl<E> Pipeline<E> {
    pub fn new(scaler: Option<Standardizer>, estimator: E) -> Self {
        Self { scaler, estimator }
    }

    fn prepare<'a>(&self, features: &'a [f64]) -> Result<Cow<'a, [f64]>, ClassifierError> {
        match &self.scaler {
            Some(scaler) => Ok(Cow::Owned(scaler.transform(features)?)),
            None => Ok(Cow::Borrowed(features)),
        }
    }
}

impl<E: PredictClass> PredictClass for Pipeline<E> {
    fn predict(&self, features: &[f64]) -> Result<usize, ClassifierError> {
        let row = self.prepare(features)?;
        self.estimator.predict(&row)
    }
}

impl<E: PredictProba> PredictProba for Pipeline<E> {
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], ClassifierError> {
        let row = self.prepare(features)?;
        self.estimator.predict_proba(&row)
    }
}
