use crate::classifiers::classifier::{
    ClassifierError, DISEASE_ABSENT, DISEASE_PRESENT, PredictClass, PredictProba, check_row,
};
use crate::utils::math::{dot, sigmoid, squared_distance};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Kernel {
    Linear,
    Rbf { gamma: f64 },
    Poly { gamma: f64, coef0: f64, degree: u32 },
    Sigmoid { gamma: f64, coef0: f64 },
}

impl Kernel {
    pub fn apply(&self, a: &[f64], b: &[f64]) -> f64 {
        match *self {
            Kernel::Linear => dot(a, b),
            Kernel::Rbf { gamma } => (-gamma * squared_distance(a, b)).exp(),
            Kernel::Poly {
                gamma,
                coef0,
                degree,
            } => (gamma * dot(a, b) + coef0).powi(degree as i32),
            Kernel::Sigmoid { gamma, coef0 } => (gamma * dot(a, b) + coef0).tanh(),
        }
    }
}

/// Platt's sigmoid fit mapping a decision value `f` to
/// `P(disease) = 1 / (1 + exp(A·f + B))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlattScaling {
    pub prob_a: f64,
    pub prob_b: f64,
}

impl PlattScaling {
    pub fn probability(&self, decision: f64) -> f64 {
        sigmoid(-(self.prob_a * decision + self.prob_b))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportVectorClassifier {
    pub kernel: Kernel,
    pub support_vectors: Vec<Vec<f64>>,
    pub dual_coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platt: Option<PlattScaling>,
}

impl SupportVectorClassifier {
    pub fn decision_function(&self, features: &[f64]) -> Result<f64, ClassifierError> {
        if self.support_vectors.len() != self.dual_coefficients.len() {
            return Err(ClassifierError::InvalidModel(format!(
                "{} support vectors but {} dual coefficients",
                self.support_vectors.len(),
                self.dual_coefficients.len()
            )));
        }
        let Some(width) = self.support_vectors.first().map(Vec::len) else {
            return Err(ClassifierError::InvalidModel(
                "no support vectors".to_string(),
            ));
        };
        check_row(features, width)?;

        let mut sum = self.intercept;
        for (sv, alpha) in self.support_vectors.iter().zip(&self.dual_coefficients) {
            if sv.len() != width {
                return Err(ClassifierError::InvalidModel(
                    "support vectors differ in width".to_string(),
                ));
            }
            sum += alpha * self.kernel.apply(sv, features);
        }
        Ok(sum)
    }

    /// Splits off the probability-capable form when Platt parameters were
    /// fitted; otherwise hands the label-only model back.
    pub fn into_calibrated(self) -> Result<CalibratedSvc, SupportVectorClassifier> {
        match self.platt {
            Some(platt) => Ok(CalibratedSvc { svc: self, platt }),
            None => Err(self),
        }
    }
}

impl PredictClass for SupportVectorClassifier {
    fn predict(&self, features: &[f64]) -> Result<usize, ClassifierError> {
        let d = self.decision_function(features)?;
        Ok(if d > 0.0 {
            DISEASE_PRESENT
        } else {
            DISEASE_ABSENT
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalibratedSvc {
    svc: SupportVectorClassifier,
    platt: PlattScaling,
}

impl PredictClass for CalibratedSvc {
    fn predict(&self, features: &[f64]) -> Result<usize, ClassifierError> {
        self.svc.predict(features)
    }
}

impl PredictProba for CalibratedSvc {
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], ClassifierError> {
        let p = self.platt.probability(self.svc.decision_function(features)?);
        Ok([1.0 - p, p])
    }
}
