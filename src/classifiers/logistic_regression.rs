use crate::classifiers::classifier::{
    ClassifierError, DISEASE_ABSENT, DISEASE_PRESENT, PredictClass, PredictProba, check_row,
};
use crate::utils::math::{dot, sigmoid};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn decision_function(&self, features: &[f64]) -> Result<f64, ClassifierError> {
        check_row(features, self.coefficients.len())?;
        Ok(dot(&self.coefficients, features) + self.intercept)
    }
}

impl PredictClass for LogisticRegression {
    fn predict(&self, features: &[f64]) -> Result<usize, ClassifierError> {
        let d = self.decision_function(features)?;
        Ok(if d > 0.0 {
            DISEASE_PRESENT
        } else {
            DISEASE_ABSENT
        })
    }
}

impl PredictProba for LogisticRegression {
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], ClassifierError> {
        let p = sigmoid(self.decision_function(features)?);
        Ok([1.0 - p, p])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn model() -> LogisticRegression {
        LogisticRegression::new(vec![0.5, -1.0, 2.0], -0.25)
    }

    #[test]
    fn decision_is_affine() {
        let d = model().decision_function(&[2.0, 1.0, 0.5]).unwrap();
        assert!((d - (1.0 - 1.0 + 1.0 - 0.25)).abs() < EPS);
    }

    #[test]
    fn predict_follows_sign_of_decision() {
        let m = model();
        assert_eq!(m.predict(&[2.0, 1.0, 0.5]).unwrap(), DISEASE_PRESENT);
        assert_eq!(m.predict(&[0.0, 1.0, 0.0]).unwrap(), DISEASE_ABSENT);
    }

    #[test]
    fn probabilities_sum_to_one_and_agree_with_label() {
        let m = model();
        for row in [[2.0, 1.0, 0.5], [0.0, 3.0, 0.0], [1.0, 0.0, 1.0]] {
            let [p0, p1] = m.predict_proba(&row).unwrap();
            assert!((p0 + p1 - 1.0).abs() < EPS);
            let label = m.predict(&row).unwrap();
            assert_eq!(label == DISEASE_PRESENT, p1 > 0.5);
        }
    }

    #[test]
    fn zero_decision_is_even_odds_and_absent() {
        let m = LogisticRegression::new(vec![0.0], 0.0);
        assert_eq!(m.predict_proba(&[3.0]).unwrap(), [0.5, 0.5]);
        assert_eq!(m.predict(&[3.0]).unwrap(), DISEASE_ABSENT);
    }

    #[test]
    fn wrong_width_is_a_shape_mismatch() {
        let err = model().predict(&[1.0]).unwrap_err();
        assert_eq!(
            err,
            ClassifierError::ShapeMismatch {
                expected: 3,
                got: 1
            }
        );
    }

    #[test]
    fn deserializes_from_artifact_params() {
        let m: LogisticRegression = serde_json::from_value(serde_json::json!({
            "coefficients": [0.1, 0.2],
            "intercept": -1.5
        }))
        .unwrap();
        assert_eq!(m.coefficients, vec![0.1, 0.2]);
        assert_eq!(m.intercept, -1.5);
    }
}
