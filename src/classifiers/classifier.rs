use std::fmt;

pub const DISEASE_ABSENT: usize = 0;
pub const DISEASE_PRESENT: usize = 1;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("expected {expected} features, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("feature at position {index} is not a finite number")]
    NonFinite { index: usize },
    #[error("invalid model: {0}")]
    InvalidModel(String),
    #[error("class probabilities {0:?} do not form a distribution")]
    InvalidProbabilities([f64; 2]),
}

/// Class prediction over one feature row.
pub trait PredictClass: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<usize, ClassifierError>;
}

/// Class prediction plus probability mass over the two classes, indexed by
/// class code.
pub trait PredictProba: PredictClass {
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], ClassifierError>;
}

/// A fitted classifier tagged with what it can do.
pub enum Classifier {
    LabelOnly(Box<dyn PredictClass>),
    Probabilistic(Box<dyn PredictProba>),
}

impl Classifier {
    pub fn label_only(model: impl PredictClass + 'static) -> Self {
        Classifier::LabelOnly(Box::new(model))
    }

    pub fn probabilistic(model: impl PredictProba + 'static) -> Self {
        Classifier::Probabilistic(Box::new(model))
    }

    pub fn predict(&self, features: &[f64]) -> Result<usize, ClassifierError> {
        match self {
            Classifier::LabelOnly(model) => model.predict(features),
            Classifier::Probabilistic(model) => model.predict(features),
        }
    }

    pub fn supports_probability(&self) -> bool {
        matches!(self, Classifier::Probabilistic(_))
    }
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Classifier::LabelOnly(_) => "LabelOnly",
            Classifier::Probabilistic(_) => "Probabilistic",
        };
        f.debug_tuple("Classifier").field(&tag).finish()
    }
}

/// Rejects rows of the wrong width or with non-finite values.
pub(crate) fn check_row(features: &[f64], expected: usize) -> Result<(), ClassifierError> {
    if features.len() != expected {
        return Err(ClassifierError::ShapeMismatch {
            expected,
            got: features.len(),
        });
    }
    match features.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ClassifierError::NonFinite { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stubs::{FixedLabelClassifier, FixedProbaClassifier};

    #[test]
    fn check_row_reports_width_then_finiteness() {
        assert_eq!(
            check_row(&[1.0, 2.0], 3),
            Err(ClassifierError::ShapeMismatch {
                expected: 3,
                got: 2
            })
        );
        assert_eq!(
            check_row(&[1.0, f64::NAN, 3.0], 3),
            Err(ClassifierError::NonFinite { index: 1 })
        );
        assert!(check_row(&[1.0, 2.0, 3.0], 3).is_ok());
    }

    #[test]
    fn capability_tag_is_explicit() {
        let a = Classifier::label_only(FixedLabelClassifier::new(DISEASE_ABSENT));
        let b = Classifier::probabilistic(FixedProbaClassifier::new(DISEASE_PRESENT, 0.7));
        assert!(!a.supports_probability());
        assert!(b.supports_probability());
        assert_eq!(a.predict(&[0.0]).unwrap(), DISEASE_ABSENT);
        assert_eq!(b.predict(&[0.0]).unwrap(), DISEASE_PRESENT);
    }

    #[test]
    fn debug_names_the_variant() {
        let a = Classifier::label_only(FixedLabelClassifier::new(DISEASE_ABSENT));
        assert_eq!(format!("{a:?}"), "Classifier(\"LabelOnly\")");
    }
}
