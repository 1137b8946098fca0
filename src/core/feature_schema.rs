//! Canonical feature layout shared by every classifier artifact.
//!
//! The position of a name in [`FEATURE_NAMES`] is the column the fitted
//! models expect. Rows carry no labels once assembled, so this order is the
//! only thing tying a value to its meaning.

use std::fmt;

pub const FEATURE_COUNT: usize = 13;

pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
    "slope", "ca", "thal",
];

const GRID_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureDomain {
    Integer { min: u32, max: u32 },
    Continuous { min: f64, max: f64, step: f64 },
    Categorical { levels: u8 },
    Flag,
}

impl FeatureDomain {
    /// `Err` holds a description of the accepted values.
    pub fn check(&self, value: f64) -> Result<(), String> {
        match *self {
            FeatureDomain::Integer { min, max } => {
                let ok = value.fract() == 0.0
                    && value >= f64::from(min)
                    && value <= f64::from(max);
                if ok {
                    Ok(())
                } else {
                    Err(format!("an integer in [{min}, {max}]"))
                }
            }
            FeatureDomain::Continuous { min, max, step } => {
                let on_grid = {
                    let steps = ((value - min) / step).round();
                    (min + steps * step - value).abs() <= GRID_TOLERANCE
                };
                if value.is_finite() && value >= min && value <= max && on_grid {
                    Ok(())
                } else {
                    Err(format!("a number in [{min}, {max}] in steps of {step}"))
                }
            }
            FeatureDomain::Categorical { levels } => {
                let ok = value.fract() == 0.0 && value >= 0.0 && value < f64::from(levels);
                if ok {
                    Ok(())
                } else {
                    Err(format!("a level code in [0, {}]", levels.saturating_sub(1)))
                }
            }
            FeatureDomain::Flag => {
                if value == 0.0 || value == 1.0 {
                    Ok(())
                } else {
                    Err("0 or 1".to_string())
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub domain: FeatureDomain,
}

impl fmt::Display for FeatureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.name)
    }
}

pub const FEATURE_SPECS: [FeatureSpec; FEATURE_COUNT] = [
    FeatureSpec {
        name: "age",
        title: "Age",
        domain: FeatureDomain::Integer { min: 1, max: 120 },
    },
    FeatureSpec {
        name: "sex",
        title: "Sex",
        domain: FeatureDomain::Flag,
    },
    FeatureSpec {
        name: "cp",
        title: "Chest Pain Type",
        domain: FeatureDomain::Categorical { levels: 4 },
    },
    FeatureSpec {
        name: "trestbps",
        title: "Resting Blood Pressure (mm Hg)",
        domain: FeatureDomain::Integer { min: 50, max: 250 },
    },
    FeatureSpec {
        name: "chol",
        title: "Serum Cholesterol (mg/dl)",
        domain: FeatureDomain::Integer { min: 100, max: 600 },
    },
    FeatureSpec {
        name: "fbs",
        title: "Fasting BS > 120 mg/dl",
        domain: FeatureDomain::Flag,
    },
    FeatureSpec {
        name: "restecg",
        title: "Resting ECG",
        domain: FeatureDomain::Categorical { levels: 3 },
    },
    FeatureSpec {
        name: "thalach",
        title: "Max Heart Rate Achieved",
        domain: FeatureDomain::Integer { min: 50, max: 250 },
    },
    FeatureSpec {
        name: "exang",
        title: "Exercise Induced Angina",
        domain: FeatureDomain::Flag,
    },
    FeatureSpec {
        name: "oldpeak",
        title: "ST Depression (Oldpeak)",
        domain: FeatureDomain::Continuous {
            min: 0.0,
            max: 10.0,
            step: 0.1,
        },
    },
    FeatureSpec {
        name: "slope",
        title: "ST Slope",
        domain: FeatureDomain::Categorical { levels: 3 },
    },
    FeatureSpec {
        name: "ca",
        title: "Major Vessels (0-4)",
        domain: FeatureDomain::Integer { min: 0, max: 4 },
    },
    FeatureSpec {
        name: "thal",
        title: "Thalassemia",
        domain: FeatureDomain::Categorical { levels: 4 },
    },
];

pub fn index_of_feature(name: &str) -> Option<usize> {
    FEATURE_NAMES.iter().position(|n| *n == name)
}

pub fn spec_for(name: &str) -> Option<&'static FeatureSpec> {
    index_of_feature(name).map(|i| &FEATURE_SPECS[i])
}

/// True when `names` lists exactly the canonical features, in order.
pub fn matches_canonical<S: AsRef<str>>(names: &[S]) -> bool {
    names.len() == FEATURE_COUNT
        && names
            .iter()
            .zip(FEATURE_NAMES.iter())
            .all(|(a, b)| a.as_ref() == *b)
}
