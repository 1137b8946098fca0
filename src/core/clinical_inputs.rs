use crate::core::attributes::{ChestPainType, RestingEcg, Sex, StSlope, Thalassemia};
use crate::core::clinical_record::assemble;
use crate::core::feature_schema::FEATURE_SPECS;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The thirteen fields of the assessment form, as typed values.
///
/// Field order here is the prompt order and the feature order; keep the two
/// in step with [`crate::core::feature_schema::FEATURE_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClinicalInputs {
    #[schemars(title = "Age", description = "Age in years", range(min = 1, max = 120))]
    pub age: u32,

    #[schemars(title = "Sex")]
    pub sex: Sex,

    #[schemars(title = "Chest Pain Type")]
    pub cp: ChestPainType,

    #[schemars(
        title = "Resting Blood Pressure (mm Hg)",
        range(min = 50, max = 250)
    )]
    pub trestbps: u32,

    #[schemars(title = "Serum Cholesterol (mg/dl)", range(min = 100, max = 600))]
    pub chol: u32,

    #[schemars(title = "Fasting BS > 120 mg/dl")]
    pub fbs: bool,

    #[schemars(title = "Resting ECG")]
    pub restecg: RestingEcg,

    #[schemars(title = "Max Heart Rate Achieved", range(min = 50, max = 250))]
    pub thalach: u32,

    #[schemars(title = "Exercise Induced Angina")]
    pub exang: bool,

    #[schemars(
        title = "ST Depression (Oldpeak)",
        description = "ST depression induced by exercise relative to rest",
        range(min = 0.0, max = 10.0),
        extend("multipleOf" = 0.1)
    )]
    pub oldpeak: f64,

    #[schemars(title = "ST Slope")]
    pub slope: StSlope,

    #[schemars(title = "Major Vessels (0-4)", range(min = 0, max = 4))]
    pub ca: u8,

    #[schemars(title = "Thalassemia")]
    pub thal: Thalassemia,
}

impl Default for ClinicalInputs {
    fn default() -> Self {
        Self {
            age: 50,
            sex: Sex::Female,
            cp: ChestPainType::TypicalAngina,
            trestbps: 120,
            chol: 200,
            fbs: false,
            restecg: RestingEcg::Normal,
            thalach: 150,
            exang: false,
            oldpeak: 1.0,
            slope: StSlope::Upsloping,
            ca: 0,
            thal: Thalassemia::Normal,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeViolation {
    pub field: &'static str,
    pub value: f64,
    pub expected: String,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} (expected {})", self.field, self.value, self.expected)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid clinical inputs: {}", join_violations(.violations))]
pub struct InputError {
    pub violations: Vec<RangeViolation>,
}

fn join_violations(violations: &[RangeViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ClinicalInputs {
    /// Checks every field against its declared domain and reports all
    /// violations at once.
    pub fn validate(&self) -> Result<(), InputError> {
        let record = assemble(self);
        let violations: Vec<RangeViolation> = FEATURE_SPECS
            .iter()
            .zip(record.values())
            .filter_map(|(spec, &value)| {
                spec.domain.check(value).err().map(|expected| RangeViolation {
                    field: spec.name,
                    value,
                    expected,
                })
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(InputError { violations })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feature_schema::{FEATURE_NAMES, FeatureDomain, spec_for};
    use schemars::schema_for;
    use serde_json::Value;

    fn root_props() -> Value {
        let v = serde_json::to_value(schema_for!(ClinicalInputs)).expect("schema to JSON");
        v.get("properties").cloned().expect("properties")
    }

    #[test]
    fn defaults_match_form_initial_values_and_validate() {
        let d = ClinicalInputs::default();
        assert_eq!(d.age, 50);
        assert_eq!(d.trestbps, 120);
        assert_eq!(d.chol, 200);
        assert_eq!(d.thalach, 150);
        assert_eq!(d.oldpeak, 1.0);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn validate_reports_every_violation() {
        let inputs = ClinicalInputs {
            age: 0,
            chol: 700,
            oldpeak: 2.35,
            ca: 5,
            ..ClinicalInputs::default()
        };
        let err = inputs.validate().unwrap_err();
        let fields: Vec<&str> = err.violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["age", "chol", "oldpeak", "ca"]);
        let msg = err.to_string();
        assert!(msg.contains("age = 0"), "msg was: {msg}");
        assert!(msg.contains("chol = 700"), "msg was: {msg}");
    }

    #[test]
    fn validate_accepts_range_edges() {
        let low = ClinicalInputs {
            age: 1,
            trestbps: 50,
            chol: 100,
            thalach: 50,
            oldpeak: 0.0,
            ca: 0,
            ..ClinicalInputs::default()
        };
        let high = ClinicalInputs {
            age: 120,
            trestbps: 250,
            chol: 600,
            thalach: 250,
            oldpeak: 10.0,
            ca: 4,
            ..ClinicalInputs::default()
        };
        assert!(low.validate().is_ok());
        assert!(high.validate().is_ok());
    }

    #[test]
    fn non_finite_oldpeak_is_rejected() {
        let inputs = ClinicalInputs {
            oldpeak: f64::INFINITY,
            ..ClinicalInputs::default()
        };
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn schema_properties_follow_feature_order() {
        let props = root_props();
        let names: Vec<&String> = props.as_object().unwrap().keys().collect();
        assert_eq!(names, FEATURE_NAMES.to_vec());
    }

    #[test]
    fn schema_ranges_agree_with_feature_specs() {
        let props = root_props();
        for name in ["age", "trestbps", "chol", "thalach", "ca"] {
            let field = props.get(name).and_then(Value::as_object).unwrap();
            let Some(FeatureDomain::Integer { min, max }) = spec_for(name).map(|s| s.domain) else {
                panic!("{name} is not an integer feature");
            };
            assert_eq!(field.get("minimum").and_then(Value::as_u64), Some(u64::from(min)));
            assert_eq!(field.get("maximum").and_then(Value::as_u64), Some(u64::from(max)));
        }

        let oldpeak = props.get("oldpeak").and_then(Value::as_object).unwrap();
        assert_eq!(oldpeak.get("maximum").and_then(Value::as_f64), Some(10.0));
        assert_eq!(oldpeak.get("multipleOf").and_then(Value::as_f64), Some(0.1));
    }

    #[test]
    fn deserializes_from_prompt_shaped_json() {
        let v = serde_json::json!({
            "age": 63, "sex": "male", "cp": "asymptomatic", "trestbps": 145,
            "chol": 233, "fbs": true, "restecg": "normal", "thalach": 150,
            "exang": false, "oldpeak": 2.3, "slope": "upsloping", "ca": 0,
            "thal": "fixed-defect"
        });
        let inputs: ClinicalInputs = serde_json::from_value(v).unwrap();
        assert_eq!(inputs.sex, Sex::Male);
        assert_eq!(inputs.cp, ChestPainType::Asymptomatic);
        assert_eq!(inputs.thal, Thalassemia::FixedDefect);
        assert!(inputs.validate().is_ok());
    }
}
