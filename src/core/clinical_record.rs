use crate::core::attributes::Categorical;
use crate::core::clinical_inputs::ClinicalInputs;
use crate::core::feature_schema::{FEATURE_COUNT, FEATURE_NAMES, index_of_feature};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One assembled row, laid out in [`FEATURE_NAMES`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClinicalRecord {
    values: [f64; FEATURE_COUNT],
}

impl ClinicalRecord {
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        index_of_feature(name).map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }
}

impl Serialize for ClinicalRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

#[inline]
fn flag(v: bool) -> f64 {
    if v { 1.0 } else { 0.0 }
}

/// Shapes validated form inputs into the row the classifiers were fitted on.
pub fn assemble(inputs: &ClinicalInputs) -> ClinicalRecord {
    ClinicalRecord::from_values([
        f64::from(inputs.age),
        f64::from(inputs.sex.code()),
        f64::from(inputs.cp.code()),
        f64::from(inputs.trestbps),
        f64::from(inputs.chol),
        flag(inputs.fbs),
        f64::from(inputs.restecg.code()),
        f64::from(inputs.thalach),
        flag(inputs.exang),
        inputs.oldpeak,
        f64::from(inputs.slope.code()),
        f64::from(inputs.ca),
        f64::from(inputs.thal.code()),
    ])
}
