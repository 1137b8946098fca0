pub mod attributes;
pub mod clinical_inputs;
pub mod clinical_record;
pub mod feature_schema;

pub use clinical_inputs::{ClinicalInputs, InputError, RangeViolation};
pub use clinical_record::{ClinicalRecord, assemble};
pub use feature_schema::{FEATURE_COUNT, FEATURE_NAMES, FEATURE_SPECS, FeatureDomain, FeatureSpec};
