mod fixed_classifier;
mod scripted_driver;

pub use fixed_classifier::{FixedLabelClassifier, FixedProbaClassifier};
pub use scripted_driver::{Answer, ScriptedDriver};
