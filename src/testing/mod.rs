pub mod dummies;
pub mod fixtures;
pub mod spies;
pub mod stubs;

pub use dummies::FailingClassifier;
pub use spies::{PredictSpyClassifier, PredictSpyHandle};
pub use stubs::{Answer, FixedLabelClassifier, FixedProbaClassifier, ScriptedDriver};
