mod failing_classifier;

pub use failing_classifier::FailingClassifier;
