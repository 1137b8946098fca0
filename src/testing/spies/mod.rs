mod predict_spy_classifier;

pub use predict_spy_classifier::{PredictSpyClassifier, PredictSpyHandle};
