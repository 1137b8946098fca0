pub mod classifier;
pub mod gradient_boosting;
pub mod logistic_regression;
pub mod preprocessing;
pub mod support_vector;

pub use classifier::{
    Classifier, ClassifierError, DISEASE_ABSENT, DISEASE_PRESENT, PredictClass, PredictProba,
};
pub use gradient_boosting::{GradientBoostedTrees, RegressionTree, TreeNode};
pub use logistic_regression::LogisticRegression;
pub use preprocessing::{Pipeline, Standardizer};
pub use support_vector::{CalibratedSvc, Kernel, PlattScaling, SupportVectorClassifier};
