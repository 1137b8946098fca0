pub mod assessment;
pub mod recommendations;

pub use assessment::{AssessError, Assessment, AssessmentReport};
pub use recommendations::{HIGH_RISK, LOW_RISK, Recommendation, recommendations_for};
