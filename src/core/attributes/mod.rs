mod categorical;

pub use categorical::{Categorical, ChestPainType, RestingEcg, Sex, StSlope, Thalassemia};
