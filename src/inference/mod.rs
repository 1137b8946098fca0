pub mod adapter;

pub use adapter::{PredictionError, RiskVerdict, infer};
