pub mod algorithm;
pub mod artifact;
pub mod model_store;

pub use algorithm::Algorithm;
pub use artifact::{DatasetSplit, ModelArtifact, ModelCard, ModelParams};
pub use model_store::{ModelStore, StoreError};
