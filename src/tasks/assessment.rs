use crate::core::{ClinicalInputs, ClinicalRecord, InputError, assemble};
use crate::inference::{PredictionError, RiskVerdict, infer};
use crate::store::{Algorithm, ModelStore, StoreError};
use crate::tasks::recommendations::{Recommendation, recommendations_for};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum AssessError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

impl AssessError {
    /// The line shown to the person filling in the form.
    pub fn user_message(&self) -> String {
        match self {
            AssessError::Input(e) => e.to_string(),
            AssessError::Store(e) if e.is_missing() => format!(
                "Model file '{}' not found. Please train the model first.",
                e.name()
            ),
            AssessError::Store(e) => format!("Could not load model '{}': {e}", e.name()),
            AssessError::Prediction(e) => format!("Prediction Error: {e}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub algorithm: Algorithm,
    pub record: ClinicalRecord,
    pub verdict: RiskVerdict,
    pub recommendations: &'static [Recommendation],
    pub assessed_at: DateTime<Utc>,
}

/// One form submission at a time against a shared model store.
pub struct Assessment {
    store: ModelStore,
}

impl Assessment {
    pub fn new(store: ModelStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ModelStore {
        &mut self.store
    }

    pub fn assess(
        &mut self,
        algorithm: Algorithm,
        inputs: &ClinicalInputs,
    ) -> Result<AssessmentReport, AssessError> {
        inputs.validate()?;
        let classifier = self.store.load(algorithm).inspect_err(|e| {
            warn!(%algorithm, error = %e, "model unavailable");
        })?;

        let record = assemble(inputs);
        let verdict = infer(&classifier, &record)?;
        info!(
            %algorithm,
            high_risk = verdict.high_risk,
            probability = verdict.probability,
            "assessment complete"
        );

        Ok(AssessmentReport {
            algorithm,
            record,
            verdict,
            recommendations: recommendations_for(&verdict),
            assessed_at: Utc::now(),
        })
    }
}
