use crate::inference::RiskVerdict;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const HIGH_RISK: &[Recommendation] = &[
    Recommendation {
        title: "Immediate Consultation",
        detail: "Refer patient to a cardiologist for comprehensive evaluation.",
    },
    Recommendation {
        title: "Diagnostic Imaging",
        detail: "Recommended: Stress Echocardiography or Coronary Angiography.",
    },
];

pub const LOW_RISK: &[Recommendation] = &[
    Recommendation {
        title: "Routine Monitoring",
        detail: "Schedule annual cardiac health screening.",
    },
    Recommendation {
        title: "Lifestyle Maintenance",
        detail: "Encourage heart-healthy diet and regular physical activity.",
    },
];

/// Depends on the predicted class only, never on the probability.
pub fn recommendations_for(verdict: &RiskVerdict) -> &'static [Recommendation] {
    if verdict.high_risk { HIGH_RISK } else { LOW_RISK }
}
