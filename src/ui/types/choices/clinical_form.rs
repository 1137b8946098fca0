use crate::core::ClinicalInputs;
use crate::core::attributes::{Categorical, ChestPainType, RestingEcg, Sex, StSlope, Thalassemia};
use crate::ui::types::choices::UIForm;

fn labels<C: Categorical>() -> Vec<&'static str> {
    C::iter().map(C::label).collect()
}

impl UIForm for ClinicalInputs {
    fn prompt_label() -> &'static str {
        "Patient Clinical Parameters"
    }

    fn option_labels(field: &str) -> Option<Vec<&'static str>> {
        match field {
            "sex" => Some(labels::<Sex>()),
            "cp" => Some(labels::<ChestPainType>()),
            "restecg" => Some(labels::<RestingEcg>()),
            "slope" => Some(labels::<StSlope>()),
            "thal" => Some(labels::<Thalassemia>()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_code_order() {
        let cp = ClinicalInputs::option_labels("cp").unwrap();
        assert_eq!(cp.len(), 4);
        assert_eq!(cp[0], ChestPainType::TypicalAngina.label());
        assert_eq!(cp[3], ChestPainType::Asymptomatic.label());
        assert!(ClinicalInputs::option_labels("age").is_none());
    }
}
