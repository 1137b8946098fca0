use crate::store::Algorithm;
use crate::ui::types::choices::UIChoice;

impl UIChoice for Algorithm {
    fn prompt_label() -> &'static str {
        "Select Algorithm"
    }

    fn prompt_help() -> Option<&'static str> {
        Some("Each algorithm loads its own pre-trained model")
    }
}
