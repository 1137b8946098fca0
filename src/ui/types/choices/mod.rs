mod algorithm_choice;
mod clinical_form;
mod schema;

pub use schema::{FieldKind, FieldSpec, schema_of, specs_for_form};

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::{EnumMessage, IntoEnumIterator};

/// A fieldless enum offered as a single Select.
pub trait UIChoice:
    Copy + PartialEq + Into<&'static str> + EnumMessage + IntoEnumIterator + 'static
{
    fn prompt_label() -> &'static str;

    fn prompt_help() -> Option<&'static str> {
        None
    }
}

/// A struct filled in field by field from its JSON schema.
pub trait UIForm: JsonSchema + Serialize + DeserializeOwned {
    fn prompt_label() -> &'static str;

    /// Human labels for an enumerated field, in the schema's value order.
    fn option_labels(_field: &str) -> Option<Vec<&'static str>> {
        None
    }
}
