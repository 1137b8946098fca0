use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// A clinical field with a fixed set of levels. The integer code of a level
/// is its declaration position, which is what the classifiers were fitted on.
pub trait Categorical:
    Copy + PartialEq + IntoEnumIterator + EnumMessage + Into<&'static str> + 'static
{
    fn code(self) -> u8 {
        Self::iter().position(|v| v == self).unwrap_or_default() as u8
    }

    fn from_code(code: u8) -> Option<Self> {
        Self::iter().nth(usize::from(code))
    }

    fn label(self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.into())
    }

    fn levels() -> usize {
        Self::iter().count()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Sex {
    #[default]
    #[strum(message = "Female")]
    Female,
    #[strum(message = "Male")]
    Male,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ChestPainType {
    #[default]
    #[strum(message = "Typical Angina")]
    TypicalAngina,
    #[strum(message = "Atypical Angina")]
    AtypicalAngina,
    #[strum(message = "Non-anginal Pain")]
    NonAnginalPain,
    #[strum(message = "Asymptomatic")]
    Asymptomatic,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum RestingEcg {
    #[default]
    #[strum(message = "Normal")]
    Normal,
    #[strum(message = "ST-T Abnormality")]
    StTAbnormality,
    #[strum(message = "LV Hypertrophy")]
    LvHypertrophy,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum StSlope {
    #[default]
    #[strum(message = "Upsloping")]
    Upsloping,
    #[strum(message = "Flat")]
    Flat,
    #[strum(message = "Downsloping")]
    Downsloping,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Thalassemia {
    #[default]
    #[strum(message = "Normal")]
    Normal,
    #[strum(message = "Fixed Defect")]
    FixedDefect,
    #[strum(message = "Reversible Defect")]
    ReversibleDefect,
    #[strum(message = "Unknown")]
    Unknown,
}

impl Categorical for Sex {}
impl Categorical for ChestPainType {}
impl Categorical for RestingEcg {}
impl Categorical for StSlope {}
impl Categorical for Thalassemia {}
