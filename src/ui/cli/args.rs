use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use strum::IntoEnumIterator;

use crate::core::ClinicalInputs;
use crate::core::attributes::{Categorical, ChestPainType, RestingEcg, Sex, StSlope, Thalassemia};
use crate::store::Algorithm;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Cardiac risk assessment with pre-trained classifiers"
)]
pub struct Cli {
    /// Directory holding the <Algorithm>.json model artifacts
    #[arg(
        long,
        global = true,
        env = "HEARTGUARD_MODEL_DIR",
        default_value = "models",
        value_name = "DIR",
        value_hint = ValueHint::DirPath
    )]
    pub model_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Assess one patient without the interactive wizard
    Assess(AssessArgs),
    /// List the algorithms with their model cards
    Models,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct AssessArgs {
    /// Model to use (LogisticRegression, XGBoostClassifier, SVC)
    #[arg(long, default_value = "LogisticRegression", value_name = "ALGORITHM")]
    pub algorithm: String,

    /// Age in years
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub age: u32,

    /// female or male (or 0/1)
    #[arg(long, default_value = "female")]
    pub sex: String,

    /// Chest pain type (typical-angina, atypical-angina, non-anginal-pain, asymptomatic, or 0-3)
    #[arg(long, default_value = "typical-angina", value_name = "TYPE")]
    pub cp: String,

    /// Resting blood pressure in mm Hg
    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u32).range(50..=250))]
    pub trestbps: u32,

    /// Serum cholesterol in mg/dl
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(100..=600))]
    pub chol: u32,

    /// Fasting blood sugar above 120 mg/dl
    #[arg(long)]
    pub fbs: bool,

    /// Resting ECG (normal, st-t-abnormality, lv-hypertrophy, or 0-2)
    #[arg(long, default_value = "normal", value_name = "RESULT")]
    pub restecg: String,

    /// Maximum heart rate achieved
    #[arg(long, default_value_t = 150, value_parser = clap::value_parser!(u32).range(50..=250))]
    pub thalach: u32,

    /// Exercise induced angina
    #[arg(long)]
    pub exang: bool,

    /// ST depression induced by exercise, 0.0 to 10.0 in steps of 0.1
    #[arg(long, default_value_t = 1.0)]
    pub oldpeak: f64,

    /// ST slope (upsloping, flat, downsloping, or 0-2)
    #[arg(long, default_value = "upsloping", value_name = "SLOPE")]
    pub slope: String,

    /// Number of major vessels colored by fluoroscopy
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub ca: u8,

    /// Thalassemia (normal, fixed-defect, reversible-defect, unknown, or 0-3)
    #[arg(long, default_value = "normal", value_name = "THAL")]
    pub thal: String,

    /// How to print the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssessRequest {
    pub algorithm: Algorithm,
    pub inputs: ClinicalInputs,
    pub format: OutputFormat,
}

impl AssessArgs {
    pub fn into_request(self) -> Result<AssessRequest> {
        let algorithm = parse_kind::<Algorithm>(&self.algorithm).with_context(|| {
            format!(
                "invalid algorithm '{}' (expected one of: {})",
                self.algorithm,
                Algorithm::iter()
                    .map(Algorithm::name)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })?;

        let inputs = ClinicalInputs {
            age: self.age,
            sex: parse_categorical::<Sex>("sex", &self.sex)?,
            cp: parse_categorical::<ChestPainType>("cp", &self.cp)?,
            trestbps: self.trestbps,
            chol: self.chol,
            fbs: self.fbs,
            restecg: parse_categorical::<RestingEcg>("restecg", &self.restecg)?,
            thalach: self.thalach,
            exang: self.exang,
            oldpeak: self.oldpeak,
            slope: parse_categorical::<StSlope>("slope", &self.slope)?,
            ca: self.ca,
            thal: parse_categorical::<Thalassemia>("thal", &self.thal)?,
        };

        Ok(AssessRequest {
            algorithm,
            inputs,
            format: self.format,
        })
    }
}

/// Accepts any spelling of a level, or its numeric code.
fn parse_categorical<C>(field: &str, raw: &str) -> Result<C>
where
    C: Categorical + FromStr,
    <C as FromStr>::Err: std::fmt::Display,
{
    if let Ok(level) = parse_kind::<C>(raw) {
        return Ok(level);
    }
    raw.trim()
        .parse::<u8>()
        .ok()
        .and_then(C::from_code)
        .ok_or_else(|| {
            let allowed: Vec<&'static str> = C::iter().map(Into::into).collect();
            anyhow!(
                "invalid {field} '{raw}' (expected one of: {}, or 0-{})",
                allowed.join(", "),
                C::levels() - 1
            )
        })
}

fn parse_kind<T>(raw: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let candidates = candidate_spellings(raw);
    for cand in candidates {
        if let Ok(parsed) = cand.parse::<T>() {
            return Ok(parsed);
        }
    }
    Err(anyhow!("could not parse value '{raw}'"))
}

fn candidate_spellings(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return out;
    }

    out.push(trimmed.to_string());
    out.push(trimmed.to_lowercase());
    out.push(kebab_from_token(trimmed));
    out.push(trimmed.replace(['_', ' '], "-"));
    out.sort();
    out.dedup();
    out
}

fn kebab_from_token(token: &str) -> String {
    let mut buf = String::new();
    let mut prev_lower = false;
    for ch in token.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                buf.push('-');
            }
            for low in ch.to_lowercase() {
                buf.push(low);
            }
            prev_lower = false;
        } else if ch == '_' || ch == ' ' {
            buf.push('-');
            prev_lower = false;
        } else {
            buf.push(ch);
            prev_lower = ch.is_lowercase();
        }
    }
    if buf.is_empty() {
        token.to_lowercase()
    } else {
        buf
    }
}
