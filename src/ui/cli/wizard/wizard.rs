use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, UIChoice, UIForm, schema_of, specs_for_form};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

struct KindItem<K> {
    kind: K,
    text: String,
}

impl<K> Display for KindItem<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn kind_items<K>() -> Vec<KindItem<K>>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            KindItem { kind: k, text }
        })
        .collect()
}

pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D, current: C) -> Result<C> {
    let items = kind_items::<C>();
    let texts: Vec<String> = items.iter().map(ToString::to_string).collect();
    let start = items.iter().position(|i| i.kind == current).unwrap_or(0);

    let idx = driver.ask_select(
        C::prompt_label(),
        C::prompt_help().unwrap_or(""),
        &texts,
        start,
    )?;
    items
        .get(idx)
        .map(|i| i.kind)
        .context("selection out of range")
}

/// Walks the form's schema, asking for each field with `initial` as the
/// pre-filled answer.
pub fn prompt_form<F: UIForm, D: PromptDriver>(driver: &D, initial: &F) -> Result<F> {
    let schema = schema_of::<F>();
    let specs = specs_for_form(&schema)?;
    let init = serde_json::to_value(initial).context("serializing initial form values")?;

    let mut params = Map::new();
    for s in specs {
        let cur = init.get(&s.name);
        let help = s.description.as_deref().unwrap_or("");

        let val = match s.kind {
            FieldKind::Boolean => {
                let def = cur.and_then(Value::as_bool).unwrap_or(false);
                Value::Bool(driver.ask_bool(&s.title, help, def)?)
            }

            FieldKind::String => {
                let def = cur.and_then(Value::as_str).unwrap_or("");
                match &s.allowed {
                    Some(values) => {
                        let menu: Vec<String> = F::option_labels(&s.name)
                            .filter(|labels| labels.len() == values.len())
                            .map(|labels| labels.into_iter().map(str::to_string).collect())
                            .unwrap_or_else(|| values.clone());
                        let start = values.iter().position(|v| v == def).unwrap_or(0);
                        let idx = driver.ask_select(&s.title, help, &menu, start)?;
                        let picked = values
                            .get(idx)
                            .with_context(|| format!("selection out of range for {}", s.title))?;
                        Value::String(picked.clone())
                    }
                    None => Value::String(driver.ask_string(&s.title, help, def)?),
                }
            }

            FieldKind::Integer => {
                let def = cur.and_then(Value::as_u64).unwrap_or(0);
                Value::from(driver.ask_u64(
                    &s.title,
                    help,
                    def,
                    s.min.map(|x| x as u64),
                    s.max.map(|x| x as u64),
                )?)
            }

            FieldKind::Number => {
                let def = cur.and_then(Value::as_f64).unwrap_or(0.0);
                Value::from(prompt_number_until_ok(driver, &s, help, def)?)
            }
        };
        params.insert(s.name.clone(), val);
    }

    serde_json::from_value(Value::Object(params)).context("answers do not fit the form")
}

fn check_step(value: f64, step: Option<f64>) -> Result<(), String> {
    let Some(step) = step.filter(|s| *s > 0.0) else {
        return Ok(());
    };
    let k = (value / step).round();
    if (value - k * step).abs() > 1e-9 {
        return Err(format!("Expected a multiple of {step}"));
    }
    Ok(())
}

fn prompt_number_until_ok<D: PromptDriver>(
    driver: &D,
    spec: &FieldSpec,
    help: &str,
    default: f64,
) -> Result<f64> {
    loop {
        let answer = driver.ask_f64(&spec.title, help, default, spec.min, spec.max)?;
        match check_step(answer, spec.step) {
            Ok(()) => return Ok(answer),
            Err(msg) => {
                eprintln!("✗ {}", msg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClinicalInputs;
    use crate::core::attributes::{ChestPainType, RestingEcg, Sex, StSlope, Thalassemia};
    use crate::store::Algorithm;
    use crate::testing::stubs::{Answer, ScriptedDriver};
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
    struct NoteForm {
        #[schemars(title = "Label")]
        label: String,
        #[schemars(title = "Count", range(min = 1, max = 9))]
        count: u32,
    }

    impl UIForm for NoteForm {
        fn prompt_label() -> &'static str {
            "Note"
        }
    }

    #[test]
    fn kind_items_show_message_and_detail() {
        let items = kind_items::<Algorithm>();
        assert_eq!(items.len(), 3);
        assert!(items[0].text.starts_with("Logistic Regression"));
        assert!(items[2].text.contains("Platt"));
    }

    #[test]
    fn prompt_choice_maps_index_to_variant() {
        let driver = ScriptedDriver::new([Answer::Select(1)]);
        let picked = prompt_choice(&driver, Algorithm::Svc).unwrap();
        assert_eq!(picked, Algorithm::XgBoostClassifier);
        assert_eq!(driver.asked(), vec!["Select Algorithm"]);
    }

    #[test]
    fn check_step_accepts_grid_values_only() {
        assert!(check_step(2.3, Some(0.1)).is_ok());
        assert!(check_step(0.0, Some(0.1)).is_ok());
        assert!(check_step(10.0, Some(0.1)).is_ok());
        assert!(check_step(2.35, Some(0.1)).is_err());
        assert!(check_step(2.35, None).is_ok());
    }

    #[test]
    fn prompt_form_fills_every_field_in_order() {
        let driver = ScriptedDriver::new([
            Answer::Int(63),
            Answer::Select(1),
            Answer::Select(3),
            Answer::Int(145),
            Answer::Int(233),
            Answer::Bool(true),
            Answer::Select(2),
            Answer::Int(150),
            Answer::Bool(false),
            Answer::Float(2.35),
            Answer::Float(2.3),
            Answer::Select(1),
            Answer::Int(4),
            Answer::Select(2),
        ]);

        let inputs: ClinicalInputs = prompt_form(&driver, &ClinicalInputs::default()).unwrap();
        assert_eq!(
            inputs,
            ClinicalInputs {
                age: 63,
                sex: Sex::Male,
                cp: ChestPainType::Asymptomatic,
                trestbps: 145,
                chol: 233,
                fbs: true,
                restecg: RestingEcg::LvHypertrophy,
                thalach: 150,
                exang: false,
                oldpeak: 2.3,
                slope: StSlope::Flat,
                ca: 4,
                thal: Thalassemia::ReversibleDefect,
            }
        );

        let asked = driver.asked();
        assert_eq!(asked.len(), 14);
        assert_eq!(asked[0], "Age");
        // off-grid oldpeak is asked again
        assert_eq!(asked[9], asked[10]);
        assert_eq!(driver.remaining(), 0);
    }

    #[test]
    fn free_text_fields_are_asked_as_strings() {
        let driver = ScriptedDriver::new([Answer::Text("follow-up".into()), Answer::Int(3)]);
        let initial = NoteForm {
            label: String::new(),
            count: 1,
        };

        let form: NoteForm = prompt_form(&driver, &initial).unwrap();
        assert_eq!(
            form,
            NoteForm {
                label: "follow-up".into(),
                count: 3,
            }
        );
        assert_eq!(driver.asked(), vec!["Label", "Count"]);
    }

    #[test]
    fn wrong_answer_kind_for_free_text_is_an_error() {
        let driver = ScriptedDriver::new([Answer::Int(3)]);
        let initial = NoteForm {
            label: String::new(),
            count: 1,
        };
        assert!(prompt_form(&driver, &initial).is_err());
    }
}
