use anyhow::{Context, Result};
use std::io::Write;

use crate::core::ClinicalInputs;
use crate::store::Algorithm;
use crate::tasks::{AssessError, Assessment};
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::{prompt_choice, prompt_form};
use crate::ui::render::{accuracy_line, banner, render_failure, render_report};

/// The wizard loop: pick a model, fill the form, show the result, repeat.
/// The previous answers pre-fill the next round. A model that fails to load
/// is reported straight after selection and the form is skipped.
pub fn run_interactive<D: PromptDriver, W: Write>(
    assessment: &mut Assessment,
    driver: &D,
    out: &mut W,
) -> Result<()> {
    for line in banner() {
        writeln!(out, "{line}")?;
    }

    let mut algorithm = Algorithm::default();
    let mut inputs = ClinicalInputs::default();
    loop {
        algorithm =
            prompt_choice(driver, algorithm).context("failed while prompting for algorithm")?;
        match assessment.store_mut().load(algorithm) {
            Ok(_) => {
                if let Some(line) = accuracy_line(assessment.store().cached_card(algorithm)) {
                    writeln!(out, "{line}")?;
                }

                inputs = prompt_form(driver, &inputs)
                    .context("failed while prompting for clinical parameters")?;

                match assessment.assess(algorithm, &inputs) {
                    Ok(report) => writeln!(out, "\n{}\n", render_report(&report))?,
                    Err(e) => writeln!(out, "{}", render_failure(&e))?,
                }
            }
            Err(e) => writeln!(out, "{}", render_failure(&AssessError::from(e)))?,
        }
        out.flush()?;

        if !driver.ask_bool("Assess another patient?", "", true)? {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ModelStore;
    use crate::testing::fixtures::write_all;
    use crate::testing::stubs::{Answer, ScriptedDriver};
    use tempfile::tempdir;

    fn form_answers(age: u64) -> Vec<Answer> {
        vec![
            Answer::Int(age),
            Answer::Select(0),
            Answer::Select(0),
            Answer::Int(120),
            Answer::Int(200),
            Answer::Bool(false),
            Answer::Select(0),
            Answer::Int(150),
            Answer::Bool(false),
            Answer::Float(1.0),
            Answer::Select(0),
            Answer::Int(0),
            Answer::Select(0),
        ]
    }

    fn round(algorithm: usize, age: u64, again: bool) -> Vec<Answer> {
        let mut answers = vec![Answer::Select(algorithm)];
        answers.extend(form_answers(age));
        answers.push(Answer::Bool(again));
        answers
    }

    #[test]
    fn one_round_renders_report_with_accuracy() {
        let dir = tempdir().unwrap();
        write_all(dir.path());
        let mut assessment = Assessment::new(ModelStore::new(dir.path()));
        let driver = ScriptedDriver::new(round(0, 65, false));
        let mut out = Vec::new();

        run_interactive(&mut assessment, &driver, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("HeartGuard AI"));
        assert!(text.contains("Model Accuracy: 69.3%"));
        assert!(text.contains("High Risk Detected"));
        assert_eq!(driver.remaining(), 0);
    }

    #[test]
    fn missing_model_is_reported_before_the_form_and_loop_continues() {
        let dir = tempdir().unwrap();
        let mut assessment = Assessment::new(ModelStore::new(dir.path()));
        let driver = ScriptedDriver::new([
            Answer::Select(2),
            Answer::Bool(true),
            Answer::Select(2),
            Answer::Bool(false),
        ]);
        let mut out = Vec::new();

        run_interactive(&mut assessment, &driver, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let hits = text
            .matches("Model file 'SVC' not found. Please train the model first.")
            .count();
        assert_eq!(hits, 2);
        assert!(!text.contains("Model Accuracy"));
        assert!(!driver.asked().iter().any(|t| t == "Age"));
        assert_eq!(driver.remaining(), 0);
    }

    #[test]
    fn accuracy_comes_from_the_loaded_model() {
        let dir = tempdir().unwrap();
        write_all(dir.path());
        let mut assessment = Assessment::new(ModelStore::new(dir.path()));
        let mut answers = round(1, 50, true);
        answers.extend(round(1, 50, false));
        let driver = ScriptedDriver::new(answers);
        let mut out = Vec::new();

        // once loaded, the artifact is not read again for the card
        assessment.store_mut().load(Algorithm::XgBoostClassifier).unwrap();
        std::fs::remove_file(assessment.store().artifact_path(Algorithm::XgBoostClassifier))
            .unwrap();
        run_interactive(&mut assessment, &driver, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Model Accuracy: 98.5%").count(), 2);
    }

    #[test]
    fn running_out_of_answers_is_an_error() {
        let dir = tempdir().unwrap();
        write_all(dir.path());
        let mut assessment = Assessment::new(ModelStore::new(dir.path()));
        let driver = ScriptedDriver::new([Answer::Select(0)]);
        let mut out = Vec::new();

        let err = run_interactive(&mut assessment, &driver, &mut out).unwrap_err();
        assert!(err.to_string().contains("clinical parameters"), "{err}");
    }
}
