use anyhow::Result;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, Select, Text};

/// The prompts the wizard needs. `InquireDriver` talks to the terminal;
/// tests swap in a scripted driver.
pub trait PromptDriver {
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String>;
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool>;
    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64>;
    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64>;
    /// Returns the index of the chosen option.
    fn ask_select(&self, title: &str, help: &str, options: &[String], start: usize)
    -> Result<usize>;
}

pub struct InquireDriver;

fn range_message<T: std::fmt::Display>(min: Option<T>, max: Option<T>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("Must be between {lo} and {hi}"),
        (Some(lo), None) => format!("Must be at least {lo}"),
        (None, Some(hi)) => format!("Must be at most {hi}"),
        (None, None) => String::new(),
    }
}

impl PromptDriver for InquireDriver {
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        let mut p = Text::new(title).with_default(default);
        if !help.is_empty() {
            p = p.with_help_message(help);
        }
        Ok(p.prompt()?)
    }

    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        let mut p = Confirm::new(title).with_default(default);
        if !help.is_empty() {
            p = p.with_help_message(help);
        }
        Ok(p.prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let msg = range_message(min, max);
        let mut p = CustomType::<u64>::new(title)
            .with_default(default)
            .with_error_message("Please type a whole number")
            .with_validator(move |v: &u64| {
                let below = min.is_some_and(|lo| *v < lo);
                let above = max.is_some_and(|hi| *v > hi);
                if below || above {
                    Ok(Validation::Invalid(msg.clone().into()))
                } else {
                    Ok(Validation::Valid)
                }
            });
        if !help.is_empty() {
            p = p.with_help_message(help);
        }
        Ok(p.prompt()?)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let msg = range_message(min, max);
        let mut p = CustomType::<f64>::new(title)
            .with_default(default)
            .with_error_message("Please type a number")
            .with_validator(move |v: &f64| {
                let below = min.is_some_and(|lo| *v < lo);
                let above = max.is_some_and(|hi| *v > hi);
                if !v.is_finite() || below || above {
                    Ok(Validation::Invalid(msg.clone().into()))
                } else {
                    Ok(Validation::Valid)
                }
            });
        if !help.is_empty() {
            p = p.with_help_message(help);
        }
        Ok(p.prompt()?)
    }

    fn ask_select(
        &self,
        title: &str,
        help: &str,
        options: &[String],
        start: usize,
    ) -> Result<usize> {
        let mut p = Select::new(title, options.to_vec())
            .with_starting_cursor(start.min(options.len().saturating_sub(1)));
        if !help.is_empty() {
            p = p.with_help_message(help);
        }
        Ok(p.raw_prompt()?.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_messages() {
        assert_eq!(range_message(Some(1), Some(120)), "Must be between 1 and 120");
        assert_eq!(range_message(Some(0.0), None::<f64>), "Must be at least 0");
        assert_eq!(range_message(None::<u64>, None), "");
    }
}
