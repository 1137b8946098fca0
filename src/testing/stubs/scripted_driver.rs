use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, anyhow};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One canned reply. `Select` is an index into the offered options.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Bool(bool),
    Int(u64),
    Float(f64),
    Select(usize),
}

/// Replays answers in order and records every prompt title it was shown.
#[derive(Default)]
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        self.asked.borrow_mut().push(title.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer left for '{title}'"))
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_string(&self, title: &str, _help: &str, _default: &str) -> Result<String> {
        match self.next(title)? {
            Answer::Text(s) => Ok(s),
            other => Err(anyhow!("expected text for '{title}', got {other:?}")),
        }
    }

    fn ask_bool(&self, title: &str, _help: &str, _default: bool) -> Result<bool> {
        match self.next(title)? {
            Answer::Bool(b) => Ok(b),
            other => Err(anyhow!("expected bool for '{title}', got {other:?}")),
        }
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        _default: u64,
        _min: Option<u64>,
        _max: Option<u64>,
    ) -> Result<u64> {
        match self.next(title)? {
            Answer::Int(n) => Ok(n),
            other => Err(anyhow!("expected integer for '{title}', got {other:?}")),
        }
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        _default: f64,
        _min: Option<f64>,
        _max: Option<f64>,
    ) -> Result<f64> {
        match self.next(title)? {
            Answer::Float(x) => Ok(x),
            Answer::Int(n) => Ok(n as f64),
            other => Err(anyhow!("expected number for '{title}', got {other:?}")),
        }
    }

    fn ask_select(
        &self,
        title: &str,
        _help: &str,
        options: &[String],
        _start: usize,
    ) -> Result<usize> {
        match self.next(title)? {
            Answer::Select(i) if i < options.len() => Ok(i),
            other => Err(anyhow!("invalid selection for '{title}': {other:?}")),
        }
    }
}
