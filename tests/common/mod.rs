#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use themesmith::constants::MANIFEST_FILE;
use themesmith::error::{Error, Result};
use themesmith::prompt::{Prompter, Tone};
use themesmith::template::ModelLibrary;

/// Prompter answering from queues instead of the terminal.
///
/// An empty or exhausted answer queue falls back to the question's default,
/// like pressing enter at the terminal.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    confirmations: RefCell<VecDeque<bool>>,
    pub asked: RefCell<Vec<String>>,
    pub messages: RefCell<Vec<(String, Tone)>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers(answers: &[&str]) -> Self {
        let prompter = Self::new();
        prompter
            .answers
            .borrow_mut()
            .extend(answers.iter().map(|a| a.to_string()));
        prompter
    }

    pub fn with_confirmations(self, confirmations: &[bool]) -> Self {
        self.confirmations.borrow_mut().extend(confirmations);
        self
    }

    fn next_answer(&self, prompt: &str) -> Option<String> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .filter(|answer| !answer.is_empty())
    }
}

impl Prompter for ScriptedPrompter {
    fn answer(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        match (self.next_answer(prompt), default) {
            (Some(answer), _) => Ok(answer),
            (None, Some(default)) => Ok(default.to_string()),
            (None, None) => Err(Error::PromptError(format!("no scripted answer for '{prompt}'"))),
        }
    }

    fn choice(&self, prompt: &str, options: &[String], default: Option<usize>) -> Result<String> {
        match self.next_answer(prompt) {
            Some(answer) if options.contains(&answer) => Ok(answer),
            Some(answer) => Err(Error::PromptError(format!("'{answer}' is not an option"))),
            None => options
                .get(default.unwrap_or(0))
                .cloned()
                .ok_or_else(|| Error::PromptError("no options".to_string())),
        }
    }

    fn choices(&self, prompt: &str, options: &[String]) -> Result<Vec<String>> {
        match self.next_answer(prompt) {
            Some(answer) => Ok(answer.split(',').map(|a| a.trim().to_string()).collect()),
            None => Ok(options.to_vec()),
        }
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.confirmations.borrow_mut().pop_front().unwrap_or(default))
    }

    fn write(&self, message: &str, tone: Tone) {
        self.messages.borrow_mut().push((message.to_string(), tone));
    }
}

/// The model library shipped with the crate.
pub fn shipped_models() -> ModelLibrary {
    ModelLibrary::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models"))
}

/// A temporary project root holding a manifest.
pub fn project_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(MANIFEST_FILE), "{}").unwrap();
    temp_dir
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path.as_ref())
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.as_ref().display()))
}
