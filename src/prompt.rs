//! User input and interaction handling.
//! Builders only see the [`Prompter`] trait; [`DialoguerPrompter`] is the
//! terminal implementation used by the binary.

use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{Error, Result};

/// Colour hint for messages written back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Failure,
}

/// Interactive collaborator asked for answers, choices and confirmations.
pub trait Prompter {
    /// Asks a free-text question. Without a default an empty answer is
    /// refused and the question is asked again.
    fn answer(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Asks to pick exactly one of `options`.
    fn choice(&self, prompt: &str, options: &[String], default: Option<usize>) -> Result<String>;

    /// Asks to pick any number of `options`.
    fn choices(&self, prompt: &str, options: &[String]) -> Result<Vec<String>>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Writes a message to the user.
    fn write(&self, message: &str, tone: Tone);
}

fn prompt_error(e: dialoguer::Error) -> Error {
    Error::PromptError(e.to_string())
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn answer(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string()).allow_empty(true);
        }
        let answer = input.interact_text().map_err(prompt_error)?;
        Ok(answer.trim().to_string())
    }

    fn choice(&self, prompt: &str, options: &[String], default: Option<usize>) -> Result<String> {
        if options.is_empty() {
            return Err(Error::PromptError(format!("no options available for '{prompt}'")));
        }
        let selection = Select::new()
            .with_prompt(prompt)
            .default(default.unwrap_or(0))
            .items(options)
            .interact()
            .map_err(prompt_error)?;

        Ok(options[selection].clone())
    }

    fn choices(&self, prompt: &str, options: &[String]) -> Result<Vec<String>> {
        let selection = MultiSelect::new()
            .with_prompt(prompt)
            .items(options)
            .interact()
            .map_err(prompt_error)?;

        Ok(selection.into_iter().map(|index| options[index].clone()).collect())
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn write(&self, message: &str, tone: Tone) {
        match tone {
            Tone::Info => println!("{message}"),
            Tone::Success => println!("{}", message.green()),
            Tone::Warning => println!("{}", message.yellow()),
            Tone::Failure => eprintln!("{}", message.red()),
        }
    }
}
