use std::io;

use anyhow::Result;
use dialoguer::{Input, MultiSelect, theme::ColorfulTheme};

#[cfg(test)]
pub(crate) mod testing;

/// Checks one line of free-text input; `Err` carries the message shown
/// before re-prompting.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Interactive prompts. `Ok(None)` means the user cancelled.
pub trait Prompt {
    /// Returns the indices of the toggled items, in list order.
    fn multi_select(&self, message: &str, items: &[String]) -> Result<Option<Vec<usize>>>;

    /// Re-prompts until `validate` accepts the line.
    fn input(&self, message: &str, validate: Validator<'_>) -> Result<Option<String>>;
}

#[derive(Default, Clone)]
pub struct DialoguerPrompt;

impl Prompt for DialoguerPrompt {
    fn multi_select(&self, message: &str, items: &[String]) -> Result<Option<Vec<usize>>> {
        let theme = ColorfulTheme::default();
        let selection = MultiSelect::with_theme(&theme)
            .with_prompt(message)
            .items(items)
            .report(false)
            .interact_opt();
        cancelled_on_interrupt(selection)
    }

    fn input(&self, message: &str, validate: Validator<'_>) -> Result<Option<String>> {
        let theme = ColorfulTheme::default();
        let answer = Input::<String>::with_theme(&theme)
            .with_prompt(message)
            .validate_with(|value: &String| validate(value))
            .interact_text()
            .map(Some);
        cancelled_on_interrupt(answer)
    }
}

/// Ctrl-C surfaces from dialoguer as an interrupted read.
fn cancelled_on_interrupt<T>(result: dialoguer::Result<Option<T>>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(value),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(err.into()),
    }
}
