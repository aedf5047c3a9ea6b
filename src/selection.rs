use anyhow::Result;
use dialoguer::console::style;
use tracing::debug;

use crate::git::Branch;
use crate::ui::Prompt;

pub const CONFIRM_YES: &str = "yes";
pub const CONFIRM_NO: &str = "no";

/// Result of the checkbox prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(Vec<String>),
    Cancelled,
}

/// A choice shown in the checkbox prompt: `label` is displayed, `name` is
/// what gets deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: String,
    pub label: String,
}

/// Sorts by name and splits off the current branch. Everything in the
/// returned choices is safe to offer for deletion.
pub fn build_choices(branches: &[Branch]) -> (Option<&Branch>, Vec<Choice>) {
    let mut sorted: Vec<&Branch> = branches.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let (current, others): (Vec<&Branch>, Vec<&Branch>) =
        sorted.into_iter().partition(|branch| branch.is_current);

    let choices = others
        .into_iter()
        .map(|branch| Choice {
            name: branch.name.clone(),
            label: format!("{} ({})", branch.name, branch.last_commit_relative),
        })
        .collect();

    (current.into_iter().next(), choices)
}

pub fn select_branches<P: Prompt>(prompt: &P, branches: &[Branch]) -> Result<Selection> {
    let (current, choices) = build_choices(branches);

    if let Some(current) = current {
        println!(
            "{}",
            style(format!(
                "Current branch: {} ({})",
                current.name, current.last_commit_relative
            ))
            .cyan()
        );
    }

    let labels: Vec<String> = choices.iter().map(|choice| choice.label.clone()).collect();
    let picked = prompt.multi_select(
        "Select branches to delete (space to toggle, enter to confirm)",
        &labels,
    )?;

    let Some(mut indices) = picked else {
        return Ok(Selection::Cancelled);
    };
    indices.sort_unstable();
    indices.dedup();

    let names: Vec<String> = indices
        .into_iter()
        .filter_map(|index| choices.get(index))
        .map(|choice| choice.name.clone())
        .collect();
    debug!(selected = ?names, "branches selected");
    Ok(Selection::Chosen(names))
}

pub fn validate_confirmation(input: &str) -> Result<(), String> {
    if input == CONFIRM_YES || input == CONFIRM_NO {
        Ok(())
    } else {
        Err(format!("Please type \"{CONFIRM_YES}\" or \"{CONFIRM_NO}\""))
    }
}

pub fn confirm_deletion<P: Prompt>(prompt: &P, names: &[String]) -> Result<bool> {
    if names.is_empty() {
        return Ok(false);
    }

    println!("{}", style("The following branches will be force-deleted:").red().bold());
    for (index, name) in names.iter().enumerate() {
        println!("  {}. {}", index + 1, style(name).red());
    }

    let answer = prompt.input(
        "Delete these branches? (yes/no)",
        &validate_confirmation,
    )?;
    Ok(answer.as_deref() == Some(CONFIRM_YES))
}
