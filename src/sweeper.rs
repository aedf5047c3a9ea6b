use std::path::Path;

use anyhow::Result;
use dialoguer::console::style;
use tracing::{debug, info};

use crate::git::{CommandRunner, DeleteStrategy, GitRepo, ProcessRunner};
use crate::repository::locate_repository;
use crate::selection::{Selection, build_choices, confirm_deletion, select_branches};
use crate::task_result::TaskResult;
use crate::ui::Prompt;

/// Drives one run: locate, list, select, confirm, delete.
#[derive(Clone)]
pub struct BranchSweeper<P: Prompt, R: CommandRunner + Clone = ProcessRunner> {
    prompt: P,
    runner: R,
    strategy: DeleteStrategy,
}

impl<P: Prompt> BranchSweeper<P, ProcessRunner> {
    pub fn new(prompt: P) -> Self {
        Self::with_runner(prompt, ProcessRunner)
    }
}

impl<P: Prompt, R: CommandRunner + Clone> BranchSweeper<P, R> {
    pub fn with_runner(prompt: P, runner: R) -> Self {
        Self {
            prompt,
            runner,
            strategy: DeleteStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: DeleteStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn run(&self, cwd: &Path) -> Result<TaskResult> {
        if !locate_repository(cwd) {
            println!(
                "{}",
                style("Not a git repository (or any of the parent directories)").yellow()
            );
            return Ok(TaskResult::NotARepository);
        }

        let repo = GitRepo::with_runner(cwd.to_path_buf(), self.runner.clone());
        debug!(dir = %repo.dir().display(), "inside a git repository");
        let branches = repo.list_branches()?;

        let (_, choices) = build_choices(&branches);
        if choices.is_empty() {
            println!(
                "{}",
                style("Nothing to do: only the current branch exists").cyan()
            );
            return Ok(TaskResult::NothingToDo);
        }

        let names = match select_branches(&self.prompt, &branches)? {
            Selection::Cancelled => {
                println!("{}", style("Cancelled, no branches deleted").yellow());
                return Ok(TaskResult::Cancelled);
            }
            Selection::Chosen(names) if names.is_empty() => {
                return Ok(TaskResult::NothingSelected);
            }
            Selection::Chosen(names) => names,
        };

        if !confirm_deletion(&self.prompt, &names)? {
            println!("{}", style("No branches deleted").yellow());
            return Ok(TaskResult::Declined);
        }

        info!(branches = ?names, strategy = ?self.strategy, "deleting branches");
        repo.delete_branches(&names, self.strategy)?;
        Ok(TaskResult::Deleted(names))
    }
}
