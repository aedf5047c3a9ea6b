use std::path::Path;

use anyhow::Result;

use git_branch_sweep::ui::DialoguerPrompt;
use git_branch_sweep::{BranchSweeper, TaskResult};

pub fn run(cwd: &Path) -> Result<i32> {
    let sweeper = BranchSweeper::new(DialoguerPrompt);
    let result = sweeper.run(cwd)?;
    if let TaskResult::Deleted(names) = &result {
        tracing::info!(count = names.len(), "sweep finished");
    }
    Ok(result.exit_code())
}
