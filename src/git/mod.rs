use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::console::style;
use tracing::{debug, info, trace};

use crate::error::{DeletionFailure, GitError};

pub mod runner;
#[cfg(test)]
pub(crate) mod testing;

pub use runner::{CommandRunner, ProcessRunner, format_command};

pub const FIELD_DELIMITER: &str = ":::";
pub const UNKNOWN: &str = "Unknown";

const LIST_FORMAT: &str = "--format=%(HEAD):::%(refname:short):::%(committerdate:relative):::%(committerdate:format:%Y-%m-%dT%H:%M:%S%z)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub last_commit_relative: String,
    pub last_commit: String,
    pub is_current: bool,
}

/// How selected branches are handed to `git branch -D`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteStrategy {
    /// One call per branch; every name is attempted and all failures are
    /// reported together.
    #[default]
    PerBranch,
    /// A single call naming every branch; any failure fails the batch.
    Batch,
}

pub struct GitRepo<R: CommandRunner = ProcessRunner> {
    dir: PathBuf,
    runner: R,
}

impl<R: CommandRunner> GitRepo<R> {
    pub fn with_runner(dir: PathBuf, runner: R) -> Self {
        Self { dir, runner }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn list_branches(&self) -> Result<Vec<Branch>, GitError> {
        let args = ["branch", "--list", LIST_FORMAT];
        let output = self
            .runner
            .run(&self.dir, "git", &args)
            .map_err(|err| GitError::list(format!("{err:#}")))?;

        if !output.success() {
            return Err(GitError::list(output.failure_message()));
        }

        let branches = parse_branch_listing(&output.stdout);
        debug!(count = branches.len(), "listed local branches");
        for branch in &branches {
            trace!(
                name = %branch.name,
                last_commit = %branch.last_commit,
                current = branch.is_current,
                "branch"
            );
        }
        Ok(branches)
    }

    pub fn delete_branches(
        &self,
        names: &[String],
        strategy: DeleteStrategy,
    ) -> Result<(), GitError> {
        if names.is_empty() {
            return Ok(());
        }

        let failures: Vec<DeletionFailure> = match strategy {
            DeleteStrategy::PerBranch => names
                .iter()
                .filter_map(|name| self.delete_batch(std::slice::from_ref(name)))
                .collect(),
            DeleteStrategy::Batch => self.delete_batch(names).into_iter().collect(),
        };

        if failures.is_empty() {
            Ok(())
        } else {
            Err(GitError::Deletion { failures })
        }
    }

    /// Force-deletes `names` in one call, printing the outcome. Returns the
    /// failure, if any, instead of stopping the caller.
    fn delete_batch(&self, names: &[String]) -> Option<DeletionFailure> {
        let mut args = vec!["branch", "-D", "--"];
        args.extend(names.iter().map(String::as_str));
        println!("{}", style(format_command("git", &args)).dim());

        let message = match self.runner.run(&self.dir, "git", &args) {
            Ok(output) if output.success() => {
                for name in names {
                    info!(branch = %name, "deleted branch");
                    println!("{} {}", style("Deleted").green(), name);
                }
                return None;
            }
            Ok(output) => output.failure_message(),
            Err(err) => format!("{err:#}"),
        };

        debug!(branches = ?names, %message, "branch deletion failed");
        eprintln!(
            "{} {}: {}",
            style("Failed to delete").red().bold(),
            names.join(", "),
            message
        );
        Some(DeletionFailure {
            branches: names.to_vec(),
            message,
        })
    }
}

pub fn parse_branch_listing(output: &str) -> Vec<Branch> {
    output.lines().filter_map(parse_branch_line).collect()
}

fn parse_branch_line(line: &str) -> Option<Branch> {
    let mut fields = line.split(FIELD_DELIMITER);
    let head = fields.next()?;
    let rest: Vec<&str> = fields.collect();

    // `%(HEAD)` yields a lone marker field; older formats prefix the name.
    let (is_current, name, times) = match head.trim() {
        "*" => (true, rest.first().map_or("", |name| name.trim()), rest.get(1..)),
        "" => (false, rest.first().map_or("", |name| name.trim()), rest.get(1..)),
        field => match field.strip_prefix('*') {
            Some(name) => (true, name.trim(), Some(&rest[..])),
            None => (false, field, Some(&rest[..])),
        },
    };

    if name.is_empty() {
        return None;
    }

    let times = times.unwrap_or_default();
    Some(Branch {
        name: name.to_string(),
        last_commit_relative: field_or_unknown(times.first()),
        last_commit: field_or_unknown(times.get(1)),
        is_current,
    })
}

fn field_or_unknown(field: Option<&&str>) -> String {
    match field.map(|value| value.trim()) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => UNKNOWN.to_string(),
    }
}
