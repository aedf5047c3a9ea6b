use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};

use super::runner::{CommandOutput, CommandRunner};

/// Scripted stand-in for `git`: answers `git branch --list` with a fixed
/// listing and records every call.
#[derive(Clone, Default)]
pub struct FakeRunner {
    listing: Option<CommandOutput>,
    failing: Vec<String>,
    missing_binary: bool,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl FakeRunner {
    pub fn with_listing(stdout: &str) -> Self {
        Self {
            listing: Some(CommandOutput {
                status: Some(0),
                stdout: stdout.to_string(),
                stderr: String::new(),
            }),
            ..Self::default()
        }
    }

    pub fn failing_listing(stderr: &str) -> Self {
        Self {
            listing: Some(CommandOutput {
                status: Some(128),
                stdout: String::new(),
                stderr: stderr.to_string(),
            }),
            ..Self::default()
        }
    }

    pub fn missing_binary() -> Self {
        Self {
            missing_binary: true,
            ..Self::default()
        }
    }

    pub fn failing_on(mut self, branch: &str) -> Self {
        self.failing.push(branch.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    /// Branch names passed to each `git branch -D` call, one entry per call.
    pub fn deletions(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|call| call.get(1).map(String::as_str) == Some("-D"))
            .map(|call| call.into_iter().skip(3).collect())
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, _dir: &Path, program: &str, args: &[&str]) -> Result<CommandOutput> {
        if self.missing_binary {
            return Err(anyhow!("failed to run {program}: No such file or directory"));
        }
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(args.iter().map(|arg| arg.to_string()).collect());

        match args {
            ["branch", "--list", ..] => self
                .listing
                .clone()
                .ok_or_else(|| anyhow!("no listing scripted")),
            ["branch", "-D", "--", names @ ..] => {
                let failed: Vec<&str> = names
                    .iter()
                    .copied()
                    .filter(|name| self.failing.iter().any(|failing| failing == name))
                    .collect();
                if failed.is_empty() {
                    Ok(CommandOutput {
                        status: Some(0),
                        ..CommandOutput::default()
                    })
                } else {
                    Ok(CommandOutput {
                        status: Some(1),
                        stdout: String::new(),
                        stderr: format!("error: branch '{}' not found", failed.join("', '")),
                    })
                }
            }
            _ => Err(anyhow!("unexpected command: {program} {}", args.join(" "))),
        }
    }
}
