use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::debug;

/// Captured result of an external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// The most useful text to show when the command failed.
    pub fn failure_message(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match self.status {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs external programs. Errors are reserved for failing to spawn the
/// program at all; a non-zero exit is reported through `CommandOutput`.
pub trait CommandRunner {
    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<CommandOutput> {
        debug!(dir = %dir.display(), command = %format_command(program, args), "running command");
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("failed to run {}", format_command(program, args)))?;

        let result = CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8(output.stdout).context("command output was not valid UTF-8")?,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(status = ?result.status, "command finished");
        Ok(result)
    }
}

/// Renders a command line with every argument quoted for a POSIX shell.
pub fn format_command(program: &str, args: &[&str]) -> String {
    let parts: Vec<String> = std::iter::once(program)
        .chain(args.iter().copied())
        .map(|part| shell_words::quote(part).into_owned())
        .collect();
    parts.join(" ")
}
