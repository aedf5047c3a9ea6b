use std::env;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::console::style;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "git-branch-sweep")]
#[command(
    about = "Pick local git branches from a checklist and force-delete them; the current branch is never offered",
    version
)]
struct Cli {}

fn run() -> Result<i32> {
    let cwd = env::current_dir().context("failed to read the current directory")?;
    commands::git_sweep::run(&cwd)
}

fn main() {
    let _cli = Cli::parse();
    logging::init();

    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("{} {err:#}", style("Error:").red().bold());
            process::exit(1);
        }
    }
}
