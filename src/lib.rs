//! Interactive bulk deletion of local git branches.
//!
//! The current branch is never offered for deletion, and nothing is deleted
//! until the user types an explicit "yes".

pub mod error;
pub mod git;
pub mod repository;
pub mod selection;
pub mod sweeper;
pub mod task_result;
pub mod ui;

pub use error::GitError;
pub use git::{Branch, DeleteStrategy, GitRepo};
pub use sweeper::BranchSweeper;
pub use task_result::TaskResult;
