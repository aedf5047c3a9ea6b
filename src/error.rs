use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to list branches: {message}")]
    List { message: String },
    #[error("failed to delete {}: {}", describe_targets(.failures), describe_failures(.failures))]
    Deletion { failures: Vec<DeletionFailure> },
}

/// A single failed force-delete call. Under the batch strategy `branches`
/// holds every name from the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
    pub branches: Vec<String>,
    pub message: String,
}

impl GitError {
    pub fn list(message: impl Into<String>) -> Self {
        GitError::List {
            message: message.into(),
        }
    }
}

fn describe_targets(failures: &[DeletionFailure]) -> String {
    let names: Vec<&str> = failures
        .iter()
        .flat_map(|failure| failure.branches.iter().map(String::as_str))
        .collect();
    names.join(", ")
}

fn describe_failures(failures: &[DeletionFailure]) -> String {
    let messages: Vec<&str> = failures
        .iter()
        .map(|failure| failure.message.as_str())
        .collect();
    messages.join("; ")
}
