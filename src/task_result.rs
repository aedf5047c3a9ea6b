/// How a sweep ended when no fatal error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    NotARepository,
    NothingToDo,
    Cancelled,
    NothingSelected,
    Declined,
    Deleted(Vec<String>),
}

impl TaskResult {
    /// Every non-error path, user aborts included, exits successfully.
    pub fn exit_code(&self) -> i32 {
        0
    }
}
