use std::path::{Path, PathBuf};

const METADATA_DIR: &str = ".git";

/// Walks from `start` up to the filesystem root looking for `.git`.
/// Linked worktrees carry a `.git` file rather than a directory, so any
/// entry counts.
pub fn find_repository_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(METADATA_DIR).exists())
        .map(Path::to_path_buf)
}

pub fn locate_repository(start: &Path) -> bool {
    find_repository_root(start).is_some()
}
