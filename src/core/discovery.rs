//! Locate the timing-log files of a directory.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Return the full paths of the regular files in `dir` whose name ends with `suffix`.
///
/// Order is whatever the directory listing yields; callers sort later.
pub fn discover(dir: &Path, suffix: &str) -> AppResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AppError::InvalidDirectory(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let matches = name.to_str().is_some_and(|n| n.ends_with(suffix));
        if !matches {
            continue;
        }

        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}
