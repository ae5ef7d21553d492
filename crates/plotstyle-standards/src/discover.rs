//! File discovery: git-tracked files or a directory walk.
//!
//! Both return paths relative to the root, with `/` separators, sorted.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Discovery;
use crate::error::{Result, StandardsError};

/// Lists files under `root` using the given strategy.
pub fn discover_files(root: &Path, discovery: Discovery) -> Result<Vec<String>> {
    match discovery {
        Discovery::Git => tracked_files(root),
        Discovery::Walk => walk_files(root),
    }
}

/// Lists the files tracked at `HEAD`.
///
/// Fails with [`StandardsError::NotARepository`] if `root/.git` is missing.
pub fn tracked_files(root: &Path) -> Result<Vec<String>> {
    if !root.join(".git").exists() {
        return Err(StandardsError::NotARepository(root.to_path_buf()));
    }

    let output = Command::new("git")
        .args(["ls-tree", "-z", "-r", "--name-only", "HEAD"])
        .current_dir(root)
        .output()
        .map_err(|e| StandardsError::Git {
            root: root.to_path_buf(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(StandardsError::Git {
            root: root.to_path_buf(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let mut files: Vec<String> = output
        .stdout
        .split(|b| *b == 0)
        .filter(|name| !name.is_empty())
        .map(|name| String::from_utf8_lossy(name).into_owned())
        .collect();
    files.sort();
    Ok(files)
}

/// Lists every regular file below `root`, skipping `.git`.
///
/// Symbolic links are not followed, neither to files nor to directories.
pub fn walk_files(root: &Path) -> Result<Vec<String>> {
    let root_canonical = root.canonicalize().map_err(|source| StandardsError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    walk_dir_recursive(&root_canonical, &root_canonical, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk_dir_recursive(current: &Path, root: &Path, files: &mut Vec<String>) -> Result<()> {
    let io_err = |path: &Path| {
        let path: PathBuf = path.to_path_buf();
        move |source: std::io::Error| StandardsError::Io { path, source }
    };

    let entries = std::fs::read_dir(current).map_err(io_err(current))?;

    for entry in entries {
        let entry = entry.map_err(io_err(current))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(io_err(&path))?;

        if file_type.is_symlink() {
            tracing::trace!(path = %path.display(), "skipping symlink");
            continue;
        }
        if file_type.is_dir() {
            if entry.file_name() == ".git" {
                continue;
            }
            walk_dir_recursive(&path, root, files)?;
        } else if file_type.is_file() {
            if let Ok(relative) = path.strip_prefix(root) {
                files.push(
                    relative
                        .to_string_lossy()
                        .replace(std::path::MAIN_SEPARATOR, "/"),
                );
            }
        }
    }

    Ok(())
}
