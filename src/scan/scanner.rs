//! Recursive directory scanning.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use super::tree::FolderTree;
use crate::error::ScanError;

/// Scan the directory hierarchy rooted at `root`.
///
/// Only directories are recorded; regular files are ignored entirely.
/// Symlinks are not followed, so a symlinked directory appears in neither
/// the tree nor the flattened list and cannot introduce a cycle.
///
/// A subdirectory that cannot be listed due to missing permissions stays in
/// the tree as a leaf and is skipped with a warning. Any other I/O failure
/// aborts the whole scan.
///
/// # Errors
///
/// * [`ScanError::PathNotFound`] when `root` does not exist.
/// * [`ScanError::NotADirectory`] when `root` is not a directory.
/// * [`ScanError::ReadDir`] for non-permission listing failures.
pub fn scan(root: &Path) -> Result<FolderTree, ScanError> {
    if !root.exists() {
        return Err(ScanError::PathNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    build(root)
}

fn build(path: &Path) -> Result<FolderTree, ScanError> {
    let mut tree = FolderTree::new();

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            warn!(path = %path.display(), "skipping unreadable directory");
            return Ok(tree);
        }
        Err(source) => {
            return Err(ScanError::ReadDir {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    for entry in entries {
        let entry = entry.map_err(|source| ScanError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type().map_err(|source| ScanError::ReadDir {
            path: entry.path(),
            source,
        })?;
        // DirEntry::file_type does not follow symlinks.
        if file_type.is_dir() {
            let name = entry.file_name().to_string_lossy().into_owned();
            tree.insert(name, build(&entry.path())?);
        }
    }

    Ok(tree)
}
