//! Errors produced while scanning the folder tree.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failure while scanning the directory hierarchy.
///
/// All variants carry the offending path. Scan failures are fatal to the
/// scan operation: the caller reports them and does not start the TUI.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist.
    #[error("scan root does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// The scan root exists but is not a directory.
    #[error("scan root is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A directory listing failed for a reason other than missing
    /// permissions (permission-denied subtrees are skipped, not errors).
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// The path the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            ScanError::PathNotFound { path }
            | ScanError::NotADirectory { path }
            | ScanError::ReadDir { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_display_names_the_path() {
        let err = ScanError::PathNotFound {
            path: PathBuf::from("/work/output"),
        };
        let display = format!("{}", err);
        assert!(display.contains("/work/output"));
        assert!(display.contains("does not exist"));
    }

    #[test]
    fn test_read_dir_has_source() {
        use std::error::Error;

        let err = ScanError::ReadDir {
            path: PathBuf::from("/work/output"),
            source: io::Error::new(io::ErrorKind::Other, "disk error"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_path_accessor() {
        let err = ScanError::NotADirectory {
            path: PathBuf::from("/work/file.txt"),
        };
        assert_eq!(err.path(), &PathBuf::from("/work/file.txt"));
    }
}
