//! Errors produced by the spreadsheet collaborator.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failure while locating or opening a workbook.
///
/// These never reach the caller of the resolver: they are logged and
/// collapsed into the no-selection state.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// The workbook file could not be opened or its metadata could not be
    /// parsed. The message comes from the spreadsheet library.
    #[error("failed to open workbook {path}: {message}")]
    Open { path: PathBuf, message: String },

    /// The folder's file listing failed.
    #[error("failed to list folder {path}: {source}")]
    ListFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
