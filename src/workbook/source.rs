//! The spreadsheet collaborator boundary.

use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx, XlsxError};

use crate::error::WorkbookError;

/// Read-only, metadata-only access to a workbook's sheet names.
///
/// The production implementation is [`CalamineSheetSource`]; integration
/// tests substitute an in-memory stub so resolution logic can be exercised
/// without real workbook files.
pub trait SheetNameSource {
    /// Return the workbook's sheet names in workbook order.
    fn sheet_names(&self, path: &Path) -> Result<Vec<String>, WorkbookError>;
}

/// [`SheetNameSource`] backed by the calamine xlsx reader.
///
/// The workbook handle lives only for the duration of the call, so the
/// underlying file is released before the sheet names are returned. Sheet
/// names come from workbook metadata; no cell data is loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineSheetSource;

impl SheetNameSource for CalamineSheetSource {
    fn sheet_names(&self, path: &Path) -> Result<Vec<String>, WorkbookError> {
        let workbook: Xlsx<_> = open_workbook(path).map_err(|err: XlsxError| WorkbookError::Open {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Ok(workbook.sheet_names().to_vec())
    }
}
