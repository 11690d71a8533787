//! Resolving a folder's unique workbook and its sheet names.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::source::SheetNameSource;
use crate::error::WorkbookError;

/// Prefix Excel gives the lock file it leaves next to an open workbook.
const LOCK_FILE_PREFIX: &str = "~$";

/// Extension identifying a qualifying workbook file.
const WORKBOOK_EXTENSION: &str = ".xlsx";

/// Outcome of resolving a folder's workbook selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkbookResolution {
    /// No folder has been confirmed yet.
    Unselected,

    /// The folder holds zero or more than one qualifying workbook, or the
    /// single candidate could not be read. Rendered as a placeholder with
    /// an empty sheet list; this is a defined state, not an error.
    NoUniqueWorkbook,

    /// Exactly one qualifying workbook, with its ordered sheet names.
    Workbook {
        file_name: String,
        sheets: Vec<String>,
    },
}

impl WorkbookResolution {
    /// Sheet names to populate the sheet selector with.
    pub fn sheets(&self) -> &[String] {
        match self {
            WorkbookResolution::Workbook { sheets, .. } => sheets,
            _ => &[],
        }
    }
}

/// Check whether `name` names a qualifying workbook file.
///
/// The `.xlsx` suffix is matched case-sensitively and `~$` lock files are
/// excluded.
pub fn is_qualifying_name(name: &str) -> bool {
    name.ends_with(WORKBOOK_EXTENSION) && !name.starts_with(LOCK_FILE_PREFIX)
}

/// Resolve the workbook selection for `folder`.
///
/// Stateless: every call lists the folder from disk. Exactly one qualifying
/// file yields [`WorkbookResolution::Workbook`]; zero or several yield
/// [`WorkbookResolution::NoUniqueWorkbook`]. Listing and sheet-read
/// failures are absorbed into `NoUniqueWorkbook` with a warning and never
/// propagate to the caller.
pub fn resolve_workbook<S: SheetNameSource>(folder: &Path, source: &S) -> WorkbookResolution {
    let candidates = match qualifying_files(folder) {
        Ok(candidates) => candidates,
        Err(err) => {
            warn!(error = %err, "workbook resolution failed");
            return WorkbookResolution::NoUniqueWorkbook;
        }
    };

    let [path] = candidates.as_slice() else {
        debug!(
            folder = %folder.display(),
            count = candidates.len(),
            "no unique workbook in folder"
        );
        return WorkbookResolution::NoUniqueWorkbook;
    };

    match source.sheet_names(path) {
        Ok(sheets) => {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            debug!(workbook = %file_name, sheets = sheets.len(), "workbook resolved");
            WorkbookResolution::Workbook { file_name, sheets }
        }
        Err(err) => {
            warn!(error = %err, "failed to read sheet names");
            WorkbookResolution::NoUniqueWorkbook
        }
    }
}

/// List the qualifying workbook files in `folder`, in name order.
fn qualifying_files(folder: &Path) -> Result<Vec<PathBuf>, WorkbookError> {
    let list_err = |source| WorkbookError::ListFolder {
        path: folder.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(folder).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        if !entry.file_type().map_err(list_err)?.is_file() {
            continue;
        }
        if is_qualifying_name(&entry.file_name().to_string_lossy()) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualifying_name_accepts_plain_xlsx() {
        assert!(is_qualifying_name("report.xlsx"));
    }

    #[test]
    fn test_qualifying_name_rejects_lock_files() {
        assert!(!is_qualifying_name("~$report.xlsx"));
    }

    #[test]
    fn test_qualifying_name_rejects_other_extensions() {
        assert!(!is_qualifying_name("report.csv"));
        assert!(!is_qualifying_name("report.xls"));
        assert!(!is_qualifying_name("xlsx"));
    }

    #[test]
    fn test_qualifying_name_is_case_sensitive() {
        // Matches the original behavior: only the lowercase extension
        // qualifies.
        assert!(!is_qualifying_name("report.XLSX"));
    }

    #[test]
    fn test_sheets_accessor_empty_unless_resolved() {
        assert!(WorkbookResolution::Unselected.sheets().is_empty());
        assert!(WorkbookResolution::NoUniqueWorkbook.sheets().is_empty());

        let resolved = WorkbookResolution::Workbook {
            file_name: "report.xlsx".to_string(),
            sheets: vec!["Summary".to_string(), "Data".to_string()],
        };
        assert_eq!(resolved.sheets().len(), 2);
    }
}
