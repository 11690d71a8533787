//! Workbook discovery and the spreadsheet collaborator seam.
//!
//! The resolver decides which workbook (if any) a folder selects; the
//! [`SheetNameSource`] trait is the boundary to the spreadsheet library so
//! tests can substitute an in-memory stub.

mod resolver;
mod source;

pub use resolver::{is_qualifying_name, resolve_workbook, WorkbookResolution};
pub use source::{CalamineSheetSource, SheetNameSource};
