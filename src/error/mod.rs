//! Error types for sheetnav.
//!
//! Split by domain: scan errors abort startup and are surfaced through
//! `color_eyre` before the TUI takes over the terminal; workbook errors are
//! absorbed by the resolver into the no-selection state and never propagate.

mod scan;
mod workbook;

pub use scan::ScanError;
pub use workbook::WorkbookError;
