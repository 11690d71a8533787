//! Selector state for the two panels.
//!
//! Both selectors follow the same cursor-plus-scroll-window shape; the
//! folder selector also remembers the last confirmed entry so the workbook
//! panel stays pinned while the user keeps browsing.

pub mod folder_list;
pub mod sheet_list;

pub use folder_list::{FolderItem, FolderListState};
pub use sheet_list::SheetListState;
