//! Folder tree scanning and flattening.
//!
//! The scan side of the application is UI-free: [`scan`] walks a root
//! directory into a [`FolderTree`], and [`flatten`] turns that tree into
//! the ordered path list the folder selector is populated with.

mod flatten;
mod scanner;
mod tree;

pub use flatten::flatten;
pub use scanner::scan;
pub use tree::FolderTree;
