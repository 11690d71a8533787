//! Pre-order flattening of a folder tree into full paths.

use std::path::{Path, PathBuf};

use super::tree::FolderTree;

/// Flatten `tree` into full paths rooted at `root`, depth-first pre-order.
///
/// Every folder's path is emitted immediately before the paths of its
/// descendants; sibling subtrees appear in name order. The output length
/// equals `tree.total_count()`. Paths are joined with the host platform's
/// separator via [`Path::join`].
pub fn flatten(tree: &FolderTree, root: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(tree.total_count());
    walk(tree, root, &mut paths);
    paths
}

fn walk(tree: &FolderTree, parent: &Path, paths: &mut Vec<PathBuf>) {
    for (name, subtree) in tree.children() {
        let full = parent.join(name);
        paths.push(full.clone());
        walk(subtree, &full, paths);
    }
}
