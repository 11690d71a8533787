//! The folder tree data model.
//!
//! A `FolderTree` maps folder names to their own subtrees; a parent owns
//! its children exclusively. Children are kept in a `BTreeMap`, so sibling
//! order is always sorted by name regardless of the order the filesystem
//! returned entries in.

use std::collections::BTreeMap;

/// A directory hierarchy with the root left implicit.
///
/// Constructed once per scan and immutable afterwards; the root path
/// travels alongside the tree, not inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderTree {
    children: BTreeMap<String, FolderTree>,
}

impl FolderTree {
    /// Create an empty tree (a leaf folder).
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a child subtree under `name`.
    ///
    /// Sibling names are unique by construction when built from a
    /// directory listing, so replacement only happens in hand-built trees.
    pub fn insert(&mut self, name: impl Into<String>, subtree: FolderTree) {
        self.children.insert(name.into(), subtree);
    }

    /// Iterate over `(name, subtree)` pairs in name order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &FolderTree)> {
        self.children.iter().map(|(name, sub)| (name.as_str(), sub))
    }

    /// Look up an immediate child by name.
    pub fn get(&self, name: &str) -> Option<&FolderTree> {
        self.children.get(name)
    }

    /// True for leaf folders.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of immediate children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Total number of folders in the tree, the implicit root excluded.
    pub fn total_count(&self) -> usize {
        self.children
            .values()
            .map(|sub| 1 + sub.total_count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> FolderTree {
        // {"A": {"B": {}}, "C": {}}
        let mut a = FolderTree::new();
        a.insert("B", FolderTree::new());

        let mut tree = FolderTree::new();
        tree.insert("A", a);
        tree.insert("C", FolderTree::new());
        tree
    }

    #[test]
    fn test_empty_tree() {
        let tree = FolderTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.child_count(), 0);
        assert_eq!(tree.total_count(), 0);
    }

    #[test]
    fn test_total_count_includes_nested_folders() {
        let tree = sample_tree();
        assert_eq!(tree.child_count(), 2);
        assert_eq!(tree.total_count(), 3);
    }

    #[test]
    fn test_children_iterate_in_name_order() {
        let mut tree = FolderTree::new();
        tree.insert("zeta", FolderTree::new());
        tree.insert("alpha", FolderTree::new());
        tree.insert("mid", FolderTree::new());

        let names: Vec<&str> = tree.children().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_get_child() {
        let tree = sample_tree();
        let a = tree.get("A").expect("A exists");
        assert!(a.get("B").is_some());
        assert!(tree.get("B").is_none());
    }
}
