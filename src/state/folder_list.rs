//! Folder selector state.
//!
//! Tracks the cursor and scroll window over the flattened folder list.
//! The confirmed entry (Enter) is kept separately from the cursor so the
//! workbook panel keeps showing the last confirmed folder while the cursor
//! moves.

use std::path::{Path, PathBuf};

/// Maximum visible rows in the folder selector viewport.
pub const MAX_VISIBLE_ROWS: usize = 10;

/// A single selectable folder entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderItem {
    /// Full path: the scan root joined with the relative subpath.
    pub path: PathBuf,
    /// Folder name, the last path component.
    pub name: String,
    /// Depth below the scan root, starting at 1 for direct children.
    pub depth: usize,
}

impl FolderItem {
    /// Build an item from a flattened path, deriving name and depth
    /// relative to `root`.
    pub fn from_path(root: &Path, path: PathBuf) -> Self {
        let depth = path
            .strip_prefix(root)
            .map(|rel| rel.components().count())
            .unwrap_or(1);
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name, depth }
    }
}

/// Folder selector state.
#[derive(Debug, Clone, Default)]
pub struct FolderListState {
    /// All selectable folders, in flattened (pre-order) display order.
    pub items: Vec<FolderItem>,

    /// Cursor position in `items`.
    pub selected_index: usize,

    /// Scroll offset for the viewport.
    pub scroll_offset: usize,

    /// Index of the entry last confirmed with Enter, if any.
    pub confirmed_index: Option<usize>,
}

impl FolderListState {
    /// Build the selector from flattened paths.
    pub fn from_paths(root: &Path, paths: Vec<PathBuf>) -> Self {
        Self {
            items: paths
                .into_iter()
                .map(|path| FolderItem::from_path(root, path))
                .collect(),
            selected_index: 0,
            scroll_offset: 0,
            confirmed_index: None,
        }
    }

    /// Get the item under the cursor.
    pub fn selected_item(&self) -> Option<&FolderItem> {
        self.items.get(self.selected_index)
    }

    /// Get the last confirmed item.
    pub fn confirmed_item(&self) -> Option<&FolderItem> {
        self.confirmed_index.and_then(|idx| self.items.get(idx))
    }

    /// Mark the entry under the cursor as confirmed.
    pub fn confirm(&mut self) {
        if !self.items.is_empty() {
            self.confirmed_index = Some(self.selected_index);
        }
    }

    /// Move the cursor up.
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.ensure_visible();
        }
    }

    /// Move the cursor down.
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
            self.ensure_visible();
        }
    }

    /// Keep the cursor inside the scroll window.
    fn ensure_visible(&mut self) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
        if self.selected_index >= self.scroll_offset + MAX_VISIBLE_ROWS {
            self.scroll_offset = self.selected_index.saturating_sub(MAX_VISIBLE_ROWS - 1);
        }
    }

    /// Items visible in the current viewport.
    pub fn visible_items(&self) -> &[FolderItem] {
        let start = self.scroll_offset;
        let end = (self.scroll_offset + MAX_VISIBLE_ROWS).min(self.items.len());
        if start < self.items.len() {
            &self.items[start..end]
        } else {
            &[]
        }
    }

    /// Check if there are items above the viewport.
    pub fn has_more_above(&self) -> bool {
        self.scroll_offset > 0
    }

    /// Check if there are items below the viewport.
    pub fn has_more_below(&self) -> bool {
        self.scroll_offset + MAX_VISIBLE_ROWS < self.items.len()
    }

    /// Total number of selectable folders.
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// True when the scan found no subfolders at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_state(count: usize) -> FolderListState {
        let root = Path::new("/root");
        let paths = (0..count)
            .map(|i| root.join(format!("folder{:02}", i)))
            .collect();
        FolderListState::from_paths(root, paths)
    }

    #[test]
    fn test_from_paths_derives_name_and_depth() {
        let root = Path::new("/root");
        let state = FolderListState::from_paths(
            root,
            vec![root.join("A"), root.join("A").join("B")],
        );

        assert_eq!(state.items[0].name, "A");
        assert_eq!(state.items[0].depth, 1);
        assert_eq!(state.items[1].name, "B");
        assert_eq!(state.items[1].depth, 2);
    }

    #[test]
    fn test_cursor_navigation_stays_in_bounds() {
        let mut state = create_test_state(3);

        state.move_up(); // Already at top
        assert_eq!(state.selected_index, 0);

        state.move_down();
        state.move_down();
        state.move_down(); // Should not go past end
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn test_confirm_remembers_cursor_position() {
        let mut state = create_test_state(3);
        state.move_down();
        state.confirm();
        state.move_down();

        assert_eq!(state.selected_index, 2);
        assert_eq!(state.confirmed_index, Some(1));
        assert_eq!(state.confirmed_item().unwrap().name, "folder01");
    }

    #[test]
    fn test_confirm_on_empty_list_is_noop() {
        let mut state = create_test_state(0);
        state.confirm();
        assert_eq!(state.confirmed_index, None);
    }

    #[test]
    fn test_scroll_window_follows_cursor() {
        let mut state = create_test_state(25);

        assert!(!state.has_more_above());
        assert!(state.has_more_below());
        assert_eq!(state.visible_items().len(), MAX_VISIBLE_ROWS);

        for _ in 0..24 {
            state.move_down();
        }

        assert!(state.has_more_above());
        assert!(!state.has_more_below());
        assert_eq!(state.selected_index, 24);
        assert_eq!(state.scroll_offset, 15);
    }

    #[test]
    fn test_visible_items_on_short_list() {
        let state = create_test_state(3);
        assert_eq!(state.visible_items().len(), 3);
        assert!(!state.has_more_above());
        assert!(!state.has_more_below());
    }
}
