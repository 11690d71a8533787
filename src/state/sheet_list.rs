//! Sheet selector state.
//!
//! Owns the current [`WorkbookResolution`] and a cursor over its sheet
//! names. Replaced wholesale on every folder confirmation; nothing is
//! cached across selections.

use crate::workbook::WorkbookResolution;

/// Maximum visible rows in the sheet selector viewport.
pub const MAX_VISIBLE_ROWS: usize = 6;

/// Sheet selector state.
#[derive(Debug, Clone)]
pub struct SheetListState {
    /// The current resolution for the confirmed folder.
    pub resolution: WorkbookResolution,

    /// Cursor position in the sheet list.
    pub selected_index: usize,

    /// Scroll offset for the viewport.
    pub scroll_offset: usize,
}

impl Default for SheetListState {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetListState {
    /// Create the initial state, before any folder has been confirmed.
    pub fn new() -> Self {
        Self {
            resolution: WorkbookResolution::Unselected,
            selected_index: 0,
            scroll_offset: 0,
        }
    }

    /// Replace the resolution and reset the cursor to the first sheet.
    pub fn set_resolution(&mut self, resolution: WorkbookResolution) {
        self.resolution = resolution;
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Sheet names of the current resolution (empty unless a workbook was
    /// resolved).
    pub fn sheets(&self) -> &[String] {
        self.resolution.sheets()
    }

    /// Get the sheet name under the cursor.
    pub fn selected_sheet(&self) -> Option<&str> {
        self.sheets().get(self.selected_index).map(String::as_str)
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
        if self.selected_index + 1 < self.sheets().len() {
            self.selected_index += 1;
            self.ensure_visible();
        }
    }

    fn ensure_visible(&mut self) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
        if self.selected_index >= self.scroll_offset + MAX_VISIBLE_ROWS {
            self.scroll_offset = self.selected_index.saturating_sub(MAX_VISIBLE_ROWS - 1);
        }
    }

    /// Sheets visible in the current viewport.
    pub fn visible_sheets(&self) -> &[String] {
        let sheets = self.sheets();
        let start = self.scroll_offset;
        let end = (self.scroll_offset + MAX_VISIBLE_ROWS).min(sheets.len());
        if start < sheets.len() {
            &sheets[start..end]
        } else {
            &[]
        }
    }

    /// Check if there are sheets above the viewport.
    pub fn has_more_above(&self) -> bool {
        self.scroll_offset > 0
    }

    /// Check if there are sheets below the viewport.
    pub fn has_more_below(&self) -> bool {
        self.scroll_offset + MAX_VISIBLE_ROWS < self.sheets().len()
    }
}
