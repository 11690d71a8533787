//! Application state and key dispatch.
//!
//! `App` owns both selector states and the sheet-name source. Key events
//! map to state methods; Enter on the folder list is the folder-selected
//! boundary that reruns workbook resolution for the confirmed path.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::scan::{flatten, FolderTree};
use crate::state::{FolderListState, SheetListState};
use crate::workbook::{resolve_workbook, SheetNameSource};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Folders,
    Sheets,
}

/// Top-level application state.
pub struct App<S> {
    /// The scan root the folder list is anchored at.
    pub root: PathBuf,

    /// Folder selector state.
    pub folders: FolderListState,

    /// Sheet selector state for the confirmed folder.
    pub sheets: SheetListState,

    /// Panel receiving navigation keys.
    pub focus: Focus,

    /// Set when the user asks to quit; the event loop exits on the next
    /// iteration.
    pub should_quit: bool,

    sheet_source: S,
}

impl<S: SheetNameSource> App<S> {
    /// Build the application from a scanned tree.
    ///
    /// The tree is flattened once here; it is never rescanned during the
    /// process lifetime.
    pub fn new(root: PathBuf, tree: &FolderTree, sheet_source: S) -> Self {
        let paths = flatten(tree, &root);
        Self {
            folders: FolderListState::from_paths(&root, paths),
            sheets: SheetListState::new(),
            focus: Focus::Folders,
            should_quit: false,
            root,
            sheet_source,
        }
    }

    /// Dispatch a key event to the focused panel.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Enter => self.confirm_folder(),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Folders => Focus::Sheets,
            Focus::Sheets => Focus::Folders,
        };
    }

    fn move_up(&mut self) {
        match self.focus {
            Focus::Folders => self.folders.move_up(),
            Focus::Sheets => self.sheets.move_up(),
        }
    }

    fn move_down(&mut self) {
        match self.focus {
            Focus::Folders => self.folders.move_down(),
            Focus::Sheets => self.sheets.move_down(),
        }
    }

    /// Confirm the folder under the cursor and rerun workbook resolution.
    ///
    /// Enter in the sheet panel is a no-op: the sheet selector has nothing
    /// downstream of it in the current scope.
    fn confirm_folder(&mut self) {
        if self.focus != Focus::Folders {
            return;
        }
        let Some(path) = self.folders.selected_item().map(|item| item.path.clone()) else {
            return;
        };
        debug!(folder = %path.display(), "folder confirmed");
        self.folders.confirm();
        let resolution = resolve_workbook(&path, &self.sheet_source);
        self.sheets.set_resolution(resolution);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkbookError;
    use crate::workbook::WorkbookResolution;
    use std::fs::File;
    use std::path::Path;
    use tempfile::tempdir;

    struct StubSource {
        sheets: Vec<String>,
    }

    impl SheetNameSource for StubSource {
        fn sheet_names(&self, _path: &Path) -> Result<Vec<String>, WorkbookError> {
            Ok(self.sheets.clone())
        }
    }

    fn stub() -> StubSource {
        StubSource {
            sheets: vec!["Summary".to_string(), "Data".to_string()],
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, crossterm::event::KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let dir = tempdir().unwrap();
        let tree = crate::scan::scan(dir.path()).unwrap();
        let mut app = App::new(dir.path().to_path_buf(), &tree, stub());

        assert!(!app.should_quit);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_toggles_focus() {
        let dir = tempdir().unwrap();
        let tree = crate::scan::scan(dir.path()).unwrap();
        let mut app = App::new(dir.path().to_path_buf(), &tree, stub());

        assert_eq!(app.focus, Focus::Folders);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Sheets);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Folders);
    }

    #[test]
    fn test_enter_resolves_workbook_for_selected_folder() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        File::create(dir.path().join("data/report.xlsx")).unwrap();

        let tree = crate::scan::scan(dir.path()).unwrap();
        let mut app = App::new(dir.path().to_path_buf(), &tree, stub());

        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.folders.confirmed_index, Some(0));
        match &app.sheets.resolution {
            WorkbookResolution::Workbook { file_name, sheets } => {
                assert_eq!(file_name, "report.xlsx");
                assert_eq!(sheets, &["Summary".to_string(), "Data".to_string()]);
            }
            other => panic!("expected Workbook, got {:?}", other),
        }
    }

    #[test]
    fn test_enter_on_folder_without_workbook() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("empty")).unwrap();

        let tree = crate::scan::scan(dir.path()).unwrap();
        let mut app = App::new(dir.path().to_path_buf(), &tree, stub());

        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.sheets.resolution, WorkbookResolution::NoUniqueWorkbook);
    }

    #[test]
    fn test_enter_in_sheet_panel_does_not_reconfirm() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();

        let tree = crate::scan::scan(dir.path()).unwrap();
        let mut app = App::new(dir.path().to_path_buf(), &tree, stub());

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.folders.confirmed_index, None);
        assert_eq!(app.sheets.resolution, WorkbookResolution::Unselected);
    }

    #[test]
    fn test_enter_on_empty_tree_is_noop() {
        let dir = tempdir().unwrap();
        let tree = crate::scan::scan(dir.path()).unwrap();
        let mut app = App::new(dir.path().to_path_buf(), &tree, stub());

        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.folders.confirmed_index, None);
        assert_eq!(app.sheets.resolution, WorkbookResolution::Unselected);
    }
}
