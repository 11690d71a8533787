//! Terminal setup and teardown.
//!
//! Low-level helpers for entering and leaving TUI mode, used by
//! `TerminalManager` and by the panic hook.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode: switch to the alternate screen so the user's terminal
/// content is preserved.
///
/// # Errors
///
/// Returns an error if the terminal command fails.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)
}

/// Leave TUI mode and restore the terminal to its normal state.
///
/// Safe to call multiple times; all errors are ignored so this can run
/// from the panic path.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore the terminal after a panic or error, ignoring all failures.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
