//! Rendering for the two-panel screen.
//!
//! The screen is a vertical stack: folder selector on top, workbook panel
//! below, a one-line key hint at the bottom. Render functions are pure:
//! they read the `App` state and draw, nothing else.

mod folder_panel;
mod sheet_panel;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Focus};

use theme::{COLOR_ACCENT, COLOR_DIM};

/// Render the whole screen.
pub fn render<S>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(frame.area());

    folder_panel::render_folder_panel(frame, app, chunks[0]);
    sheet_panel::render_sheet_panel(frame, app, chunks[1]);
    render_hint_line(frame, chunks[2]);
}

/// Build the one-line key hint shown at the bottom of the screen.
fn render_hint_line(frame: &mut Frame, area: Rect) {
    let spans = vec![
        Span::styled("  ", Style::default()),
        Span::styled("↑↓", Style::default().fg(COLOR_ACCENT)),
        Span::styled(" nav", Style::default().fg(COLOR_DIM)),
        Span::styled(" │ ", Style::default().fg(COLOR_DIM)),
        Span::styled("Enter", Style::default().fg(COLOR_ACCENT)),
        Span::styled(" select folder", Style::default().fg(COLOR_DIM)),
        Span::styled(" │ ", Style::default().fg(COLOR_DIM)),
        Span::styled("Tab", Style::default().fg(COLOR_ACCENT)),
        Span::styled(" switch panel", Style::default().fg(COLOR_DIM)),
        Span::styled(" │ ", Style::default().fg(COLOR_DIM)),
        Span::styled("q", Style::default().fg(COLOR_ACCENT)),
        Span::styled(" quit", Style::default().fg(COLOR_DIM)),
    ];
    frame.render_widget(
        ratatui::widgets::Paragraph::new(Line::from(spans)),
        area,
    );
}

/// Truncate `label` to `max_width` display columns, appending an ellipsis
/// when anything was cut.
fn truncate_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in label.chars() {
        let w = ch.width().unwrap_or(0);
        // Leave one column for the ellipsis
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Border color for a panel depending on focus.
fn border_color(focus: Focus, panel: Focus) -> ratatui::style::Color {
    if focus == panel {
        COLOR_ACCENT
    } else {
        theme::COLOR_BORDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label_short_label_unchanged() {
        assert_eq!(truncate_label("reports", 20), "reports");
    }

    #[test]
    fn test_truncate_label_cuts_and_appends_ellipsis() {
        let truncated = truncate_label("a-very-long-folder-name", 10);
        assert!(truncated.ends_with('…'));
        assert!(truncated.width() <= 10);
    }

    #[test]
    fn test_truncate_label_exact_fit() {
        assert_eq!(truncate_label("abcde", 5), "abcde");
    }
}
