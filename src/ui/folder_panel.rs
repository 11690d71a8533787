//! Folder selector panel rendering.
//!
//! Draws the flattened folder list with depth indentation, a cursor
//! marker, scroll indicators and a check mark on the confirmed entry.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::state::FolderItem;
use crate::state::FolderListState;

use super::theme::{COLOR_ACCENT, COLOR_CONFIRMED, COLOR_DIM, COLOR_HEADER};
use super::{border_color, truncate_label};

/// Render the folder selector panel.
pub(super) fn render_folder_panel<S>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Folder Structure ")
        .border_style(Style::default().fg(border_color(app.focus, Focus::Folders)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = build_folder_lines(&app.folders, inner.width as usize);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Build the display lines for the folder list.
fn build_folder_lines(state: &FolderListState, available_width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();

    if state.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No subfolders under the scan root",
            Style::default().fg(COLOR_DIM),
        )));
        return lines;
    }

    if state.has_more_above() {
        lines.push(Line::from(Span::styled(
            format!("  + {} more above", state.scroll_offset),
            Style::default().fg(COLOR_DIM),
        )));
    }

    for (rel_idx, item) in state.visible_items().iter().enumerate() {
        let abs_idx = state.scroll_offset + rel_idx;
        lines.push(render_folder_line(
            item,
            abs_idx == state.selected_index,
            state.confirmed_index == Some(abs_idx),
            available_width,
        ));
    }

    if state.has_more_below() {
        let remaining = state.total_items() - (state.scroll_offset + state.visible_items().len());
        lines.push(Line::from(Span::styled(
            format!("  + {} more below", remaining),
            Style::default().fg(COLOR_DIM),
        )));
    }

    lines
}

/// Render a single folder line with depth indentation.
fn render_folder_line(
    item: &FolderItem,
    is_cursor: bool,
    is_confirmed: bool,
    available_width: usize,
) -> Line<'static> {
    let marker = if is_cursor { "❯ " } else { "  " };
    let marker_style = if is_cursor {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let indent = "  ".repeat(item.depth.saturating_sub(1));

    let name_style = if is_cursor {
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };

    // Room left for the name after marker, indent and check mark.
    let reserved = 2 + indent.len() + if is_confirmed { 2 } else { 0 };
    let name = truncate_label(
        &format!("{}/", item.name),
        available_width.saturating_sub(reserved).max(1),
    );

    let mut spans = vec![
        Span::styled(marker.to_string(), marker_style),
        Span::raw(indent),
        Span::styled(name, name_style),
    ];

    if is_confirmed {
        spans.push(Span::styled(
            " ✓",
            Style::default().fg(COLOR_CONFIRMED).add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}
