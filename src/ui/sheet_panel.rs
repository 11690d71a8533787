//! Workbook panel rendering.
//!
//! Shows the resolved workbook file name (or a placeholder) followed by
//! the sheet selector for the confirmed folder.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::state::SheetListState;
use crate::workbook::WorkbookResolution;

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};
use super::{border_color, truncate_label};

/// Render the workbook panel.
pub(super) fn render_sheet_panel<S>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Workbook Sheets ")
        .border_style(Style::default().fg(border_color(app.focus, Focus::Sheets)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = build_sheet_lines(&app.sheets, inner.width as usize);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Build the display lines: workbook header first, then the sheet list.
fn build_sheet_lines(state: &SheetListState, available_width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();

    match &state.resolution {
        WorkbookResolution::Unselected => {
            lines.push(header_line("Workbook: ", "select a folder above", COLOR_DIM));
        }
        WorkbookResolution::NoUniqueWorkbook => {
            lines.push(header_line(
                "Workbook: ",
                "none (or multiple files)",
                COLOR_DIM,
            ));
        }
        WorkbookResolution::Workbook { file_name, .. } => {
            let name = truncate_label(file_name, available_width.saturating_sub(12).max(1));
            lines.push(header_line("Workbook: ", &name, COLOR_HEADER));
        }
    }

    if state.has_more_above() {
        lines.push(Line::from(Span::styled(
            format!("  + {} more above", state.scroll_offset),
            Style::default().fg(COLOR_DIM),
        )));
    }

    for (rel_idx, sheet) in state.visible_sheets().iter().enumerate() {
        let abs_idx = state.scroll_offset + rel_idx;
        lines.push(render_sheet_line(
            sheet,
            abs_idx == state.selected_index,
            available_width,
        ));
    }

    if state.has_more_below() {
        let remaining = state.sheets().len() - (state.scroll_offset + state.visible_sheets().len());
        lines.push(Line::from(Span::styled(
            format!("  + {} more below", remaining),
            Style::default().fg(COLOR_DIM),
        )));
    }

    lines
}

fn header_line(
    label: &str,
    value: &str,
    value_color: ratatui::style::Color,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {}", label),
            Style::default().fg(COLOR_DIM),
        ),
        Span::styled(value.to_string(), Style::default().fg(value_color)),
    ])
}

fn render_sheet_line(sheet: &str, is_cursor: bool, available_width: usize) -> Line<'static> {
    let marker = if is_cursor { "❯ " } else { "  " };
    let marker_style = if is_cursor {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let name_style = if is_cursor {
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let name = truncate_label(sheet, available_width.saturating_sub(4).max(1));

    Line::from(vec![
        Span::raw("  "),
        Span::styled(marker.to_string(), marker_style),
        Span::styled(name, name_style),
    ])
}
