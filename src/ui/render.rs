use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::Model;

use super::{EDITOR_WIDTH_PERCENT, PREVIEW_WIDTH_PERCENT, overlays, status};

pub fn split_main_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(EDITOR_WIDTH_PERCENT),
            Constraint::Percentage(PREVIEW_WIDTH_PERCENT),
        ])
        .split(area)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();

    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(toast_active);
    // Reserve the last line for the status bar, plus one for an active toast.
    let main_area = Rect {
        height: area.height.saturating_sub(footer_rows),
        ..area
    };
    let toast_area = Rect {
        y: area.y + area.height.saturating_sub(1 + u16::from(toast_active)),
        height: 1,
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    if model.preview_visible {
        let chunks = split_main_columns(main_area);
        render_editor(model, frame, chunks[0]);
        render_preview(model, frame, chunks[1]);
    } else {
        render_editor(model, frame, main_area);
    }

    if toast_active {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, status_area);

    if model.help_visible {
        overlays::render_help_overlay(frame, area);
    } else if model.recent_picker_open() {
        overlays::render_recent_overlay(model, frame, area);
    }
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect) {
    let buf = &model.buffer;
    let total_lines = buf.line_count();
    let gutter_width = line_number_width(total_lines);

    let visible_height = area.height as usize;
    let start = model.editor_scroll_offset;
    let end = (start + visible_height).min(total_lines);
    let cursor = buf.cursor();

    let mut content: Vec<Line> = Vec::new();
    for line_idx in start..end {
        let line_text = buf.line_at(line_idx).unwrap_or_default();
        let line_num = format!("{:>width$} ", line_idx + 1, width = gutter_width as usize);

        let mut spans = vec![Span::styled(line_num, Style::default().fg(Color::DarkGray))];

        if line_idx == cursor.line {
            let (before, cursor_char, after) = split_at_cursor(&line_text, cursor.col);
            if !before.is_empty() {
                spans.push(Span::raw(before));
            }
            spans.push(Span::styled(
                cursor_char,
                Style::default().bg(Color::White).fg(Color::Black),
            ));
            if !after.is_empty() {
                spans.push(Span::raw(after));
            }
        } else {
            spans.push(Span::raw(line_text));
        }

        content.push(Line::from(spans));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);
}

fn render_preview(model: &Model, frame: &mut Frame, area: Rect) {
    let html = model.session.document().html();
    let total_lines = html.lines().count();
    // Two rows go to the block border.
    let visible_height = area.height.saturating_sub(2) as usize;
    let scroll = preview_scroll(
        model.buffer.cursor().line,
        model.buffer.line_count(),
        total_lines,
        visible_height,
    );

    let content: Vec<Line> = html
        .lines()
        .skip(scroll)
        .take(visible_height)
        .map(|line| Line::raw(line.to_string()))
        .collect();

    let block = Block::default()
        .title(" HTML Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Split a line into text before the cursor, the character under it,
/// and the rest. The cursor cell falls back to a space past end of line.
fn split_at_cursor(line: &str, col: usize) -> (String, String, String) {
    let mut chars = line.chars();
    let before: String = chars.by_ref().take(col).collect();
    let cursor_char = chars.next().map_or_else(|| " ".to_string(), String::from);
    let after: String = chars.collect();
    (before, cursor_char, after)
}

/// Keep the preview roughly aligned with the cursor's relative position
/// in the source.
fn preview_scroll(
    cursor_line: usize,
    source_lines: usize,
    html_lines: usize,
    visible_height: usize,
) -> usize {
    let max_scroll = html_lines.saturating_sub(visible_height);
    if max_scroll == 0 || source_lines <= 1 {
        return 0;
    }
    max_scroll * cursor_line / (source_lines - 1)
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}
