use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

pub fn render_recent_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let entries = model.session.recent();
    if entries.is_empty() {
        return;
    }
    let popup_width = area.width.saturating_sub(16).max(44);
    // The list is bounded at ten entries
    #[allow(clippy::cast_possible_truncation)]
    let needed_rows = entries.len() as u16 + 6;
    let popup_height = needed_rows.min(area.height.saturating_sub(4).max(8));
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let mut lines: Vec<Line> = Vec::new();
    for (idx, path) in entries.iter().enumerate() {
        let selected = model.recent_selected == Some(idx);
        let marker = if selected { ">" } else { " " };
        let style = if selected {
            Style::default().reversed()
        } else {
            Style::default()
        };
        lines.push(Line::styled(
            format!(" {} {}", marker, path.display()),
            style,
        ));
    }
    lines.push(Line::raw(" "));
    lines.push(Line::styled(
        " Enter open · c clear list · Esc closes",
        Style::default().fg(Color::Indexed(245)),
    ));

    let block = Block::default()
        .title("Recent Files")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(6).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("Files", section_style));
    lines.push(Line::raw("  Ctrl+O              Open file"));
    lines.push(Line::raw("  Ctrl+S              Save"));
    lines.push(Line::raw("  Ctrl+A / Ctrl+Shift+S  Save as"));
    lines.push(Line::raw("  Ctrl+W              Close file"));
    lines.push(Line::raw("  Ctrl+R              Recent files"));
    lines.push(Line::raw("  Ctrl+Q              Exit"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Editing", section_style));
    lines.push(Line::raw("  Arrows, Home/End    Navigate"));
    lines.push(Line::raw("  Ctrl+Left/Right     Word movement"));
    lines.push(Line::raw("  Ctrl+Home/End       Document start / end"));
    lines.push(Line::raw("  PageUp/PageDown     Scroll editor"));
    lines.push(Line::raw("  Tab                 Insert four spaces"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Panes", section_style));
    lines.push(Line::raw("  Ctrl+P              Toggle HTML preview"));
    lines.push(Line::raw("  F1                  Toggle help"));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // Inner area: border(1) + padding(1) on each side = 4
    let inner = Rect::new(
        popup.x + 2,
        popup.y + 2,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(4),
    );

    // Reserve 1 row at bottom for footer hint
    let content_height = inner.height.saturating_sub(1);
    let end = (content_height as usize).min(lines.len());
    let content_area = Rect::new(inner.x, inner.y, inner.width, content_height);
    frame.render_widget(Paragraph::new(lines[..end].to_vec()), content_area);

    let footer_area = Rect::new(inner.x, inner.y + content_height, inner.width, 1);
    let footer = Line::styled("any key closes", dim_style);
    frame.render_widget(Paragraph::new(footer), footer_area);
}

/// Single-line input popup used by the open/save prompts.
pub fn render_prompt_overlay(frame: &mut Frame, title: &str, input: &str, hint: &str) {
    let area = frame.area();
    let popup_width = area.width.saturating_sub(16).max(44);
    let popup = centered_popup_rect(popup_width, 7, area);

    let lines = vec![
        Line::from(vec![
            Span::raw("> "),
            Span::raw(input.to_string()),
            Span::styled("\u{2588}", Style::default().fg(Color::White)),
        ]),
        Line::raw(" "),
        Line::styled(
            format!("{hint} · Enter confirms · Esc cancels"),
            Style::default().fg(Color::Indexed(245)),
        ),
    ];

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Unsaved-changes confirmation popup.
pub fn render_discard_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_width = area.width.saturating_sub(20).clamp(40, 56);
    let popup = centered_popup_rect(popup_width, 7, area);

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::raw("The document has unsaved changes."),
        Line::raw(" "),
        Line::from(vec![
            Span::styled("S", key_style),
            Span::raw("ave   "),
            Span::styled("D", key_style),
            Span::raw("iscard   "),
            Span::styled("C", key_style),
            Span::raw("ancel (Esc)"),
        ]),
    ];

    let block = Block::default()
        .title("Unsaved Changes")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
