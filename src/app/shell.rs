//! Terminal implementation of the session's interactive prompts.
//!
//! Each prompt runs its own small blocking event loop that repaints a
//! centered popup until the user answers. The main event loop is parked
//! inside the session call for the duration, which is exactly the
//! blocking semantics the session expects.

use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::session::{DiscardChoice, Shell};
use crate::ui;

pub(super) struct TermShell<'a> {
    terminal: &'a mut DefaultTerminal,
}

impl<'a> TermShell<'a> {
    pub(super) fn new(terminal: &'a mut DefaultTerminal) -> Self {
        Self { terminal }
    }

    /// Blocking single-line text prompt.
    ///
    /// Returns `None` on Esc, an empty submission, or a terminal failure
    /// (a prompt that cannot be drawn cannot be answered).
    fn prompt_line(&mut self, title: &str, hint: &str) -> Option<String> {
        let mut input = String::new();
        loop {
            if let Err(err) = self
                .terminal
                .draw(|frame| ui::render_prompt_overlay(frame, title, &input, hint))
            {
                tracing::warn!(%err, "prompt draw failed");
                return None;
            }
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Esc => return None,
                    KeyCode::Enter => {
                        let trimmed = input.trim();
                        if trimmed.is_empty() {
                            return None;
                        }
                        return Some(trimmed.to_string());
                    }
                    KeyCode::Backspace => {
                        input.pop();
                    }
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.push(c);
                    }
                    _ => {}
                },
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(%err, "prompt input failed");
                    return None;
                }
            }
        }
    }
}

impl Shell for TermShell<'_> {
    fn prompt_open_path(&mut self) -> Option<PathBuf> {
        self.prompt_line("Open File", "Path to a markdown file")
            .map(PathBuf::from)
    }

    fn prompt_save_path(&mut self) -> Option<PathBuf> {
        self.prompt_line("Save As", ".md is added when no extension is given")
            .map(save_path_from)
    }

    fn confirm_discard(&mut self) -> DiscardChoice {
        loop {
            if let Err(err) = self.terminal.draw(ui::render_discard_overlay) {
                tracing::warn!(%err, "confirm draw failed");
                return DiscardChoice::Cancel;
            }
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Char('s' | 'S') | KeyCode::Enter => return DiscardChoice::Save,
                    KeyCode::Char('d' | 'D') => return DiscardChoice::Discard,
                    KeyCode::Char('c' | 'C') | KeyCode::Esc => return DiscardChoice::Cancel,
                    _ => {}
                },
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(%err, "confirm input failed");
                    return DiscardChoice::Cancel;
                }
            }
        }
    }
}

/// Turn a submitted save name into a path, defaulting the extension to `.md`.
fn save_path_from(input: String) -> PathBuf {
    let path = PathBuf::from(input);
    if path.extension().is_none() {
        path.with_extension("md")
    } else {
        path
    }
}
