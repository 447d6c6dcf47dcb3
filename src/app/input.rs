use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message, Model};
use crate::editor::Direction;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Resize(width, height) => Some(Message::Resize(*width, *height)),
            _ => None,
        }
    }

    fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        // Overlays swallow all input while visible.
        if model.help_visible {
            return Some(Message::HideHelp);
        }
        if model.recent_picker_open() {
            return Some(match key.code {
                KeyCode::Up | KeyCode::Char('k') => Message::RecentUp,
                KeyCode::Down | KeyCode::Char('j') => Message::RecentDown,
                KeyCode::Enter => Message::OpenRecent(model.recent_selected?),
                KeyCode::Char('c') => Message::ClearRecent,
                _ => Message::CloseRecent,
            });
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('q') => Some(Message::Quit),
                KeyCode::Char('o') => Some(Message::Open),
                // Ctrl+Shift+S arrives as an uppercase char with both modifiers.
                KeyCode::Char('s' | 'S') if key.modifiers.contains(KeyModifiers::SHIFT) => {
                    Some(Message::SaveAs)
                }
                KeyCode::Char('s') => Some(Message::Save),
                KeyCode::Char('a') => Some(Message::SaveAs),
                KeyCode::Char('w') => Some(Message::CloseFile),
                KeyCode::Char('r') => Some(Message::ToggleRecent),
                KeyCode::Char('p') => Some(Message::TogglePreview),
                KeyCode::Home => Some(Message::MoveToStart),
                KeyCode::End => Some(Message::MoveToEnd),
                KeyCode::Left => Some(Message::MoveWordLeft),
                KeyCode::Right => Some(Message::MoveWordRight),
                _ => None,
            };
        }

        match key.code {
            KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::Enter => Some(Message::SplitLine),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::Tab => Some(Message::InsertTab),
            KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Home => Some(Message::MoveHome),
            KeyCode::End => Some(Message::MoveEnd),
            KeyCode::PageUp => Some(Message::ScrollUp(model.editor_visible_height())),
            KeyCode::PageDown => Some(Message::ScrollDown(model.editor_visible_height())),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Message::InsertChar(c))
            }
            _ => None,
        }
    }
}
