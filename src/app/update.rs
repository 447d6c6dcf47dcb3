//! Pure state transitions.

use crate::editor::Direction;

use super::{Model, ToastLevel};

/// All possible events and actions.
///
/// File-lifecycle messages ([`Message::Open`], [`Message::Save`], ...)
/// carry no state change of their own; their blocking work runs in the
/// side-effect handler after [`update`] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    InsertChar(char),
    InsertTab,
    SplitLine,
    DeleteBack,
    DeleteForward,
    // Cursor movement
    MoveCursor(Direction),
    MoveHome,
    MoveEnd,
    MoveWordLeft,
    MoveWordRight,
    MoveToStart,
    MoveToEnd,
    ScrollUp(usize),
    ScrollDown(usize),
    // File lifecycle
    Open,
    Save,
    SaveAs,
    CloseFile,
    Quit,
    // Recent files
    ToggleRecent,
    RecentUp,
    RecentDown,
    CloseRecent,
    OpenRecent(usize),
    ClearRecent,
    // Panes and overlays
    TogglePreview,
    ToggleHelp,
    HideHelp,
    // Terminal
    Resize(u16, u16),
}

/// Tab inserts spaces so the preview and editor agree on layout.
const TAB_SPACES: &str = "    ";

/// Pure state transition: `(Model, Message) -> Model`.
#[must_use]
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::InsertChar(c) => {
            model.buffer.insert_char(c);
            model.sync_document();
            model.ensure_cursor_visible();
        }
        Message::InsertTab => {
            model.buffer.insert_str(TAB_SPACES);
            model.sync_document();
            model.ensure_cursor_visible();
        }
        Message::SplitLine => {
            model.buffer.split_line();
            model.sync_document();
            model.ensure_cursor_visible();
        }
        Message::DeleteBack => {
            if model.buffer.delete_back() {
                model.sync_document();
            }
            model.ensure_cursor_visible();
        }
        Message::DeleteForward => {
            if model.buffer.delete_forward() {
                model.sync_document();
            }
        }
        Message::MoveCursor(direction) => {
            model.buffer.move_cursor(direction);
            model.ensure_cursor_visible();
        }
        Message::MoveHome => model.buffer.move_home(),
        Message::MoveEnd => model.buffer.move_end(),
        Message::MoveWordLeft => {
            model.buffer.move_word_left();
            model.ensure_cursor_visible();
        }
        Message::MoveWordRight => {
            model.buffer.move_word_right();
            model.ensure_cursor_visible();
        }
        Message::MoveToStart => {
            model.buffer.move_to_start();
            model.ensure_cursor_visible();
        }
        Message::MoveToEnd => {
            model.buffer.move_to_end();
            model.ensure_cursor_visible();
        }
        Message::ScrollUp(lines) => {
            model.editor_scroll_offset = model.editor_scroll_offset.saturating_sub(lines);
        }
        Message::ScrollDown(lines) => {
            model.editor_scroll_offset += lines;
            model.clamp_editor_scroll();
        }
        Message::ToggleRecent => {
            if model.recent_picker_open() {
                model.recent_selected = None;
            } else if model.session.recent().is_empty() {
                model.show_toast(ToastLevel::Info, "No recent files");
            } else {
                model.recent_selected = Some(0);
            }
        }
        Message::RecentUp => {
            if let Some(selected) = model.recent_selected {
                model.recent_selected = Some(selected.saturating_sub(1));
            }
        }
        Message::RecentDown => {
            if let Some(selected) = model.recent_selected {
                let max = model.session.recent().len().saturating_sub(1);
                model.recent_selected = Some((selected + 1).min(max));
            }
        }
        Message::CloseRecent | Message::OpenRecent(_) | Message::ClearRecent => {
            model.recent_selected = None;
        }
        Message::TogglePreview => model.preview_visible = !model.preview_visible,
        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,
        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
            model.clamp_editor_scroll();
            model.ensure_cursor_visible();
        }
        // State changes happen in the side-effect handler.
        Message::Open
        | Message::Save
        | Message::SaveAs
        | Message::CloseFile
        | Message::Quit => {}
    }
    model
}
