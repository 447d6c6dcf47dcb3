use std::time::{Duration, Instant};

use crate::editor::EditorBuffer;
use crate::files::DiskStore;
use crate::recent::{self, RecentFiles};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// File lifecycle: the open document, dirty tracking, recent list.
    pub session: Session,
    /// Editable text with cursor, kept in sync with the session's document.
    pub buffer: EditorBuffer,
    /// First buffer line shown in the editor pane.
    pub editor_scroll_offset: usize,
    pub preview_visible: bool,
    pub help_visible: bool,
    /// `Some(index)` while the recent-files picker is open.
    pub recent_selected: Option<usize>,
    pub should_quit: bool,
    /// Terminal dimensions (width, height).
    pub terminal_size: (u16, u16),
    toast: Option<Toast>,
}

impl Model {
    pub fn new(session: Session, terminal_size: (u16, u16)) -> Self {
        Self {
            session,
            buffer: EditorBuffer::empty(),
            editor_scroll_offset: 0,
            preview_visible: true,
            help_visible: false,
            recent_selected: None,
            should_quit: false,
            terminal_size,
            toast: None,
        }
    }

    /// Push the buffer's text into the session, marking the document
    /// dirty and refreshing the preview when it changed.
    pub(super) fn sync_document(&mut self) {
        self.session.edit(self.buffer.text());
    }

    /// Rebuild the buffer from the session's document after a load or close.
    pub fn load_buffer_from_document(&mut self) {
        self.buffer = EditorBuffer::from_text(self.session.document().text());
        self.editor_scroll_offset = 0;
    }

    /// Rows available to the editor pane (terminal height minus footer bars).
    pub fn editor_visible_height(&self) -> usize {
        let footer = 1 + usize::from(self.active_toast().is_some());
        (self.terminal_size.1 as usize).saturating_sub(footer)
    }

    pub(super) fn ensure_cursor_visible(&mut self) {
        let height = self.editor_visible_height();
        if height == 0 {
            return;
        }
        let line = self.buffer.cursor().line;
        if line < self.editor_scroll_offset {
            self.editor_scroll_offset = line;
        } else if line >= self.editor_scroll_offset + height {
            self.editor_scroll_offset = line + 1 - height;
        }
    }

    pub(super) fn clamp_editor_scroll(&mut self) {
        let max = self.buffer.line_count().saturating_sub(1);
        self.editor_scroll_offset = self.editor_scroll_offset.min(max);
    }

    pub const fn recent_picker_open(&self) -> bool {
        self.recent_selected.is_some()
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    /// Placeholder state used by `std::mem::take` in the event loop.
    fn default() -> Self {
        Self::new(
            Session::new(
                Box::new(DiskStore),
                RecentFiles::empty(recent::default_store_path()),
            ),
            (80, 24),
        )
    }
}
