//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering
//!
//! File prompts are the one deliberate departure from pure TEA: opening,
//! saving, and closing may need a blocking dialog, which runs as a modal
//! sub-loop inside the side-effect handler.

mod effects;
mod event_loop;
mod input;
mod model;
mod shell;
mod update;

pub use model::{Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    preview_visible: bool,
}

impl App {
    /// Create a new application with an empty untitled document.
    pub const fn new() -> Self {
        Self {
            file_path: None,
            preview_visible: true,
        }
    }

    /// Set a file to open at startup.
    pub fn with_file(mut self, file_path: Option<PathBuf>) -> Self {
        self.file_path = file_path;
        self
    }

    /// Set initial preview pane visibility.
    pub const fn with_preview_visible(mut self, visible: bool) -> Self {
        self.preview_visible = visible;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
