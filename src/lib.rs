// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorBuffer)
    clippy::module_name_repetitions
)]

//! # Markpad
//!
//! A terminal markdown editor with a live HTML preview.
//!
//! Markpad keeps one document open at a time. Edits flow into the
//! document, which re-renders its HTML preview on every change; the
//! file lifecycle (open, save, close, exit) is guarded so unsaved
//! changes are never discarded without confirmation.
//!
//! ## Architecture
//!
//! Markpad uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`session`]: File-lifecycle state machine
//! - [`document`]: The open document and its derived preview
//! - [`editor`]: Editable text buffer
//! - [`render`]: Markdown to HTML conversion
//! - [`files`]: Disk access behind a mockable seam
//! - [`recent`]: Persisted recent-files list
//! - [`ui`]: Terminal UI components

pub mod app;
pub mod document;
pub mod editor;
pub mod files;
pub mod recent;
pub mod render;
pub mod session;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::Document;
    pub use crate::session::Session;
}
