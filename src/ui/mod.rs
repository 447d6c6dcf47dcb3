//! Terminal UI components.
//!
//! The main view is a split layout: the editable source on the left and
//! the rendered HTML on the right, with a status bar (and transient
//! toast bar) pinned to the bottom. Overlays and modal prompts draw as
//! centered popups over whatever is behind them.

mod overlays;
mod render;
mod status;

pub use overlays::{render_discard_overlay, render_prompt_overlay};
pub use render::{line_number_width, render, split_main_columns};

pub const EDITOR_WIDTH_PERCENT: u16 = 50;
pub const PREVIEW_WIDTH_PERCENT: u16 = 50;
