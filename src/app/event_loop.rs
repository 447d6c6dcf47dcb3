use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, update};
use crate::files::DiskStore;
use crate::recent::{self, RecentFiles};
use crate::session::Session;

impl App {
    /// Run the editor until the user exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the startup file cannot be read, or if
    /// terminal initialization or the event loop hits an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let recent = RecentFiles::load(recent::default_store_path());
        let mut session = Session::new(Box::new(DiskStore), recent);

        // Load the startup file before touching the terminal so a bad
        // path fails with a plain error message.
        if let Some(path) = &self.file_path {
            session
                .load_path(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
        }

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; markpad needs an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(session, (size.width, size.height));
        model.preview_visible = self.preview_visible;
        model.load_buffer_from_document();

        let result = Self::event_loop(&mut terminal, &mut model);
        ratatui::restore();
        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;
        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let poll_ms = if needs_render { 0 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))? {
                Self::step(terminal, model, &event::read()?);
                needs_render = true;
                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    Self::step(terminal, model, &event::read()?);
                }
            }

            if model.should_quit {
                return Ok(());
            }
            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }
        }
    }

    /// Translate one terminal event into a state transition plus its
    /// side effects.
    fn step(terminal: &mut DefaultTerminal, model: &mut Model, event: &event::Event) {
        if let Some(msg) = Self::handle_event(event, model) {
            let side_msg = msg.clone();
            *model = update(std::mem::take(model), msg);
            Self::handle_message_side_effects(terminal, model, &side_msg);
        }
    }
}
