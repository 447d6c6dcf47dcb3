//! Blocking side effects that run after the pure state transition.
//!
//! Everything here goes through the session, which may open modal
//! prompts on the terminal via [`TermShell`]. Failures surface as
//! toasts; the session guarantees the document is left in a consistent
//! state when an operation errors out.

use ratatui::DefaultTerminal;

use crate::app::shell::TermShell;
use crate::app::{App, Message, Model, ToastLevel};
use crate::files::FileError;
use crate::session::Outcome;

impl App {
    pub(super) fn handle_message_side_effects(
        terminal: &mut DefaultTerminal,
        model: &mut Model,
        msg: &Message,
    ) {
        match msg {
            Message::Open => {
                let mut shell = TermShell::new(terminal);
                match model.session.open(&mut shell) {
                    Ok(Outcome::Done) => {
                        model.load_buffer_from_document();
                        let title = model.session.document().title();
                        model.show_toast(ToastLevel::Info, format!("Opened {title}"));
                    }
                    Ok(Outcome::Cancelled) => {}
                    Err(err) => report_file_error(model, &err),
                }
            }
            Message::OpenRecent(index) => {
                let Some(path) = model.session.recent().get(*index).cloned() else {
                    return;
                };
                let mut shell = TermShell::new(terminal);
                match model.session.open_recent(&path, &mut shell) {
                    Ok(Outcome::Done) => {
                        model.load_buffer_from_document();
                        let title = model.session.document().title();
                        model.show_toast(ToastLevel::Info, format!("Opened {title}"));
                    }
                    Ok(Outcome::Cancelled) => {}
                    Err(err) => report_file_error(model, &err),
                }
            }
            Message::Save => {
                let mut shell = TermShell::new(terminal);
                match model.session.save(&mut shell) {
                    Ok(Outcome::Done) => {
                        let title = model.session.document().title();
                        model.show_toast(ToastLevel::Info, format!("Saved {title}"));
                    }
                    Ok(Outcome::Cancelled) => {}
                    Err(err) => report_file_error(model, &err),
                }
            }
            Message::SaveAs => {
                let mut shell = TermShell::new(terminal);
                match model.session.save_as(&mut shell) {
                    Ok(Outcome::Done) => {
                        let title = model.session.document().title();
                        model.show_toast(ToastLevel::Info, format!("Saved {title}"));
                    }
                    Ok(Outcome::Cancelled) => {}
                    Err(err) => report_file_error(model, &err),
                }
            }
            Message::CloseFile => {
                let mut shell = TermShell::new(terminal);
                match model.session.close(&mut shell) {
                    Ok(Outcome::Done) => model.load_buffer_from_document(),
                    Ok(Outcome::Cancelled) => {}
                    Err(err) => report_file_error(model, &err),
                }
            }
            Message::Quit => {
                let mut shell = TermShell::new(terminal);
                match model.session.request_exit(&mut shell) {
                    Ok(Outcome::Done) => model.should_quit = true,
                    Ok(Outcome::Cancelled) => {}
                    Err(err) => report_file_error(model, &err),
                }
            }
            Message::ClearRecent => {
                model.session.clear_recent();
                model.show_toast(ToastLevel::Info, "Recent files cleared");
            }
            _ => {}
        }
    }
}

fn report_file_error(model: &mut Model, err: &FileError) {
    tracing::error!(path = %err.path().display(), %err, "file operation failed");
    model.show_toast(ToastLevel::Error, err.to_string());
}
