//! The file-lifecycle state machine.
//!
//! [`Session`] owns the open [`Document`] and the recent-files list and
//! drives every open/save/close/exit transition through two injected
//! seams: a [`FileStore`] for disk access and a [`Shell`] for the
//! interactive prompts. User cancellation is modeled as
//! [`Outcome::Cancelled`], never as an error; I/O failures propagate as
//! [`FileError`] and leave the document unchanged (failed open) or
//! still-dirty (failed save).

use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::files::{FileError, FileStore};
use crate::recent::RecentFiles;

/// Three-way answer to the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardChoice {
    /// Save first, then proceed if the save went through.
    Save,
    /// Proceed without saving.
    Discard,
    /// Abort the pending operation, leaving all state unchanged.
    Cancel,
}

/// Verdict of the discard-confirmation guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    Proceed,
    Abort,
}

/// How a user-initiated file operation ended (when it didn't fail).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Cancelled,
}

/// Interactive prompts the session needs from its host UI.
///
/// All three calls block on the interactive thread; returning `None`
/// (or [`DiscardChoice::Cancel`]) means the user backed out.
pub trait Shell {
    /// Ask the user which file to open.
    fn prompt_open_path(&mut self) -> Option<PathBuf>;
    /// Ask the user where to save the document.
    fn prompt_save_path(&mut self) -> Option<PathBuf>;
    /// Ask what to do about unsaved changes.
    fn confirm_discard(&mut self) -> DiscardChoice;
}

/// Document state machine: one open document plus its services.
pub struct Session {
    document: Document,
    files: Box<dyn FileStore>,
    recent: RecentFiles,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("document", &self.document)
            .field("recent", &self.recent)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(files: Box<dyn FileStore>, recent: RecentFiles) -> Self {
        Self {
            document: Document::new(),
            files,
            recent,
        }
    }

    pub const fn document(&self) -> &Document {
        &self.document
    }

    pub fn recent(&self) -> &[PathBuf] {
        self.recent.entries()
    }

    /// Apply a text edit from the editor. Marks the document dirty and
    /// recomputes the preview (no-op when the text is unchanged).
    pub fn edit(&mut self, text: String) {
        self.document.set_text(text);
    }

    /// Open: confirm discarding unsaved changes, prompt for a file,
    /// load it, and record it in the recent list.
    ///
    /// # Errors
    ///
    /// Propagates the read failure; the in-memory document is unchanged.
    pub fn open(&mut self, shell: &mut dyn Shell) -> Result<Outcome, FileError> {
        if self.confirm_discard(shell)? == Confirm::Abort {
            return Ok(Outcome::Cancelled);
        }
        let Some(path) = shell.prompt_open_path() else {
            return Ok(Outcome::Cancelled);
        };
        self.load_from(&path)?;
        Ok(Outcome::Done)
    }

    /// Open a known path from the recent list.
    ///
    /// The existence check runs before the discard prompt so the user is
    /// never asked about unsaved changes for a file that is gone anyway.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::Missing`] when the file no longer exists, or
    /// the read failure; the in-memory document is unchanged.
    pub fn open_recent(
        &mut self,
        path: &Path,
        shell: &mut dyn Shell,
    ) -> Result<Outcome, FileError> {
        if !self.files.exists(path) {
            return Err(FileError::Missing {
                path: path.to_path_buf(),
            });
        }
        if self.confirm_discard(shell)? == Confirm::Abort {
            return Ok(Outcome::Cancelled);
        }
        self.load_from(path)?;
        Ok(Outcome::Done)
    }

    /// Save to the current path; delegates to [`Self::save_as`] when the
    /// document has never been saved.
    ///
    /// # Errors
    ///
    /// Propagates the write failure; the document stays dirty and keeps
    /// its path.
    pub fn save(&mut self, shell: &mut dyn Shell) -> Result<Outcome, FileError> {
        let Some(path) = self.document.path().map(Path::to_path_buf) else {
            return self.save_as(shell);
        };
        if !self.document.is_dirty() {
            return Ok(Outcome::Done);
        }
        self.write_to(path)?;
        Ok(Outcome::Done)
    }

    /// Prompt for a target path and save there.
    ///
    /// # Errors
    ///
    /// Propagates the write failure; the document stays dirty and keeps
    /// its previous path.
    pub fn save_as(&mut self, shell: &mut dyn Shell) -> Result<Outcome, FileError> {
        let Some(path) = shell.prompt_save_path() else {
            return Ok(Outcome::Cancelled);
        };
        self.write_to(path)?;
        Ok(Outcome::Done)
    }

    /// Close the document, leaving an empty untitled one.
    ///
    /// # Errors
    ///
    /// Propagates a save failure from the discard prompt's Save branch.
    pub fn close(&mut self, shell: &mut dyn Shell) -> Result<Outcome, FileError> {
        if self.confirm_discard(shell)? == Confirm::Abort {
            return Ok(Outcome::Cancelled);
        }
        self.document.clear();
        Ok(Outcome::Done)
    }

    /// Ask to exit. `Ok(Done)` means the caller may terminate.
    ///
    /// # Errors
    ///
    /// Propagates a save failure from the discard prompt's Save branch.
    pub fn request_exit(&mut self, shell: &mut dyn Shell) -> Result<Outcome, FileError> {
        match self.confirm_discard(shell)? {
            Confirm::Proceed => Ok(Outcome::Done),
            Confirm::Abort => Ok(Outcome::Cancelled),
        }
    }

    /// Load `path` directly, without any prompts. Intended for the
    /// startup file, before there can be unsaved changes.
    ///
    /// # Errors
    ///
    /// Propagates the read failure; the in-memory document is unchanged.
    pub fn load_path(&mut self, path: &Path) -> Result<(), FileError> {
        self.load_from(path)
    }

    /// Drop all recent-files entries.
    pub fn clear_recent(&mut self) {
        self.recent.clear();
    }

    /// Guard for any operation that would destroy unsaved edits.
    ///
    /// Clean documents proceed without prompting. For dirty documents the
    /// Save branch proceeds only when the save actually completed: a
    /// cancelled save-as aborts the pending operation, and a failed write
    /// surfaces as an error (also aborting it).
    fn confirm_discard(&mut self, shell: &mut dyn Shell) -> Result<Confirm, FileError> {
        if !self.document.is_dirty() {
            return Ok(Confirm::Proceed);
        }
        match shell.confirm_discard() {
            DiscardChoice::Save => match self.save(shell)? {
                Outcome::Done => Ok(Confirm::Proceed),
                Outcome::Cancelled => Ok(Confirm::Abort),
            },
            DiscardChoice::Discard => Ok(Confirm::Proceed),
            DiscardChoice::Cancel => Ok(Confirm::Abort),
        }
    }

    fn load_from(&mut self, path: &Path) -> Result<(), FileError> {
        let text = self.files.read(path)?;
        self.document.loaded(text, path.to_path_buf());
        self.recent.add(path);
        Ok(())
    }

    fn write_to(&mut self, path: PathBuf) -> Result<(), FileError> {
        self.files.write(&path, self.document.text())?;
        self.recent.add(&path);
        self.document.saved(path);
        Ok(())
    }
}
