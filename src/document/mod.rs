//! The single open document: markdown text, its on-disk location,
//! unsaved-changes tracking, and the derived HTML preview.

use std::path::{Path, PathBuf};

/// The one document the editor holds at a time.
///
/// `html` is derived state: it is recomputed from `text` by every mutator,
/// so it is never stale once a mutation returns. `dirty` flips true on any
/// edit and false only on a successful load or save.
#[derive(Debug, Default)]
pub struct Document {
    text: String,
    path: Option<PathBuf>,
    dirty: bool,
    html: String,
}

impl Document {
    /// A new, empty, clean document with no backing file.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The rendered HTML for the current text.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Replace the text with an edit from the user.
    ///
    /// No-op when the text is unchanged; otherwise marks the document
    /// dirty and recomputes the preview.
    pub fn set_text(&mut self, text: String) {
        if text == self.text {
            return;
        }
        self.text = text;
        self.dirty = true;
        self.render();
    }

    /// Adopt freshly loaded file contents.
    pub fn loaded(&mut self, text: String, path: PathBuf) {
        self.text = text;
        self.path = Some(path);
        self.dirty = false;
        self.render();
    }

    /// Record a successful save to `path`.
    pub fn saved(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.dirty = false;
    }

    /// Reset to an empty, untitled, clean document.
    pub fn clear(&mut self) {
        self.text.clear();
        self.path = None;
        self.dirty = false;
        self.html.clear();
    }

    /// Display title: file basename (or "Untitled") with a trailing `*`
    /// when there are unsaved changes.
    pub fn title(&self) -> String {
        let name = self.path.as_deref().and_then(Path::file_name).map_or_else(
            || "Untitled".to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        let marker = if self.dirty { "*" } else { "" };
        format!("{name}{marker}")
    }

    fn render(&mut self) {
        self.html = crate::render::to_html(&self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_clean_and_untitled() {
        let doc = Document::new();
        assert!(!doc.is_dirty());
        assert!(doc.path().is_none());
        assert_eq!(doc.text(), "");
        assert_eq!(doc.html(), "");
        assert_eq!(doc.title(), "Untitled");
    }

    #[test]
    fn test_set_text_marks_dirty_and_renders() {
        let mut doc = Document::new();
        doc.set_text("# Hi".to_string());

        assert!(doc.is_dirty());
        assert_eq!(doc.html(), crate::render::to_html("# Hi"));
    }

    #[test]
    fn test_set_text_with_same_content_stays_clean() {
        let mut doc = Document::new();
        doc.loaded("# Hi".to_string(), PathBuf::from("/a.md"));
        doc.set_text("# Hi".to_string());
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_preview_tracks_latest_edit_not_an_earlier_one() {
        let mut doc = Document::new();
        doc.set_text("first".to_string());
        doc.set_text("second".to_string());

        assert!(doc.is_dirty());
        assert_eq!(doc.html(), crate::render::to_html("second"));
    }

    #[test]
    fn test_loaded_resets_dirty_and_adopts_path() {
        let mut doc = Document::new();
        doc.set_text("scratch".to_string());
        doc.loaded("# Loaded".to_string(), PathBuf::from("/notes/a.md"));

        assert!(!doc.is_dirty());
        assert_eq!(doc.text(), "# Loaded");
        assert_eq!(doc.path(), Some(Path::new("/notes/a.md")));
        assert_eq!(doc.html(), crate::render::to_html("# Loaded"));
    }

    #[test]
    fn test_saved_clears_dirty_and_updates_path() {
        let mut doc = Document::new();
        doc.set_text("content".to_string());
        doc.saved(PathBuf::from("/notes/b.md"));

        assert!(!doc.is_dirty());
        assert_eq!(doc.path(), Some(Path::new("/notes/b.md")));
        // Text and preview are untouched by a save
        assert_eq!(doc.text(), "content");
        assert_eq!(doc.html(), crate::render::to_html("content"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut doc = Document::new();
        doc.loaded("text".to_string(), PathBuf::from("/a.md"));
        doc.set_text("edited".to_string());
        doc.clear();

        assert_eq!(doc.text(), "");
        assert!(doc.path().is_none());
        assert!(!doc.is_dirty());
        assert_eq!(doc.html(), "");
        assert_eq!(doc.title(), "Untitled");
    }

    #[test]
    fn test_title_reflects_path_and_dirty_flag() {
        let mut doc = Document::new();
        assert_eq!(doc.title(), "Untitled");

        doc.set_text("x".to_string());
        assert_eq!(doc.title(), "Untitled*");

        doc.loaded("x".to_string(), PathBuf::from("/notes/readme.md"));
        assert_eq!(doc.title(), "readme.md");

        doc.set_text("y".to_string());
        assert_eq!(doc.title(), "readme.md*");
    }
}
