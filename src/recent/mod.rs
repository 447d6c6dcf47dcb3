//! Persisted most-recently-used file list.
//!
//! The list is advisory: every failure to load or persist it is swallowed
//! (logged at warn level) so it can never block opening or saving the
//! actual document.

use std::path::{Path, PathBuf};

/// Maximum number of entries kept in the list.
pub const MAX_RECENT: usize = 10;

/// Bounded MRU list of previously opened/saved paths, persisted as an
/// indented JSON array of strings.
#[derive(Debug)]
pub struct RecentFiles {
    entries: Vec<PathBuf>,
    store_path: PathBuf,
}

impl RecentFiles {
    /// Load the list from `store_path`.
    ///
    /// A missing or corrupt backing file yields an empty list. Entries
    /// whose files no longer exist on disk are dropped.
    pub fn load(store_path: PathBuf) -> Self {
        let entries = match std::fs::read_to_string(&store_path) {
            Ok(json) => match serde_json::from_str::<Vec<PathBuf>>(&json) {
                Ok(paths) => paths.into_iter().filter(|p| p.exists()).collect(),
                Err(err) => {
                    tracing::warn!(
                        path = %store_path.display(),
                        %err,
                        "ignoring corrupt recent-files store"
                    );
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self {
            entries,
            store_path,
        }
    }

    /// Create an empty list that will persist to `store_path`.
    pub const fn empty(store_path: PathBuf) -> Self {
        Self {
            entries: Vec::new(),
            store_path,
        }
    }

    /// The current entries, most recent first.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Record `path` as the most recently used file and persist.
    ///
    /// Removes any existing occurrence first, so re-adding moves the path
    /// to the front without duplicating it. Empty or whitespace-only paths
    /// are ignored.
    pub fn add(&mut self, path: &Path) {
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return;
        }
        self.entries.retain(|p| p != path);
        self.entries.insert(0, path.to_path_buf());
        self.entries.truncate(MAX_RECENT);
        self.persist();
    }

    /// Empty the list and persist.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Some(parent) = self.store_path.parent()
            && let Err(err) = std::fs::create_dir_all(parent)
        {
            tracing::warn!(
                path = %parent.display(),
                %err,
                "failed to create recent-files directory"
            );
            return;
        }
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(%err, "failed to serialize recent-files list");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.store_path, json) {
            tracing::warn!(
                path = %self.store_path.display(),
                %err,
                "failed to persist recent-files list"
            );
        }
    }
}

/// Per-user location of the recent-files store.
pub fn default_store_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata)
                .join("markpad")
                .join("recent-files.json");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("markpad")
                .join("recent-files.json");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg)
                .join("markpad")
                .join("recent-files.json");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("markpad")
                .join("recent-files.json");
        }
    }

    PathBuf::from(".markpad-recent.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_store_yields_empty_list() {
        let dir = tempdir().unwrap();
        let recent = RecentFiles::load(dir.path().join("recent-files.json"));
        assert!(recent.is_empty());
    }

    #[test]
    fn test_load_corrupt_store_yields_empty_list() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("recent-files.json");
        std::fs::write(&store, "{not json]").unwrap();

        let recent = RecentFiles::load(store);
        assert!(recent.is_empty());
    }

    #[test]
    fn test_load_filters_out_missing_files() {
        let dir = tempdir().unwrap();
        let kept = dir.path().join("a.md");
        std::fs::write(&kept, "a").unwrap();
        let gone = dir.path().join("deleted.md");

        let store = dir.path().join("recent-files.json");
        let json = serde_json::to_string_pretty(&vec![kept.clone(), gone]).unwrap();
        std::fs::write(&store, json).unwrap();

        let recent = RecentFiles::load(store);
        assert_eq!(recent.entries(), &[kept]);
    }

    #[test]
    fn test_add_moves_existing_entry_to_front() {
        let dir = tempdir().unwrap();
        let mut recent = RecentFiles::empty(dir.path().join("recent-files.json"));

        recent.add(Path::new("/x.md"));
        recent.add(Path::new("/y.md"));
        recent.add(Path::new("/x.md"));

        assert_eq!(
            recent.entries(),
            &[PathBuf::from("/x.md"), PathBuf::from("/y.md")]
        );
    }

    #[test]
    fn test_list_is_bounded_and_evicts_oldest() {
        let dir = tempdir().unwrap();
        let mut recent = RecentFiles::empty(dir.path().join("recent-files.json"));

        for i in 0..=MAX_RECENT {
            recent.add(Path::new(&format!("/file-{i}.md")));
        }

        assert_eq!(recent.len(), MAX_RECENT);
        // file-0 was added first and falls off the tail
        assert!(!recent.entries().contains(&PathBuf::from("/file-0.md")));
        assert_eq!(recent.entries()[0], PathBuf::from("/file-10.md"));
    }

    #[test]
    fn test_add_ignores_blank_path() {
        let dir = tempdir().unwrap();
        let mut recent = RecentFiles::empty(dir.path().join("recent-files.json"));

        recent.add(Path::new(""));
        recent.add(Path::new("   "));
        assert!(recent.is_empty());
    }

    #[test]
    fn test_clear_empties_and_persists() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("recent-files.json");
        let mut recent = RecentFiles::empty(store.clone());

        recent.add(Path::new("/x.md"));
        recent.clear();

        assert!(recent.is_empty());
        let json = std::fs::read_to_string(&store).unwrap();
        let stored: Vec<PathBuf> = serde_json::from_str(&json).unwrap();
        assert!(stored.is_empty());
    }

    #[test]
    fn test_persisted_json_is_indented() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("recent-files.json");
        let mut recent = RecentFiles::empty(store.clone());

        recent.add(Path::new("/x.md"));
        recent.add(Path::new("/y.md"));

        let json = std::fs::read_to_string(&store).unwrap();
        assert!(json.contains('\n'), "store should be human-readable");
    }

    #[test]
    fn test_persist_failure_is_swallowed() {
        // Store path points inside a file, so every write fails.
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let mut recent = RecentFiles::empty(blocker.join("recent-files.json"));
        recent.add(Path::new("/x.md"));
        assert_eq!(recent.len(), 1);
    }
}
