//! End-to-end tests of the file lifecycle against the real disk store.

use std::path::PathBuf;

use markpad::files::DiskStore;
use markpad::recent::RecentFiles;
use markpad::session::{DiscardChoice, Session, Shell};

/// Shell with canned answers; unscripted prompts cancel.
struct ScriptedShell {
    save_path: Option<PathBuf>,
}

impl Shell for ScriptedShell {
    fn prompt_open_path(&mut self) -> Option<PathBuf> {
        None
    }

    fn prompt_save_path(&mut self) -> Option<PathBuf> {
        self.save_path.clone()
    }

    fn confirm_discard(&mut self) -> DiscardChoice {
        DiscardChoice::Discard
    }
}

fn disk_session(store_path: PathBuf) -> Session {
    Session::new(Box::new(DiskStore), RecentFiles::empty(store_path))
}

#[test]
fn test_save_writes_file_and_persists_recent_list() {
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("recent-files.json");
    let target = dir.path().join("notes.md");

    let mut session = disk_session(store_path.clone());
    session.edit("# Notes\n".to_string());
    let mut shell = ScriptedShell {
        save_path: Some(target.clone()),
    };
    session.save(&mut shell).unwrap();

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "# Notes\n");
    assert!(!session.document().is_dirty());

    // A fresh load (as a new process would do) sees the saved file first.
    let reloaded = RecentFiles::load(store_path);
    assert_eq!(reloaded.entries(), &[target]);
}

#[test]
fn test_recent_list_reloads_in_mru_order_and_drops_deleted_files() {
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("recent-files.json");

    let kept = dir.path().join("kept.md");
    let deleted = dir.path().join("deleted.md");

    let mut session = disk_session(store_path.clone());
    for target in [&deleted, &kept] {
        session.edit(format!("content of {}", target.display()));
        let mut shell = ScriptedShell {
            save_path: Some(target.clone()),
        };
        session.save_as(&mut shell).unwrap();
    }
    std::fs::remove_file(&deleted).unwrap();

    let reloaded = RecentFiles::load(store_path);
    assert_eq!(reloaded.entries(), &[kept]);
}

#[test]
fn test_open_recent_round_trips_document_content() {
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("recent-files.json");
    let target = dir.path().join("draft.md");

    let mut session = disk_session(store_path.clone());
    session.edit("# Draft\n\nbody text\n".to_string());
    let mut shell = ScriptedShell {
        save_path: Some(target.clone()),
    };
    session.save(&mut shell).unwrap();

    // Second session: the recent entry is enough to reopen the file.
    let mut session = disk_session(store_path);
    let mut shell = ScriptedShell { save_path: None };
    session.open_recent(&target, &mut shell).unwrap();

    assert_eq!(session.document().text(), "# Draft\n\nbody text\n");
    assert!(session.document().html().contains("<h1"));
}
