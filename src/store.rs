//! The authoritative note collection and its write-through persistence.
//!
//! Every mutation re-serializes the full board to disk before returning;
//! there is no debouncing and no partial persistence. The store is the
//! single writer of both the in-memory collection and the on-disk
//! document.
//!
//! Index arguments must come from the collection this store exposes;
//! passing a stale or out-of-range index is a programmer error and
//! panics.

use log::debug;

use crate::model::{Note, NoteDraft};
use crate::storage::{BoardDocument, Storage, StorageError, StorageResult, SCHEMA_VERSION};

pub struct NoteStore {
    notes: Vec<Note>,
    composer_visible: bool,
    storage: Storage,
}

/// What `NoteStore::load` found on disk.
pub enum LoadOutcome {
    /// A valid board, or no board at all (fresh start).
    Ready(NoteStore),
    /// The board file exists but could not be used. The store starts
    /// empty; the caller decides whether to quarantine the file or quit.
    Damaged { store: NoteStore, error: StorageError },
}

impl NoteStore {
    pub fn load(storage: Storage) -> LoadOutcome {
        match storage.load() {
            Ok(Some(doc)) => {
                debug!("loaded board with {} notes", doc.notes.len());
                LoadOutcome::Ready(Self {
                    notes: doc.notes,
                    composer_visible: doc.composer_visible,
                    storage,
                })
            }
            Ok(None) => {
                debug!("no board file, starting empty");
                LoadOutcome::Ready(Self::empty(storage))
            }
            Err(error) => LoadOutcome::Damaged {
                store: Self::empty(storage),
                error,
            },
        }
    }

    fn empty(storage: Storage) -> Self {
        Self {
            notes: Vec::new(),
            composer_visible: false,
            storage,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn composer_visible(&self) -> bool {
        self.composer_visible
    }

    /// Appends the note built from a composer draft.
    pub fn add_note(&mut self, draft: NoteDraft) -> StorageResult<()> {
        debug!("adding note '{}'", draft.title);
        self.notes.push(Note::from_draft(draft));
        self.persist()
    }

    pub fn toggle_open(&mut self, index: usize) -> StorageResult<()> {
        self.notes[index].is_open = !self.notes[index].is_open;
        self.persist()
    }

    /// Removes the note at `index`; later notes shift down by one.
    pub fn delete_note(&mut self, index: usize) -> StorageResult<()> {
        let note = self.notes.remove(index);
        debug!("deleted note '{}'", note.title);
        self.persist()
    }

    /// Overwrites a paragraph's text. Editing always clears the done flag:
    /// changed text is no longer the thing that was marked done.
    pub fn edit_paragraph(
        &mut self,
        note_index: usize,
        paragraph_index: usize,
        new_text: impl Into<String>,
    ) -> StorageResult<()> {
        let paragraph = &mut self.notes[note_index].paragraphs[paragraph_index];
        paragraph.text = new_text.into();
        paragraph.done = false;
        self.persist()
    }

    pub fn toggle_done(&mut self, note_index: usize, paragraph_index: usize) -> StorageResult<()> {
        let paragraph = &mut self.notes[note_index].paragraphs[paragraph_index];
        paragraph.done = !paragraph.done;
        self.persist()
    }

    pub fn set_composer_visible(&mut self, visible: bool) -> StorageResult<()> {
        self.composer_visible = visible;
        self.persist()
    }

    /// Quarantines a damaged board file and persists a fresh empty board.
    pub fn start_fresh(&mut self) -> StorageResult<()> {
        if let Some(backup) = self.storage.quarantine()? {
            log::warn!("damaged board moved to {}", backup.display());
        }
        self.notes.clear();
        self.composer_visible = false;
        self.persist()
    }

    fn persist(&self) -> StorageResult<()> {
        let doc = BoardDocument {
            version: SCHEMA_VERSION,
            notes: self.notes.clone(),
            composer_visible: self.composer_visible,
        };
        self.storage.save(&doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoteColor;
    use tempfile::TempDir;

    fn fresh_store(dir: &TempDir) -> NoteStore {
        match NoteStore::load(Storage::new(dir.path().join("board.json"))) {
            LoadOutcome::Ready(store) => store,
            LoadOutcome::Damaged { .. } => panic!("fresh dir must load clean"),
        }
    }

    fn draft(title: &str, paragraphs: &[&str]) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            color: NoteColor::Green,
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_add_note_appends_closed_and_unmarked() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(&dir);
        store.add_note(draft("Groceries", &["milk", "eggs"])).unwrap();

        assert_eq!(store.len(), 1);
        let note = &store.notes()[0];
        assert!(!note.is_open);
        assert_eq!(note.paragraphs.len(), 2);
        assert!(note.paragraphs.iter().all(|p| !p.done));
    }

    #[test]
    fn test_delete_shifts_later_notes_down() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(&dir);
        store.add_note(draft("first", &["a"])).unwrap();
        store.add_note(draft("second", &["b", "c"])).unwrap();
        store.toggle_done(1, 1).unwrap();

        store.delete_note(0).unwrap();

        assert_eq!(store.len(), 1);
        let survivor = &store.notes()[0];
        assert_eq!(survivor.title, "second");
        assert!(!survivor.paragraphs[0].done);
        assert!(survivor.paragraphs[1].done);
    }

    #[test]
    fn test_edit_paragraph_resets_done() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(&dir);
        store.add_note(draft("todo", &["wash car"])).unwrap();
        store.toggle_done(0, 0).unwrap();
        assert!(store.notes()[0].paragraphs[0].done);

        store.edit_paragraph(0, 0, "wash bike").unwrap();

        let paragraph = &store.notes()[0].paragraphs[0];
        assert_eq!(paragraph.text, "wash bike");
        assert!(!paragraph.done);
    }

    #[test]
    fn test_toggle_done_is_an_involution() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(&dir);
        store.add_note(draft("todo", &["one thing"])).unwrap();

        store.toggle_done(0, 0).unwrap();
        assert!(store.notes()[0].paragraphs[0].done);
        store.toggle_done(0, 0).unwrap();
        assert!(!store.notes()[0].paragraphs[0].done);
    }

    #[test]
    fn test_toggle_open_flips_flag() {
        let dir = TempDir::new().unwrap();
        let mut store = fresh_store(&dir);
        store.add_note(draft("n", &["p"])).unwrap();
        store.toggle_open(0).unwrap();
        assert!(store.notes()[0].is_open);
        store.toggle_open(0).unwrap();
        assert!(!store.notes()[0].is_open);
    }

    #[test]
    fn test_every_mutation_is_written_through() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.json");
        {
            let mut store = match NoteStore::load(Storage::new(&path)) {
                LoadOutcome::Ready(store) => store,
                LoadOutcome::Damaged { .. } => unreachable!(),
            };
            store.add_note(draft("Groceries", &["milk", "eggs"])).unwrap();
            store.toggle_done(0, 1).unwrap();
            store.toggle_open(0).unwrap();
            store.set_composer_visible(true).unwrap();
        }
        // A second store reads back exactly what the first one mutated.
        let reloaded = match NoteStore::load(Storage::new(&path)) {
            LoadOutcome::Ready(store) => store,
            LoadOutcome::Damaged { .. } => panic!("round-trip must load clean"),
        };
        assert_eq!(reloaded.len(), 1);
        let note = &reloaded.notes()[0];
        assert_eq!(note.title, "Groceries");
        assert!(note.is_open);
        assert!(!note.paragraphs[0].done);
        assert!(note.paragraphs[1].done);
        assert!(reloaded.composer_visible());
    }

    #[test]
    fn test_damaged_board_surfaces_typed_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(&path, "not a board").unwrap();

        match NoteStore::load(Storage::new(&path)) {
            LoadOutcome::Damaged { store, error } => {
                assert!(store.is_empty());
                assert!(matches!(error, StorageError::Malformed(_)));
            }
            LoadOutcome::Ready(_) => panic!("damaged board must not load clean"),
        }
        // Loading must not destroy the evidence.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not a board");
    }

    #[test]
    fn test_start_fresh_quarantines_and_persists_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(&path, "not a board").unwrap();

        let mut store = match NoteStore::load(Storage::new(&path)) {
            LoadOutcome::Damaged { store, .. } => store,
            LoadOutcome::Ready(_) => unreachable!(),
        };
        store.start_fresh().unwrap();

        assert!(path.with_extension("json.corrupt").exists());
        match NoteStore::load(Storage::new(&path)) {
            LoadOutcome::Ready(reloaded) => assert!(reloaded.is_empty()),
            LoadOutcome::Damaged { .. } => panic!("fresh board must load clean"),
        }
    }
}
