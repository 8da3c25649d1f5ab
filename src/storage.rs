//! Durable board storage: one versioned JSON document on disk.
//!
//! Loading distinguishes "never used before" (no file, `Ok(None)`) from
//! damaged or unrecognized data (typed error, file left intact). Writes go
//! through a temp file and rename so a crash mid-write cannot truncate the
//! board.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::Note;

pub const SCHEMA_VERSION: u32 = 1;

/// Everything that persists: the notes and the composer visibility flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardDocument {
    pub version: u32,
    pub notes: Vec<Note>,
    #[serde(default)]
    pub composer_visible: bool,
}

impl BoardDocument {
    pub fn empty() -> Self {
        Self {
            version: SCHEMA_VERSION,
            notes: Vec::new(),
            composer_visible: false,
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Malformed(serde_json::Error),
    UnsupportedVersion(u32),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage I/O failed: {err}"),
            Self::Malformed(err) => write!(f, "stored board is not valid: {err}"),
            Self::UnsupportedVersion(v) => {
                write!(f, "stored board has unknown schema version {v}")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
            Self::UnsupportedVersion(_) => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted board. `Ok(None)` means no board exists yet.
    pub fn load(&self) -> StorageResult<Option<BoardDocument>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let doc: BoardDocument =
            serde_json::from_str(&raw).map_err(StorageError::Malformed)?;
        // Single version so far; this match is where migrations hook in.
        match doc.version {
            SCHEMA_VERSION => Ok(Some(doc)),
            other => Err(StorageError::UnsupportedVersion(other)),
        }
    }

    /// Writes the full document. Temp file first, then atomic rename.
    pub fn save(&self, doc: &BoardDocument) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized =
            serde_json::to_string_pretty(doc).map_err(StorageError::Malformed)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, serialized)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Moves a damaged board file aside so a fresh one can be written.
    /// Returns the backup path, or `None` when there was nothing to move.
    pub fn quarantine(&self) -> io::Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let backup = self.path.with_extension("json.corrupt");
        fs::rename(&self.path, &backup)?;
        Ok(Some(backup))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Note, NoteColor, NoteDraft};
    use tempfile::TempDir;

    fn storage(dir: &TempDir) -> Storage {
        Storage::new(dir.path().join("board.json"))
    }

    fn sample_note() -> Note {
        Note::from_draft(NoteDraft {
            title: "Groceries".to_string(),
            color: NoteColor::Green,
            paragraphs: vec!["milk".to_string(), "eggs".to_string()],
        })
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(storage(&dir).load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        let mut doc = BoardDocument::empty();
        doc.notes.push(sample_note());
        doc.notes[0].paragraphs[1].done = true;
        doc.composer_visible = true;
        storage.save(&doc).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded.notes, doc.notes);
        assert!(loaded.composer_visible);
    }

    #[test]
    fn test_malformed_json_is_typed_error() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        std::fs::write(storage.path(), "{ not json").unwrap();
        match storage.load() {
            Err(StorageError::Malformed(_)) => {}
            other => panic!("expected Malformed, got {other:?}"),
        }
        // The damaged file must survive the failed load untouched.
        assert!(storage.path().exists());
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        std::fs::write(
            storage.path(),
            r#"{"version": 99, "notes": [], "composer_visible": false}"#,
        )
        .unwrap();
        match storage.load() {
            Err(StorageError::UnsupportedVersion(99)) => {}
            other => panic!("expected UnsupportedVersion(99), got {other:?}"),
        }
    }

    #[test]
    fn test_save_overwrites_previous_document() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        let mut doc = BoardDocument::empty();
        doc.notes.push(sample_note());
        storage.save(&doc).unwrap();
        doc.notes.clear();
        storage.save(&doc).unwrap();
        assert!(storage.load().unwrap().unwrap().notes.is_empty());
    }

    #[test]
    fn test_quarantine_moves_file_aside() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        std::fs::write(storage.path(), "garbage").unwrap();
        let backup = storage.quarantine().unwrap().unwrap();
        assert!(!storage.path().exists());
        assert!(backup.exists());
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "garbage");
    }

    #[test]
    fn test_quarantine_without_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(storage(&dir).quarantine().unwrap().is_none());
    }
}
