//! Plain-text export of notes.
//!
//! A note exports to `<title>.txt`: UTF-8, paragraph texts joined by
//! single newlines, no trailing metadata. Exporting never mutates the
//! board.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::model::Note;

pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn export_note(&self, note: &Note) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(note.export_file_name());
        fs::write(&path, note.export_body())?;
        info!("exported '{}' to {}", note.title, path.display());
        Ok(path)
    }

    /// Exports every note in order. Each file is an independent write; an
    /// error stops at the failing note.
    pub fn export_all(&self, notes: &[Note]) -> io::Result<Vec<PathBuf>> {
        let mut paths = Vec::with_capacity(notes.len());
        for note in notes {
            paths.push(self.export_note(note)?);
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NoteColor, NoteDraft};
    use tempfile::TempDir;

    fn note(title: &str, paragraphs: &[&str]) -> Note {
        Note::from_draft(NoteDraft {
            title: title.to_string(),
            color: NoteColor::Green,
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        })
    }

    #[test]
    fn test_export_writes_title_txt_with_joined_paragraphs() {
        let dir = TempDir::new().unwrap();
        let exporter = Exporter::new(dir.path());
        let path = exporter.export_note(&note("Groceries", &["milk", "eggs"])).unwrap();

        assert_eq!(path.file_name().unwrap(), "Groceries.txt");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "milk\neggs");
    }

    #[test]
    fn test_export_ignores_done_flags() {
        let dir = TempDir::new().unwrap();
        let exporter = Exporter::new(dir.path());
        let mut n = note("todo", &["done thing", "open thing"]);
        n.paragraphs[0].done = true;
        let path = exporter.export_note(&n).unwrap();
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "done thing\nopen thing"
        );
    }

    #[test]
    fn test_export_all_writes_one_file_per_note() {
        let dir = TempDir::new().unwrap();
        let exporter = Exporter::new(dir.path());
        let notes = vec![note("one", &["a"]), note("two", &["b"])];

        let paths = exporter.export_all(&notes).unwrap();

        assert_eq!(paths.len(), 2);
        assert!(dir.path().join("one.txt").exists());
        assert!(dir.path().join("two.txt").exists());
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let exporter = Exporter::new(dir.path().join("nested/exports"));
        exporter.export_note(&note("n", &["p"])).unwrap();
        assert!(dir.path().join("nested/exports/n.txt").exists());
    }
}
