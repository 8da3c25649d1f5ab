//! Board domain types: notes, paragraphs, and the note color palette.

use serde::{Deserialize, Serialize};

/// Fixed color palette a note can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Red,
    Green,
    Yellow,
    Violet,
    Orange,
}

impl NoteColor {
    pub fn all() -> &'static [NoteColor] {
        &[
            NoteColor::Red,
            NoteColor::Green,
            NoteColor::Yellow,
            NoteColor::Violet,
            NoteColor::Orange,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NoteColor::Red => "red",
            NoteColor::Green => "green",
            NoteColor::Yellow => "yellow",
            NoteColor::Violet => "violet",
            NoteColor::Orange => "orange",
        }
    }
}

/// One line of a note. `done` lines render struck through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// A sticky note: a titled, colored, ordered list of paragraphs.
///
/// A paragraph owns its own `done` flag, so the flags can never drift out
/// of alignment with the text they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub color: NoteColor,
    #[serde(default)]
    pub is_open: bool,
    pub paragraphs: Vec<Paragraph>,
}

impl Note {
    /// Builds a fully formed note from a composer draft. Every paragraph
    /// starts unmarked and the note starts closed.
    pub fn from_draft(draft: NoteDraft) -> Self {
        Self {
            title: draft.title,
            color: draft.color,
            is_open: false,
            paragraphs: draft.paragraphs.into_iter().map(Paragraph::new).collect(),
        }
    }

    pub fn export_file_name(&self) -> String {
        format!("{}.txt", self.title)
    }

    /// Plain-text body for export: paragraph texts joined by single
    /// newlines, nothing else.
    pub fn export_body(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn done_count(&self) -> usize {
        self.paragraphs.iter().filter(|p| p.done).count()
    }
}

/// A candidate note emitted by the composer. Paragraphs are kept exactly
/// as typed, empty slots included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub color: NoteColor,
    pub paragraphs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NoteDraft {
        NoteDraft {
            title: "Groceries".to_string(),
            color: NoteColor::Green,
            paragraphs: vec!["milk".to_string(), "eggs".to_string()],
        }
    }

    #[test]
    fn test_from_draft_starts_closed_and_unmarked() {
        let note = Note::from_draft(draft());
        assert!(!note.is_open);
        assert_eq!(note.paragraphs.len(), 2);
        assert!(note.paragraphs.iter().all(|p| !p.done));
    }

    #[test]
    fn test_from_draft_keeps_paragraphs_as_typed() {
        let mut d = draft();
        d.paragraphs.push("".to_string());
        d.paragraphs.push("  spaced  ".to_string());
        let note = Note::from_draft(d);
        assert_eq!(note.paragraphs[2].text, "");
        assert_eq!(note.paragraphs[3].text, "  spaced  ");
    }

    #[test]
    fn test_export_body_joins_with_newlines() {
        let note = Note::from_draft(draft());
        assert_eq!(note.export_body(), "milk\neggs");
    }

    #[test]
    fn test_export_file_name() {
        let note = Note::from_draft(draft());
        assert_eq!(note.export_file_name(), "Groceries.txt");
    }

    #[test]
    fn test_done_count() {
        let mut note = Note::from_draft(draft());
        assert_eq!(note.done_count(), 0);
        note.paragraphs[1].done = true;
        assert_eq!(note.done_count(), 1);
    }

    #[test]
    fn test_color_serializes_lowercase() {
        let json = serde_json::to_string(&NoteColor::Violet).unwrap();
        assert_eq!(json, "\"violet\"");
    }
}
