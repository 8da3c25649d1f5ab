//! The note composer: stages a new note's color, title, and paragraphs
//! before committing it to the store.
//!
//! The flow is linear: the palette opens, a color is picked, the pad
//! becomes visible, fields are filled, and the draft is committed or
//! discarded. Failed validation keeps every field intact.

use std::fmt::{Display, Formatter};

use crate::model::{NoteColor, NoteDraft};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composer {
    Idle,
    /// Palette row is open; `highlighted` indexes `NoteColor::all()`.
    PickingColor { highlighted: usize },
    /// Pad is visible and collecting input.
    Composing(ComposerForm),
}

/// Which input line of the pad has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerField {
    Title,
    Paragraph(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerForm {
    pub title: String,
    pub color: NoteColor,
    pub paragraphs: Vec<String>,
    pub field: ComposerField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    NoContent,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "the note needs a title"),
            Self::NoContent => write!(f, "the note needs at least one non-empty line"),
        }
    }
}

impl Composer {
    pub fn new() -> Self {
        Composer::Idle
    }

    pub fn is_composing(&self) -> bool {
        matches!(self, Composer::Composing(_))
    }

    /// Opens the color palette. Toggles closed if it was already open.
    pub fn toggle_palette(&mut self) {
        match self {
            Composer::Idle => *self = Composer::PickingColor { highlighted: 0 },
            Composer::PickingColor { .. } => *self = Composer::Idle,
            Composer::Composing(_) => {}
        }
    }

    pub fn highlight_next(&mut self) {
        if let Composer::PickingColor { highlighted } = self {
            *highlighted = (*highlighted + 1) % NoteColor::all().len();
        }
    }

    pub fn highlight_previous(&mut self) {
        if let Composer::PickingColor { highlighted } = self {
            let len = NoteColor::all().len();
            *highlighted = (*highlighted + len - 1) % len;
        }
    }

    /// Picks the highlighted color: the palette closes and the pad opens
    /// with empty fields.
    pub fn pick_highlighted(&mut self) {
        if let Composer::PickingColor { highlighted } = self {
            let color = NoteColor::all()[*highlighted];
            *self = Composer::Composing(ComposerForm::new(color));
        }
    }

    /// Discards whatever is staged and returns to the board.
    pub fn cancel(&mut self) {
        *self = Composer::Idle;
    }

    pub fn form_mut(&mut self) -> Option<&mut ComposerForm> {
        match self {
            Composer::Composing(form) => Some(form),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&ComposerForm> {
        match self {
            Composer::Composing(form) => Some(form),
            _ => None,
        }
    }

    /// Validates the staged note. On success the composer resets to idle
    /// and the draft is handed out exactly as typed; on failure nothing
    /// changes and the pad stays up.
    pub fn finish(&mut self) -> Result<NoteDraft, ValidationError> {
        let form = match self {
            Composer::Composing(form) => form,
            _ => return Err(ValidationError::NoContent),
        };
        form.validate()?;
        let draft = NoteDraft {
            title: form.title.clone(),
            color: form.color,
            paragraphs: form.paragraphs.clone(),
        };
        *self = Composer::Idle;
        Ok(draft)
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposerForm {
    pub fn new(color: NoteColor) -> Self {
        Self {
            title: String::new(),
            color,
            paragraphs: Vec::new(),
            field: ComposerField::Title,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if !self.paragraphs.iter().any(|p| !p.trim().is_empty()) {
            return Err(ValidationError::NoContent);
        }
        Ok(())
    }

    /// Appends an empty paragraph slot and moves the cursor into it.
    pub fn add_paragraph(&mut self) {
        self.paragraphs.push(String::new());
        self.field = ComposerField::Paragraph(self.paragraphs.len() - 1);
    }

    pub fn focus_next(&mut self) {
        self.field = match self.field {
            ComposerField::Title if self.paragraphs.is_empty() => ComposerField::Title,
            ComposerField::Title => ComposerField::Paragraph(0),
            ComposerField::Paragraph(i) if i + 1 < self.paragraphs.len() => {
                ComposerField::Paragraph(i + 1)
            }
            ComposerField::Paragraph(_) => ComposerField::Title,
        };
    }

    pub fn focus_previous(&mut self) {
        self.field = match self.field {
            ComposerField::Title if self.paragraphs.is_empty() => ComposerField::Title,
            ComposerField::Title => ComposerField::Paragraph(self.paragraphs.len() - 1),
            ComposerField::Paragraph(0) => ComposerField::Title,
            ComposerField::Paragraph(i) => ComposerField::Paragraph(i - 1),
        };
    }

    pub fn push_char(&mut self, c: char) {
        self.active_text_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.active_text_mut().pop();
    }

    fn active_text_mut(&mut self) -> &mut String {
        match self.field {
            ComposerField::Title => &mut self.title,
            ComposerField::Paragraph(i) => &mut self.paragraphs[i],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composing() -> Composer {
        let mut composer = Composer::new();
        composer.toggle_palette();
        composer.pick_highlighted();
        composer
    }

    fn type_into(form: &mut ComposerForm, text: &str) {
        for c in text.chars() {
            form.push_char(c);
        }
    }

    #[test]
    fn test_palette_toggles_from_idle() {
        let mut composer = Composer::new();
        composer.toggle_palette();
        assert_eq!(composer, Composer::PickingColor { highlighted: 0 });
        composer.toggle_palette();
        assert_eq!(composer, Composer::Idle);
    }

    #[test]
    fn test_pick_opens_pad_with_highlighted_color() {
        let mut composer = Composer::new();
        composer.toggle_palette();
        composer.highlight_next();
        composer.pick_highlighted();
        let form = composer.form().unwrap();
        assert_eq!(form.color, NoteColor::all()[1]);
        assert!(form.title.is_empty());
        assert!(form.paragraphs.is_empty());
    }

    #[test]
    fn test_highlight_wraps_both_ways() {
        let mut composer = Composer::new();
        composer.toggle_palette();
        composer.highlight_previous();
        assert_eq!(
            composer,
            Composer::PickingColor { highlighted: NoteColor::all().len() - 1 }
        );
        composer.highlight_next();
        assert_eq!(composer, Composer::PickingColor { highlighted: 0 });
    }

    #[test]
    fn test_finish_requires_title() {
        let mut composer = composing();
        {
            let form = composer.form_mut().unwrap();
            form.add_paragraph();
            type_into(form, "milk");
        }
        assert_eq!(composer.finish(), Err(ValidationError::EmptyTitle));
        // Failed validation must not clear anything.
        assert_eq!(composer.form().unwrap().paragraphs, vec!["milk"]);
    }

    #[test]
    fn test_finish_rejects_whitespace_only_title() {
        let mut composer = composing();
        {
            let form = composer.form_mut().unwrap();
            type_into(form, "   ");
            form.add_paragraph();
            type_into(form, "milk");
        }
        assert_eq!(composer.finish(), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_finish_requires_a_non_blank_paragraph() {
        let mut composer = composing();
        {
            let form = composer.form_mut().unwrap();
            type_into(form, "Groceries");
            form.add_paragraph();
            type_into(form, "   ");
        }
        assert_eq!(composer.finish(), Err(ValidationError::NoContent));
        assert!(composer.is_composing());
    }

    #[test]
    fn test_finish_emits_paragraphs_exactly_as_typed() {
        let mut composer = composing();
        {
            let form = composer.form_mut().unwrap();
            type_into(form, "Groceries");
            form.add_paragraph();
            type_into(form, "  milk  ");
            form.add_paragraph(); // left empty on purpose
        }
        let draft = composer.finish().unwrap();
        assert_eq!(draft.title, "Groceries");
        assert_eq!(draft.paragraphs, vec!["  milk  ".to_string(), String::new()]);
        assert_eq!(composer, Composer::Idle);
    }

    #[test]
    fn test_cancel_discards_everything() {
        let mut composer = composing();
        {
            let form = composer.form_mut().unwrap();
            type_into(form, "half-finished");
            form.add_paragraph();
        }
        composer.cancel();
        assert_eq!(composer, Composer::Idle);
    }

    #[test]
    fn test_add_paragraph_moves_cursor_to_new_slot() {
        let mut form = ComposerForm::new(NoteColor::Red);
        form.add_paragraph();
        assert_eq!(form.field, ComposerField::Paragraph(0));
        form.add_paragraph();
        assert_eq!(form.field, ComposerField::Paragraph(1));
    }

    #[test]
    fn test_focus_cycles_through_title_and_paragraphs() {
        let mut form = ComposerForm::new(NoteColor::Red);
        form.add_paragraph();
        form.add_paragraph();
        form.field = ComposerField::Title;

        form.focus_next();
        assert_eq!(form.field, ComposerField::Paragraph(0));
        form.focus_next();
        assert_eq!(form.field, ComposerField::Paragraph(1));
        form.focus_next();
        assert_eq!(form.field, ComposerField::Title);
        form.focus_previous();
        assert_eq!(form.field, ComposerField::Paragraph(1));
    }

    #[test]
    fn test_typing_edits_the_focused_field() {
        let mut form = ComposerForm::new(NoteColor::Red);
        type_into(&mut form, "Title");
        form.add_paragraph();
        type_into(&mut form, "line");
        form.pop_char();
        assert_eq!(form.title, "Title");
        assert_eq!(form.paragraphs[0], "lin");
    }
}
