//! Application state: the store, the composer, and everything the UI
//! needs to draw a frame.

use log::{error, warn};

use crate::composer::{Composer, ValidationError};
use crate::config::Config;
use crate::export::Exporter;
use crate::model::Note;
use crate::storage::{Storage, StorageResult};
use crate::store::{LoadOutcome, NoteStore};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    /// Moving between notes on the board.
    Board,
    /// Moving between paragraphs of the open note.
    Note,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Normal,
    /// A paragraph of the selected note is being retyped in place.
    EditParagraph,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogState {
    None,
    DeleteConfirm,
    /// The composer draft failed validation; dismissing returns to the
    /// pad with every field intact.
    InvalidNote(ValidationError),
    /// The board file on disk could not be used.
    StorageFault(String),
    Help,
}

pub struct App {
    pub store: NoteStore,
    pub composer: Composer,
    pub exporter: Exporter,
    pub config: Config,
    pub theme: Theme,

    pub focus: Focus,
    pub mode: Mode,
    pub selected_note: usize,
    pub selected_paragraph: usize,
    /// Scratch text while a paragraph is being retyped.
    pub input_buffer: String,
    pub dialog: DialogState,
    /// Last outcome worth telling the user about, shown in the status bar.
    pub status: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_name(&config.theme);
        let exporter = Exporter::new(config.export_path());
        let storage = Storage::new(config.board_path());

        let (store, dialog) = match NoteStore::load(storage) {
            LoadOutcome::Ready(store) => (store, DialogState::None),
            LoadOutcome::Damaged { store, error } => {
                error!("board failed to load: {error}");
                (store, DialogState::StorageFault(error.to_string()))
            }
        };

        // The pad's visibility survives restarts, its contents do not.
        // The color was never persisted either, so reopen at the palette.
        let composer = if store.composer_visible() && dialog == DialogState::None {
            Composer::PickingColor { highlighted: 0 }
        } else {
            Composer::Idle
        };

        Self {
            store,
            composer,
            exporter,
            config,
            theme,
            focus: Focus::Board,
            mode: Mode::Normal,
            selected_note: 0,
            selected_paragraph: 0,
            input_buffer: String::new(),
            dialog,
            status: None,
        }
    }

    pub fn current_note(&self) -> Option<&Note> {
        self.store.get(self.selected_note)
    }

    // ------------------------------------------------------------------
    // Board navigation
    // ------------------------------------------------------------------

    pub fn next_note(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.selected_note = (self.selected_note + 1) % self.store.len();
        self.selected_paragraph = 0;
    }

    pub fn previous_note(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.selected_note = if self.selected_note == 0 {
            self.store.len() - 1
        } else {
            self.selected_note - 1
        };
        self.selected_paragraph = 0;
    }

    pub fn next_paragraph(&mut self) {
        if let Some(note) = self.current_note() {
            if self.selected_paragraph + 1 < note.paragraphs.len() {
                self.selected_paragraph += 1;
            }
        }
    }

    pub fn previous_paragraph(&mut self) {
        if self.selected_paragraph > 0 {
            self.selected_paragraph -= 1;
        }
    }

    /// Paragraph focus is only meaningful on an open, non-empty note.
    pub fn can_focus_note(&self) -> bool {
        self.current_note()
            .map(|n| n.is_open && !n.paragraphs.is_empty())
            .unwrap_or(false)
    }

    // ------------------------------------------------------------------
    // Note operations
    // ------------------------------------------------------------------

    pub fn toggle_open_selected(&mut self) {
        if self.store.is_empty() {
            return;
        }
        let result = self.store.toggle_open(self.selected_note);
        self.report_persist(result);
        if !self.can_focus_note() {
            self.focus = Focus::Board;
            self.selected_paragraph = 0;
        }
    }

    pub fn request_delete_selected(&mut self) {
        if !self.store.is_empty() {
            self.dialog = DialogState::DeleteConfirm;
        }
    }

    pub fn confirm_delete(&mut self) {
        self.dialog = DialogState::None;
        if self.store.is_empty() {
            return;
        }
        let result = self.store.delete_note(self.selected_note);
        self.report_persist(result);
        if self.selected_note >= self.store.len() && !self.store.is_empty() {
            self.selected_note = self.store.len() - 1;
        }
        self.selected_paragraph = 0;
        self.focus = Focus::Board;
    }

    pub fn toggle_done_selected(&mut self) {
        if self.can_focus_note() {
            let result = self
                .store
                .toggle_done(self.selected_note, self.selected_paragraph);
            self.report_persist(result);
        }
    }

    pub fn begin_edit_paragraph(&mut self) {
        let text = self
            .current_note()
            .and_then(|note| note.paragraphs.get(self.selected_paragraph))
            .map(|paragraph| paragraph.text.clone());
        if let Some(text) = text {
            self.input_buffer = text;
            self.mode = Mode::EditParagraph;
        }
    }

    pub fn commit_edit_paragraph(&mut self) {
        let text = std::mem::take(&mut self.input_buffer);
        let result = self
            .store
            .edit_paragraph(self.selected_note, self.selected_paragraph, text);
        self.report_persist(result);
        self.mode = Mode::Normal;
    }

    pub fn cancel_edit_paragraph(&mut self) {
        self.input_buffer.clear();
        self.mode = Mode::Normal;
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    pub fn export_selected(&mut self) {
        let Some(note) = self.current_note() else {
            return;
        };
        match self.exporter.export_note(note) {
            Ok(path) => self.status = Some(format!("exported {}", path.display())),
            Err(err) => {
                warn!("export failed: {err}");
                self.status = Some(format!("export failed: {err}"));
            }
        }
    }

    pub fn export_everything(&mut self) {
        match self.exporter.export_all(self.store.notes()) {
            Ok(paths) => {
                self.status = Some(format!(
                    "exported {} notes to {}",
                    paths.len(),
                    self.exporter.dir().display()
                ))
            }
            Err(err) => {
                warn!("export failed: {err}");
                self.status = Some(format!("export failed: {err}"));
            }
        }
    }

    // ------------------------------------------------------------------
    // Composer
    // ------------------------------------------------------------------

    pub fn toggle_palette(&mut self) {
        self.composer.toggle_palette();
    }

    pub fn composer_pick_color(&mut self) {
        self.composer.pick_highlighted();
        if self.composer.is_composing() {
            let result = self.store.set_composer_visible(true);
            self.report_persist(result);
        }
    }

    pub fn composer_cancel(&mut self) {
        self.composer.cancel();
        // Also covers the palette restored from a persisted visibility
        // flag; a palette opened this session never set the flag.
        if self.store.composer_visible() {
            let result = self.store.set_composer_visible(false);
            self.report_persist(result);
        }
    }

    /// Commits the staged note, or raises the blocking validation dialog
    /// and leaves the pad exactly as it was.
    pub fn composer_commit(&mut self) {
        match self.composer.finish() {
            Ok(draft) => {
                let title = draft.title.clone();
                let result = self.store.add_note(draft);
                self.report_persist(result);
                let result = self.store.set_composer_visible(false);
                self.report_persist(result);
                self.selected_note = self.store.len() - 1;
                self.selected_paragraph = 0;
                self.status = Some(format!("created '{title}'"));
            }
            Err(reason) => self.dialog = DialogState::InvalidNote(reason),
        }
    }

    // ------------------------------------------------------------------
    // Storage fault recovery
    // ------------------------------------------------------------------

    pub fn storage_fault_start_fresh(&mut self) {
        match self.store.start_fresh() {
            Ok(()) => {
                self.dialog = DialogState::None;
                self.status = Some("started a fresh board".to_string());
            }
            Err(err) => {
                error!("fresh start failed: {err}");
                self.dialog = DialogState::StorageFault(err.to_string());
            }
        }
    }

    /// A failed write-through is logged and shown, the in-memory change
    /// stands.
    fn report_persist(&mut self, result: StorageResult<()>) {
        if let Err(err) = result {
            warn!("write-through failed: {err}");
            self.status = Some(format!("couldn't save: {err}"));
        }
    }
}
