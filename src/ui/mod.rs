mod composer;
mod content;
mod dialogs;
mod sidebar;
mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::{App, DialogState};
use crate::composer::Composer;

pub use composer::{render_composer_pad, render_palette};
pub use content::render_content;
pub use dialogs::{
    render_delete_confirm_dialog, render_help_dialog, render_invalid_note_dialog,
    render_storage_fault_dialog,
};
pub use sidebar::render_sidebar;
pub use status_bar::render_status_bar;

pub fn render(f: &mut Frame, app: &mut App) {
    // Main area + status bar
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Main area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    // Board list on the left, selected note on the right
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(vertical_chunks[0]);

    render_sidebar(f, app, chunks[0]);
    render_content(f, app, chunks[1]);
    render_status_bar(f, app, vertical_chunks[1]);

    // Composer overlays the board
    match &app.composer {
        Composer::PickingColor { .. } => render_palette(f, app),
        Composer::Composing(_) => render_composer_pad(f, app),
        Composer::Idle => {}
    }

    // Dialogs go on top of everything, including the pad
    match &app.dialog {
        DialogState::DeleteConfirm => render_delete_confirm_dialog(f, app),
        DialogState::InvalidNote(reason) => render_invalid_note_dialog(f, app, *reason),
        DialogState::StorageFault(message) => render_storage_fault_dialog(f, app, message),
        DialogState::Help => render_help_dialog(f, app),
        DialogState::None => {}
    }
}

/// Centered dialog area, clamped to the frame.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let dialog_width = width.min(area.width.saturating_sub(4));
    let dialog_height = height.min(area.height.saturating_sub(4));
    Rect {
        x: (area.width.saturating_sub(dialog_width)) / 2,
        y: (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    }
}
