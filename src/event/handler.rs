//! The event loop and key dispatch.
//!
//! Everything is synchronous: draw a frame, block on the next terminal
//! event, mutate state, repeat. Dialogs take the keys first, then the
//! composer, then the edit line, then board navigation.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{App, DialogState, Focus, Mode};
use crate::composer::Composer;
use crate::ui;

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(app, key) {
                return Ok(());
            }
        }
    }
}

/// Returns true when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match app.dialog.clone() {
        DialogState::StorageFault(_) => {
            match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') => app.storage_fault_start_fresh(),
                KeyCode::Char('q') | KeyCode::Char('Q') => return true,
                _ => {}
            }
            return false;
        }
        DialogState::DeleteConfirm => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.dialog = DialogState::None;
                }
                _ => {}
            }
            return false;
        }
        DialogState::InvalidNote(_) => {
            // Dismissing drops back into the pad with everything intact.
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                app.dialog = DialogState::None;
            }
            return false;
        }
        DialogState::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')
            ) {
                app.dialog = DialogState::None;
            }
            return false;
        }
        DialogState::None => {}
    }

    match app.composer {
        Composer::PickingColor { .. } => {
            handle_palette_key(app, key);
            return false;
        }
        Composer::Composing(_) => {
            handle_composer_key(app, key);
            return false;
        }
        Composer::Idle => {}
    }

    if app.mode == Mode::EditParagraph {
        handle_edit_key(app, key);
        return false;
    }

    handle_board_key(app, key)
}

fn handle_palette_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.composer.highlight_previous(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.composer.highlight_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.composer_pick_color(),
        KeyCode::Esc | KeyCode::Char('n') => app.composer_cancel(),
        _ => {}
    }
}

fn handle_composer_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('n') = key.code {
            if let Some(form) = app.composer.form_mut() {
                form.add_paragraph();
            }
        }
        return;
    }
    match key.code {
        KeyCode::Enter => app.composer_commit(),
        KeyCode::Esc => app.composer_cancel(),
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.composer.form_mut() {
                form.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.composer.form_mut() {
                form.focus_previous();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.composer.form_mut() {
                form.push_char(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.composer.form_mut() {
                form.pop_char();
            }
        }
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit_paragraph(),
        KeyCode::Esc => app.cancel_edit_paragraph(),
        KeyCode::Char(c) => app.input_buffer.push(c),
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        _ => {}
    }
}

fn handle_board_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => app.dialog = DialogState::Help,
        KeyCode::Char('n') => app.toggle_palette(),
        KeyCode::Char('d') => app.request_delete_selected(),
        KeyCode::Char('s') => app.export_selected(),
        KeyCode::Char('S') => app.export_everything(),
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Board if app.can_focus_note() => Focus::Note,
                _ => Focus::Board,
            };
        }
        KeyCode::Down | KeyCode::Char('j') => match app.focus {
            Focus::Board => app.next_note(),
            Focus::Note => app.next_paragraph(),
        },
        KeyCode::Up | KeyCode::Char('k') => match app.focus {
            Focus::Board => app.previous_note(),
            Focus::Note => app.previous_paragraph(),
        },
        KeyCode::Enter | KeyCode::Char('o') => match app.focus {
            Focus::Board => app.toggle_open_selected(),
            Focus::Note => app.begin_edit_paragraph(),
        },
        KeyCode::Char('e') => {
            if app.focus == Focus::Note {
                app.begin_edit_paragraph();
            }
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if app.focus == Focus::Note {
                app.toggle_done_selected();
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if app.can_focus_note() {
                app.focus = Focus::Note;
            }
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Esc => {
            app.focus = Focus::Board;
        }
        _ => {}
    }
    false
}
