use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::composer::ValidationError;
use crate::ui::centered_rect;

pub fn render_delete_confirm_dialog(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let dialog_area = centered_rect(f.area(), 50, 9);
    f.render_widget(Clear, dialog_area);

    let note_title = app
        .current_note()
        .map(|n| n.title.as_str())
        .unwrap_or("this note");

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Delete note?",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            note_title,
            Style::default().fg(theme.foreground),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "y: Yes  |  n: No",
            Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
        )),
    ];

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Confirm Delete ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .style(Style::default().bg(theme.background)),
        )
        .alignment(Alignment::Center);

    f.render_widget(dialog, dialog_area);
}

/// Blocking message for a draft that failed validation. Dismissing it
/// returns to the pad with every field intact.
pub fn render_invalid_note_dialog(f: &mut Frame, app: &App, reason: ValidationError) {
    let theme = &app.theme;
    let dialog_area = centered_rect(f.area(), 50, 9);
    f.render_widget(Clear, dialog_area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Not quite finished",
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            reason.to_string(),
            Style::default().fg(theme.foreground),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to keep writing",
            Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
        )),
    ];

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Can't Create Yet ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.warning))
                .style(Style::default().bg(theme.background)),
        )
        .alignment(Alignment::Center);

    f.render_widget(dialog, dialog_area);
}

pub fn render_storage_fault_dialog(f: &mut Frame, app: &App, message: &str) {
    let theme = &app.theme;
    let dialog_area = centered_rect(f.area(), 58, 14);
    f.render_widget(Clear, dialog_area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Saved board could not be loaded",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.config.board_path().display().to_string(),
            Style::default().fg(theme.warning),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(theme.foreground))),
        Line::from(""),
        Line::from(Span::styled(
            "Starting fresh moves the damaged file aside first.",
            Style::default().fg(theme.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "s",
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Start fresh  ", Style::default().fg(theme.foreground)),
            Span::styled(
                "q",
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Quit and keep the file", Style::default().fg(theme.foreground)),
        ]),
    ];

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .style(Style::default().bg(theme.background)),
        )
        .alignment(Alignment::Center);

    f.render_widget(dialog, dialog_area);
}

pub fn render_help_dialog(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let dialog_area = centered_rect(f.area(), 52, 24);
    f.render_widget(Clear, dialog_area);

    let key_style = Style::default().fg(theme.warning);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled("  Board", header_style)),
        Line::from(vec![
            Span::styled("  j/k      ", key_style),
            Span::styled("Move between notes", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Enter/o  ", key_style),
            Span::styled("Open / close note", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Tab      ", key_style),
            Span::styled("Focus the open note's lines", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  n        ", key_style),
            Span::styled("New note (pick a color first)", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  d        ", key_style),
            Span::styled("Delete note", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  s / S    ", key_style),
            Span::styled("Export note / export all", desc_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Note lines", header_style)),
        Line::from(vec![
            Span::styled("  j/k      ", key_style),
            Span::styled("Move between lines", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Space/x  ", key_style),
            Span::styled("Mark / unmark line as done", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  e/Enter  ", key_style),
            Span::styled("Retype line (clears its mark)", desc_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Composer", header_style)),
        Line::from(vec![
            Span::styled("  Ctrl+N   ", key_style),
            Span::styled("Add a line", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Enter    ", key_style),
            Span::styled("Create the note", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Esc      ", key_style),
            Span::styled("Discard", desc_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
        )),
    ];

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.background)),
        )
        .alignment(Alignment::Left);

    f.render_widget(dialog, dialog_area);
}
