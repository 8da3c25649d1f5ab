use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::composer::{Composer, ComposerField};
use crate::model::NoteColor;
use crate::ui::centered_rect;

/// The color palette row: first step of composing a note.
pub fn render_palette(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let highlighted = match app.composer {
        Composer::PickingColor { highlighted } => highlighted,
        _ => return,
    };

    let area = f.area();
    let dialog_area = centered_rect(area, 40, 7);
    f.render_widget(Clear, dialog_area);

    let mut swatches: Vec<Span> = Vec::new();
    for (idx, &color) in NoteColor::all().iter().enumerate() {
        let style = Style::default().fg(theme.note_color(color));
        if idx == highlighted {
            swatches.push(Span::styled("[", Style::default().fg(theme.foreground)));
            swatches.push(Span::styled("●", style.add_modifier(Modifier::BOLD)));
            swatches.push(Span::styled("]", Style::default().fg(theme.foreground)));
        } else {
            swatches.push(Span::raw(" "));
            swatches.push(Span::styled("●", style));
            swatches.push(Span::raw(" "));
        }
        swatches.push(Span::raw(" "));
    }

    let picked = NoteColor::all()[highlighted];
    let content = vec![
        Line::from(""),
        Line::from(swatches),
        Line::from(""),
        Line::from(Span::styled(
            picked.label(),
            Style::default().fg(theme.note_color(picked)),
        )),
        Line::from(Span::styled(
            "←/→: Choose  |  Enter: Pick  |  Esc: Close",
            Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
        )),
    ];

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .title(" New Note ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.background)),
        )
        .alignment(Alignment::Center);

    f.render_widget(dialog, dialog_area);
}

/// The pad: title line plus one input line per paragraph slot.
pub fn render_composer_pad(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let Some(form) = app.composer.form() else {
        return;
    };

    let area = f.area();
    let height = (form.paragraphs.len() as u16 + 9).min(area.height.saturating_sub(2));
    let dialog_area = centered_rect(area, 56, height);
    f.render_widget(Clear, dialog_area);

    let note_color = theme.note_color(form.color);
    let cursor = Span::styled("█", Style::default().fg(note_color));

    let mut content = vec![Line::from("")];

    // Title line
    let mut title_line = vec![Span::styled(
        "Title: ",
        Style::default().fg(theme.muted),
    )];
    title_line.push(Span::styled(
        &form.title,
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD),
    ));
    if form.field == ComposerField::Title {
        title_line.push(cursor.clone());
    }
    content.push(Line::from(title_line));
    content.push(Line::from(""));

    // Paragraph slots
    if form.paragraphs.is_empty() {
        content.push(Line::from(Span::styled(
            "No lines yet. Ctrl+N adds one.",
            Style::default().fg(theme.muted),
        )));
    }
    for (idx, paragraph) in form.paragraphs.iter().enumerate() {
        let mut line = vec![
            Span::styled("· ", Style::default().fg(note_color)),
            Span::styled(paragraph, Style::default().fg(theme.foreground)),
        ];
        if form.field == ComposerField::Paragraph(idx) {
            line.push(cursor.clone());
        }
        content.push(Line::from(line));
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Ctrl+N: Add line  |  Tab: Next field",
        Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
    )));
    content.push(Line::from(Span::styled(
        "Enter: Create  |  Esc: Discard",
        Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
    )));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" New {} Note ", form.color.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(note_color))
                .style(Style::default().bg(theme.surface)),
        )
        .alignment(Alignment::Left);

    f.render_widget(dialog, dialog_area);
}
