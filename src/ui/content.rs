use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus, Mode};

/// The selected note: its paragraphs when open, a collapsed summary when
/// closed, a hint when the board is empty.
pub fn render_content(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let is_focused = app.focus == Focus::Note;

    let Some(note) = app.current_note() else {
        let block = Block::default()
            .title(" Stickypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No notes yet.",
                Style::default().fg(theme.muted),
            )),
            Line::from(Span::styled(
                "Press 'n' to pick a color and write your first one.",
                Style::default().fg(theme.muted),
            )),
        ])
        .block(block);
        f.render_widget(hint, area);
        return;
    };

    let note_color = theme.note_color(note.color);
    let border_style = if is_focused {
        Style::default().fg(note_color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(note_color)
    };

    let block = Block::default()
        .title(format!(" {} ", note.title))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    if !note.is_open {
        let summary = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "{} lines, {} done",
                    note.paragraphs.len(),
                    note.done_count()
                ),
                Style::default().fg(theme.muted),
            )),
            Line::from(Span::styled(
                "Closed. Press Enter to open.",
                Style::default().fg(theme.muted),
            )),
        ]);
        f.render_widget(summary, inner_area);
        return;
    }

    // Keep the selected paragraph visible
    let height = inner_area.height as usize;
    let skip = if height == 0 {
        0
    } else {
        app.selected_paragraph.saturating_sub(height - 1)
    };

    let editing = app.mode == Mode::EditParagraph;
    let lines: Vec<Line> = note
        .paragraphs
        .iter()
        .enumerate()
        .skip(skip)
        .take(height)
        .map(|(idx, paragraph)| {
            let is_cursor = is_focused && idx == app.selected_paragraph;

            if is_cursor && editing {
                return Line::from(vec![
                    Span::styled("> ", Style::default().fg(theme.accent)),
                    Span::styled(&app.input_buffer, Style::default().fg(theme.foreground)),
                    Span::styled("█", Style::default().fg(theme.accent)),
                ])
                .style(Style::default().bg(theme.selection));
            }

            let marker = if paragraph.done {
                Span::styled("✓ ", Style::default().fg(theme.success))
            } else {
                Span::styled("· ", Style::default().fg(theme.muted))
            };
            let text_style = if paragraph.done {
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(theme.foreground)
            };

            let line = Line::from(vec![marker, Span::styled(&paragraph.text, text_style)]);
            if is_cursor {
                line.style(Style::default().bg(theme.selection))
            } else {
                line
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner_area);
}
