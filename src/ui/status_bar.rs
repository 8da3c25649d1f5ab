use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus, Mode};
use crate::composer::Composer;

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mode_indicator = match (&app.composer, app.mode) {
        (Composer::PickingColor { .. }, _) => "PALETTE",
        (Composer::Composing(_), _) => "COMPOSE",
        (Composer::Idle, Mode::EditParagraph) => "EDIT",
        (Composer::Idle, Mode::Normal) => match app.focus {
            Focus::Board => "BOARD",
            Focus::Note => "NOTE",
        },
    };

    let done: usize = app.store.notes().iter().map(|n| n.done_count()).sum();
    let total: usize = app.store.notes().iter().map(|n| n.paragraphs.len()).sum();

    let logo = Span::styled(
        " ◆ Stickypad ",
        Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let mode = Span::styled(
        format!(" {} ", mode_indicator),
        Style::default().fg(theme.background).bg(theme.warning),
    );

    let message = Span::styled(
        format!(" {} ", app.status.as_deref().unwrap_or("")),
        Style::default().fg(theme.foreground),
    );

    let counts = Span::styled(
        format!("{} notes · {}/{} done", app.store.len(), done, total),
        Style::default().fg(theme.success),
    );

    let help_key = Span::styled(
        " ? for help ",
        Style::default().fg(theme.foreground).bg(theme.surface),
    );

    let left_content = vec![logo, Span::raw(" "), mode, Span::raw(" "), message];
    let right_content = vec![counts, Span::raw(" "), help_key];

    let left_width: usize = left_content.iter().map(|s| s.content.width()).sum();
    let right_width: usize = right_content.iter().map(|s| s.content.width()).sum();
    let padding = (area.width as usize).saturating_sub(left_width + right_width);

    let mut spans = left_content;
    spans.push(Span::styled(
        " ".repeat(padding),
        Style::default().bg(theme.surface),
    ));
    spans.extend(right_content);

    let status_bar =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface));

    f.render_widget(status_bar, area);
}
