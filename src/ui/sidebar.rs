use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus, Mode};

pub fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    // Room inside the border for "● title 2/3"
    let inner_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = app
        .store
        .notes()
        .iter()
        .enumerate()
        .map(|(idx, note)| {
            let is_selected = idx == app.selected_note;
            let marker = if note.is_open { "▼" } else { "▶" };
            let counts = format!("{}/{}", note.done_count(), note.paragraphs.len());

            let fixed = 7 + counts.width(); // dot, marker, spaces
            let title = truncate_to_width(&note.title, inner_width.saturating_sub(fixed));

            let title_style = if is_selected {
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground)
            };

            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(theme.note_color(note.color))),
                Span::styled(format!("{} ", marker), Style::default().fg(theme.muted)),
                Span::styled(title, title_style),
                Span::raw(" "),
                Span::styled(counts, Style::default().fg(theme.muted)),
            ]))
        })
        .collect();

    let border_style = if app.focus == Focus::Board && app.mode == Mode::Normal {
        Style::default().fg(theme.border_focused)
    } else {
        Style::default().fg(theme.border)
    };

    let title = format!(" Board ({}) ", app.store.len());

    let sidebar = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(" ");

    let mut list_state = ListState::default();
    if !app.store.is_empty() {
        list_state.select(Some(app.selected_note));
    }

    f.render_stateful_widget(sidebar, area, &mut list_state);
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_titles() {
        assert_eq!(truncate_to_width("Groceries", 20), "Groceries");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let out = truncate_to_width("a very long note title", 10);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 10);
    }

    #[test]
    fn test_truncate_handles_wide_chars() {
        let out = truncate_to_width("日本語のタイトル", 6);
        assert!(out.width() <= 6);
    }
}
