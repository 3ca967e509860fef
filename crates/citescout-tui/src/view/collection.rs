use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;
use crate::view::{render_hint, scroll_offset, truncate};

/// Render the collected citations with the selected entry's citation text.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    if app.collection.is_empty() {
        render_hint(
            f,
            area,
            app,
            "Nothing collected yet. Press Space on a paper result to collect it.",
        );
        return;
    }

    let theme = &app.theme;
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(6)]).split(area);

    let list_area = chunks[0];
    let rows = list_area.height as usize;
    let cursor = app
        .collection_cursor
        .min(app.collection.len().saturating_sub(1));
    let offset = scroll_offset(cursor, rows);
    let width = list_area.width as usize;

    let mut lines = Vec::with_capacity(rows);
    for (i, entry) in app
        .collection
        .entries()
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows)
    {
        let style = if i == cursor {
            Style::default()
                .fg(theme.text)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:>3}. ", i + 1), Style::default().fg(theme.dim)),
            Span::styled(truncate(&entry.title, width.saturating_sub(7)), style),
        ]));
    }
    f.render_widget(Paragraph::new(lines), list_area);

    if let Some(entry) = app.collection.entries().get(cursor) {
        let mut detail = vec![Line::from(Span::styled(
            entry.standard.clone(),
            Style::default().fg(theme.text),
        ))];
        if let Some(doi) = &entry.doi {
            detail.push(Line::from(vec![
                Span::styled("doi: ", Style::default().fg(theme.dim)),
                Span::styled(doi.clone(), Style::default().fg(theme.text)),
            ]));
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(
                " standard citation ",
                Style::default().fg(theme.dim),
            ));
        f.render_widget(Paragraph::new(detail).wrap(Wrap { trim: false }).block(block), chunks[1]);
    }
}
