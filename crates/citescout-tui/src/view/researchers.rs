use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};

use crate::app::App;
use crate::view::{render_hint, render_loading, scroll_offset, truncate};

/// Render the researchers result list.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    if app.loading {
        render_loading(f, area, app);
        return;
    }

    let Some(researchers) = app.researcher_results() else {
        render_hint(
            f,
            area,
            app,
            "Press / and type a name to search researchers.",
        );
        return;
    };
    if researchers.is_empty() {
        render_hint(f, area, app, "No results found for your query.");
        return;
    }

    let theme = &app.theme;
    let rows_available = (area.height as usize).saturating_sub(1); // header row
    let offset = scroll_offset(app.results_cursor, rows_available);

    let header = Row::new(vec![
        Cell::from(" Name"),
        Cell::from("Affiliation"),
        Cell::from("h"),
        Cell::from("Citations"),
        Cell::from("Papers"),
        Cell::from("Source"),
    ])
    .style(Style::default().fg(theme.dim).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = researchers
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows_available)
        .map(|(i, r)| {
            let style = if i == app.results_cursor {
                Style::default()
                    .fg(theme.text)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            Row::new(vec![
                Cell::from(format!(" {}", truncate(&r.name, 30))),
                Cell::from(truncate(r.affiliation.as_deref().unwrap_or("-"), 36)),
                Cell::from(r.h_index.map(|h| h.to_string()).unwrap_or_else(|| "-".into())),
                Cell::from(
                    r.citation_count
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "-".into()),
                ),
                Cell::from(
                    r.paper_count
                        .map(|p| p.to_string())
                        .unwrap_or_else(|| "-".into()),
                ),
                Cell::from(r.source.clone().unwrap_or_default()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(32),
            Constraint::Min(20),
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(16),
        ],
    )
    .header(header);

    f.render_widget(table, area);
}
