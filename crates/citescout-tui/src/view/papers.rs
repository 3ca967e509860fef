use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use citescout_core::Paper;

use crate::app::App;
use crate::view::{render_hint, render_loading, scroll_offset, truncate};

/// Render the papers result list with a detail pane for the selection.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    if app.loading {
        render_loading(f, area, app);
        return;
    }

    let Some(papers) = app.paper_results() else {
        render_hint(f, area, app, "Press / and type a query to search papers.");
        return;
    };
    if papers.is_empty() {
        render_hint(f, area, app, "No results found for your query.");
        return;
    }

    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(8)]).split(area);
    render_list(f, chunks[0], app, papers);

    if let Some(paper) = papers.get(app.results_cursor) {
        render_detail(f, chunks[1], app, paper);
    }
}

fn render_list(f: &mut Frame, area: Rect, app: &App, papers: &[Paper]) {
    let theme = &app.theme;
    let rows = area.height as usize;
    let offset = scroll_offset(app.results_cursor, rows);
    let width = area.width as usize;

    let mut lines = Vec::with_capacity(rows);
    for (i, paper) in papers.iter().enumerate().skip(offset).take(rows) {
        let selected = i == app.results_cursor;
        let collected = app.collection.contains(paper);

        let marker = if collected { "\u{2605} " } else { "  " };
        let year = paper
            .year
            .map(|y| format!(" ({})", y))
            .unwrap_or_default();
        let cites = paper
            .citation_count
            .filter(|&c| c > 0)
            .map(|c| format!("  {} citations", c))
            .unwrap_or_default();

        let title_width = width.saturating_sub(marker.len() + year.len() + cites.len() + 2);
        let mut spans = vec![Span::styled(
            marker,
            Style::default().fg(theme.collected),
        )];
        let title_style = if selected {
            Style::default()
                .fg(theme.text)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        spans.push(Span::styled(truncate(&paper.title, title_width), title_style));
        spans.push(Span::styled(year, Style::default().fg(theme.dim)));
        spans.push(Span::styled(cites, Style::default().fg(theme.dim)));

        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// Authors line: first three names, then "et al.".
fn authors_line(paper: &Paper) -> String {
    let mut names: Vec<&str> = paper.authors.iter().map(|a| a.name.as_str()).collect();
    let et_al = names.len() > 3;
    names.truncate(3);
    let mut line = names.join(", ");
    if et_al {
        line.push_str(" et al.");
    }
    if line.is_empty() {
        line.push_str("Unknown");
    }
    line
}

fn render_detail(f: &mut Frame, area: Rect, app: &App, paper: &Paper) {
    let theme = &app.theme;
    let mut lines = Vec::new();

    let mut meta = vec![Span::styled(
        authors_line(paper),
        Style::default().fg(theme.text),
    )];
    if let Some(journal) = &paper.journal {
        meta.push(Span::styled(
            format!("  \u{b7} {}", journal),
            Style::default().fg(theme.dim),
        ));
    }
    lines.push(Line::from(meta));

    if let Some(doi) = &paper.doi {
        lines.push(Line::from(vec![
            Span::styled("doi: ", Style::default().fg(theme.dim)),
            Span::styled(doi.clone(), Style::default().fg(theme.text)),
        ]));
    }

    for source in paper.sources.iter().take(3) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", source.access_type.to_uppercase()),
                Style::default().fg(theme.access_color(&source.access_type)),
            ),
            Span::styled(format!("{}: ", source.label), Style::default().fg(theme.text)),
            Span::styled(source.url.clone(), Style::default().fg(theme.dim)),
        ]));
    }

    let mut formats = Vec::new();
    if paper.bibtex.is_some() {
        formats.push("b:BibTeX");
    }
    if paper.ris.is_some() {
        formats.push("r:RIS");
    }
    if paper.formatted_citation(Paper::STANDARD_STYLE).is_some() {
        formats.push("t:Standard");
    }
    if !formats.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("export: {}", formats.join("  ")),
            Style::default().fg(theme.dim),
        )));
    }

    let title = paper
        .source_api
        .as_deref()
        .map(|api| format!(" via {} ", api))
        .unwrap_or_else(|| " result ".to_string());
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(title, Style::default().fg(theme.dim)));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
