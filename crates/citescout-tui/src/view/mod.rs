pub mod collection;
pub mod confirm;
pub mod help;
pub mod papers;
pub mod researchers;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, InputMode, Mode, StatusKind};

/// Spinner frames for animated progress indication.
const SPINNER_FRAMES: &[char] = &[
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
    '\u{2807}', '\u{280F}',
];

/// Get the current spinner character based on a tick counter.
pub fn spinner_char(tick: usize) -> char {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Truncate a string to fit in `max_width` columns, appending "\u{2026}" if truncated.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.len() <= max_width {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    truncated.push('\u{2026}');
    truncated
}

/// First visible row so that `cursor` stays inside a window of `rows`.
pub fn scroll_offset(cursor: usize, rows: usize) -> usize {
    if rows == 0 {
        return cursor;
    }
    cursor.saturating_sub(rows.saturating_sub(1))
}

/// Render the mode tab bar.
pub fn render_tabs(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = vec![Span::styled(" citescout ", theme.header_style())];

    for (idx, mode) in [Mode::Papers, Mode::Researchers, Mode::Collection]
        .into_iter()
        .enumerate()
    {
        let label = if mode == Mode::Collection {
            format!(" {}:{} ({}) ", idx + 1, mode.label(), app.collection.len())
        } else {
            format!(" {}:{} ", idx + 1, mode.label())
        };
        let style = if app.mode == mode {
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::styled("\u{2502}", Style::default().fg(theme.border)));
    }
    spans.pop();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the query line (searchable modes only).
pub fn render_query_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let editing = app.input_mode == InputMode::Query;

    let mut spans = vec![Span::styled(
        " / ",
        Style::default()
            .fg(theme.active)
            .add_modifier(Modifier::BOLD),
    )];

    if app.query.is_empty() && !editing {
        spans.push(Span::styled(
            app.mode.placeholder(),
            Style::default().fg(theme.dim),
        ));
    } else if editing {
        // Split at the cursor and draw a block cursor between the halves.
        let (before, after) = app.query.split_at(app.query_cursor);
        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(theme.text),
        ));
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().fg(theme.active),
        ));
        spans.push(Span::styled(
            after.to_string(),
            Style::default().fg(theme.text),
        ));
    } else {
        spans.push(Span::styled(
            app.query.clone(),
            Style::default().fg(theme.text),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the dismissable status line.
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let Some(status) = &app.status else {
        f.render_widget(Paragraph::new(""), area);
        return;
    };

    let color = match status.kind {
        StatusKind::Error => theme.error,
        StatusKind::Info => theme.info,
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", status.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("(Esc dismisses)", Style::default().fg(theme.dim)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Render per-mode key hints in the footer row.
pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let hints = match app.mode {
        Mode::Papers => " / search  Enter run  Space collect  b/r/t export  Tab mode  ? help  q quit",
        Mode::Researchers => " / search  Enter run  Tab mode  ? help  q quit",
        Mode::Collection => " e export all  x clear  Tab mode  ? help  q quit",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(theme.footer_fg),
        ))),
        area,
    );
}

/// Centered loading indicator drawn instead of the result list while a
/// search is outstanding.
pub fn render_loading(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", spinner_char(app.tick)),
            Style::default().fg(theme.spinner),
        ),
        Span::styled("Searching\u{2026}", Style::default().fg(theme.text)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Dim single-line hint (empty states).
pub fn render_hint(f: &mut Frame, area: Rect, app: &App, text: &str) {
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", text),
            Style::default().fg(app.theme.dim),
        ))),
        area,
    );
}
