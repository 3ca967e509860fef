use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme::Theme;

/// Render the help overlay as a centered popup.
pub fn render(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    let popup = centered_rect(60, 24, area);

    let lines = vec![
        Line::from(Span::styled(
            " Keyboard Shortcuts ",
            Style::default()
                .fg(theme.header_fg)
                .bg(theme.header_bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section_header("Modes", theme),
        key_line("1 / 2 / 3", "Papers / Researchers / Collection", theme),
        key_line("Tab", "Next mode", theme),
        Line::from(""),
        section_header("Search", theme),
        key_line("/ or i", "Edit query", theme),
        key_line("Enter", "Run search (line submit)", theme),
        key_line("Esc", "Stop editing / dismiss status", theme),
        Line::from(""),
        section_header("Results & Collection", theme),
        key_line("j / k", "Move down / up", theme),
        key_line("g / G", "Go to top / bottom", theme),
        key_line("Space", "Collect / uncollect paper", theme),
        key_line("b / r / t", "Export BibTeX / RIS / Standard text", theme),
        key_line("e", "Export whole collection", theme),
        key_line("x", "Clear collection", theme),
        Line::from(""),
        section_header("Global", theme),
        key_line("?", "Toggle this help", theme),
        key_line("q / Ctrl+c", "Quit", theme),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(theme.active)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("   {:<12}", key), Style::default().fg(theme.text)),
        Span::styled(desc.to_string(), Style::default().fg(theme.dim)),
    ])
}

/// Create a centered rectangle of the given width (columns) and height (rows).
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}
