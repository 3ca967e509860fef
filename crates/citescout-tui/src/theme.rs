use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct Theme {
    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub active: Color,
    pub spinner: Color,
    pub footer_fg: Color,

    pub error: Color,
    pub info: Color,
    pub collected: Color,
    pub open_access: Color,
    pub paywalled: Color,
}

impl Theme {
    /// Hacker-green terminal theme.
    pub fn hacker() -> Self {
        Self {
            header_fg: Color::Black,
            header_bg: Color::Rgb(0, 210, 0),
            border: Color::DarkGray,
            text: Color::White,
            dim: Color::DarkGray,
            highlight_bg: Color::Rgb(30, 50, 30),
            active: Color::Cyan,
            spinner: Color::Cyan,
            footer_fg: Color::DarkGray,
            error: Color::Red,
            info: Color::Rgb(0, 210, 0),
            collected: Color::Yellow,
            open_access: Color::Rgb(0, 210, 0),
            paywalled: Color::Red,
        }
    }

    /// Modern theme: white text, electric blue accents.
    pub fn modern() -> Self {
        Self {
            header_fg: Color::White,
            header_bg: Color::Rgb(30, 60, 120),
            border: Color::Rgb(60, 60, 80),
            text: Color::White,
            dim: Color::Gray,
            highlight_bg: Color::Rgb(40, 50, 70),
            active: Color::Rgb(80, 160, 255),
            spinner: Color::Rgb(80, 160, 255),
            footer_fg: Color::Gray,
            error: Color::Rgb(255, 80, 80),
            info: Color::Rgb(0, 200, 80),
            collected: Color::Rgb(255, 200, 0),
            open_access: Color::Rgb(0, 200, 80),
            paywalled: Color::Rgb(255, 80, 80),
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Badge color for a source access type string from the service.
    pub fn access_color(&self, access_type: &str) -> Color {
        match access_type {
            "oa" | "repository" | "preprint" => self.open_access,
            "paywalled" => self.paywalled,
            _ => self.dim,
        }
    }
}
