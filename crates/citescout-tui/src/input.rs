use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::app::{InputMode, Mode};

/// Map a crossterm terminal event to an action, respecting input mode.
pub fn map_event(event: &Event, input_mode: &InputMode) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits regardless of mode
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::Quit;
            }

            match input_mode {
                InputMode::Normal => map_key_normal(key),
                InputMode::Query => map_key_query(key),
            }
        }
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::None,
    }
}

fn map_key_normal(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('g') | KeyCode::Home => Action::GoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GoBottom,
        KeyCode::Tab => Action::NextMode,
        KeyCode::Char('1') => Action::SetMode(Mode::Papers),
        KeyCode::Char('2') => Action::SetMode(Mode::Researchers),
        KeyCode::Char('3') => Action::SetMode(Mode::Collection),
        KeyCode::Char('/') | KeyCode::Char('i') => Action::StartQuery,
        KeyCode::Enter => Action::Submit,
        KeyCode::Char(' ') => Action::ToggleCollect,
        KeyCode::Char('x') => Action::ClearCollection,
        KeyCode::Char('b') => Action::ExportBibtex,
        KeyCode::Char('r') => Action::ExportRis,
        KeyCode::Char('t') => Action::ExportStyled,
        KeyCode::Char('e') => Action::ExportCollection,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Esc => Action::Dismiss,
        _ => Action::None,
    }
}

fn map_key_query(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::QueryCancel,
        KeyCode::Enter => Action::QueryConfirm,
        KeyCode::Char(c) => Action::QueryInput(c),
        KeyCode::Backspace => Action::QueryInput('\x08'), // sentinel for backspace
        KeyCode::Left => Action::CursorLeft,
        KeyCode::Right => Action::CursorRight,
        KeyCode::Home => Action::CursorHome,
        KeyCode::End => Action::CursorEnd,
        _ => Action::None,
    }
}
