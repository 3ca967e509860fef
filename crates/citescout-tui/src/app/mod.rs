mod backend;
mod update;

use std::path::PathBuf;

use ratatui::layout::{Constraint, Layout};
use tokio::sync::mpsc;

use citescout_core::{Collection, LastSearch, Paper, Researcher, SearchMode, SessionState};

use crate::persistence::SessionStore;
use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Which view is currently displayed. Papers and Researchers are searchable;
/// Collection renders the engine's current set and has no search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Papers,
    Researchers,
    Collection,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Papers => "Papers",
            Self::Researchers => "Researchers",
            Self::Collection => "Collection",
        }
    }

    /// The search endpoint bound to this mode, if any.
    pub fn search_mode(self) -> Option<SearchMode> {
        match self {
            Self::Papers => Some(SearchMode::Papers),
            Self::Researchers => Some(SearchMode::Researchers),
            Self::Collection => None,
        }
    }

    pub fn from_search_mode(mode: SearchMode) -> Self {
        match mode {
            SearchMode::Papers => Self::Papers,
            SearchMode::Researchers => Self::Researchers,
        }
    }

    /// Tab cycle order: Papers → Researchers → Collection → Papers.
    pub fn next(self) -> Self {
        match self {
            Self::Papers => Self::Researchers,
            Self::Researchers => Self::Collection,
            Self::Collection => Self::Papers,
        }
    }

    /// Placeholder text for the query bar.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Papers => "Search papers…",
            Self::Researchers => "Search researchers…",
            Self::Collection => "",
        }
    }
}

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Editing the query line.
    Query,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Error,
    Info,
}

/// Dismissable status line (Esc clears it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }
}

/// Main application state: the mode state machine, the last executed search,
/// and the citation collection engine. Render calls read this struct; user
/// gestures and backend events mutate it through `update` /
/// `handle_backend_event` only.
pub struct App {
    pub mode: Mode,
    pub input_mode: InputMode,

    pub query: String,
    pub query_cursor: usize,

    /// Most recently executed search; replaced wholesale on success, never
    /// cleared by mode switches.
    pub last_search: Option<LastSearch>,
    pub collection: Collection,

    pub loading: bool,
    pub status: Option<StatusMessage>,

    pub results_cursor: usize,
    pub collection_cursor: usize,

    pub show_help: bool,
    pub confirm_clear: bool,
    pub should_quit: bool,

    pub tick: usize,
    pub theme: Theme,

    /// Monotonic request counter: each submitted search bumps it, and a
    /// finished search carrying an older value is discarded as stale.
    pub search_seq: u64,
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,

    pub store: SessionStore,
    pub export_dir: PathBuf,
}

impl App {
    pub fn new(theme: Theme, store: SessionStore, export_dir: PathBuf) -> Self {
        Self {
            mode: Mode::Papers,
            input_mode: InputMode::Normal,
            query: String::new(),
            query_cursor: 0,
            last_search: None,
            collection: Collection::new(),
            loading: false,
            status: None,
            results_cursor: 0,
            collection_cursor: 0,
            show_help: false,
            confirm_clear: false,
            should_quit: false,
            tick: 0,
            theme,
            search_seq: 0,
            backend_cmd_tx: None,
            store,
            export_dir,
        }
    }

    /// Restore persisted session state. Side-effect-free on the store: no
    /// writes, no network — the stored results are rendered directly.
    pub fn restore(&mut self, session: SessionState) {
        self.collection = Collection::from_entries(session.collected_citations);
        if let Some(last) = session.last_search {
            self.query = last.query.clone();
            self.query_cursor = self.query.len();
            self.mode = Mode::from_search_mode(last.mode);
            self.last_search = Some(last);
        }
    }

    /// Switch the active view. Never clears `last_search`, never touches the
    /// network.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.input_mode = InputMode::Normal;
    }

    /// Paper results to display, present only when the last search was a
    /// papers search.
    pub fn paper_results(&self) -> Option<&[Paper]> {
        self.last_search
            .as_ref()
            .filter(|l| l.mode == SearchMode::Papers)
            .and_then(|l| l.results.papers())
    }

    /// Researcher results to display, present only when the last search was
    /// a researchers search.
    pub fn researcher_results(&self) -> Option<&[Researcher]> {
        self.last_search
            .as_ref()
            .filter(|l| l.mode == SearchMode::Researchers)
            .and_then(|l| l.results.researchers())
    }

    /// The paper under the cursor in papers mode.
    pub fn selected_paper(&self) -> Option<&Paper> {
        self.paper_results()?.get(self.results_cursor)
    }

    /// Length of the list the cursor moves over in the current mode.
    pub fn current_list_len(&self) -> usize {
        match self.mode {
            Mode::Papers => self.paper_results().map_or(0, |p| p.len()),
            Mode::Researchers => self.researcher_results().map_or(0, |r| r.len()),
            Mode::Collection => self.collection.len(),
        }
    }

    fn current_cursor_mut(&mut self) -> &mut usize {
        match self.mode {
            Mode::Collection => &mut self.collection_cursor,
            _ => &mut self.results_cursor,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }
        let cursor = self.current_cursor_mut();
        let new = cursor.saturating_add_signed(delta).min(len - 1);
        *cursor = new;
    }

    // update() is in update.rs; handle_backend_event() is in backend.rs

    /// Render the current view.
    pub fn view(&self, f: &mut ratatui::Frame) {
        let area = f.area();

        let query_bar_rows = if self.mode.search_mode().is_some() { 1 } else { 0 };
        let chunks = Layout::vertical([
            Constraint::Length(1),              // mode tabs
            Constraint::Length(query_bar_rows), // query bar (searchable modes)
            Constraint::Min(3),                 // body
            Constraint::Length(1),              // status line
            Constraint::Length(1),              // footer hints
        ])
        .split(area);

        crate::view::render_tabs(f, chunks[0], self);
        if query_bar_rows > 0 {
            crate::view::render_query_bar(f, chunks[1], self);
        }

        let body = chunks[2];
        match self.mode {
            Mode::Papers => crate::view::papers::render_in(f, self, body),
            Mode::Researchers => crate::view::researchers::render_in(f, self, body),
            Mode::Collection => crate::view::collection::render_in(f, self, body),
        }

        crate::view::render_status(f, chunks[3], self);
        crate::view::render_footer(f, chunks[4], self);

        if self.confirm_clear {
            crate::view::confirm::render(f, &self.theme);
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }
    }
}
