use super::{App, InputMode, Mode, StatusMessage};
use crate::action::Action;
use crate::export::{self, ExportFormat};
use crate::tui_event::BackendCommand;

use citescout_core::Paper;

impl App {
    /// Process a user action and update state. Returns true if the app
    /// should quit.
    pub fn update(&mut self, action: Action) -> bool {
        if action == Action::Tick {
            self.tick = self.tick.wrapping_add(1);
            return false;
        }

        // Clear-collection confirmation modal — x/Enter confirms, Esc cancels
        if self.confirm_clear {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::ClearCollection | Action::Submit => {
                    self.confirm_clear = false;
                    self.collection.clear();
                    self.store.save_collection(&self.collection);
                    self.collection_cursor = 0;
                    self.status = Some(StatusMessage::info("Collection cleared"));
                }
                Action::Dismiss => {
                    self.confirm_clear = false;
                }
                _ => {}
            }
            return false;
        }

        // Help overlay intercepts everything except quit
        if self.show_help {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::ToggleHelp | Action::Dismiss => {
                    self.show_help = false;
                }
                _ => {}
            }
            return false;
        }

        // Query line editing
        if self.input_mode == InputMode::Query {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::QueryCancel => {
                    self.input_mode = InputMode::Normal;
                }
                Action::QueryConfirm => {
                    self.input_mode = InputMode::Normal;
                    self.submit_search();
                }
                Action::QueryInput(ch) => {
                    self.edit_query(ch);
                }
                Action::CursorLeft => {
                    self.query_cursor = self.query[..self.query_cursor]
                        .char_indices()
                        .next_back()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
                Action::CursorRight => {
                    if self.query_cursor < self.query.len() {
                        self.query_cursor += self.query[self.query_cursor..]
                            .chars()
                            .next()
                            .map(|c| c.len_utf8())
                            .unwrap_or(0);
                    }
                }
                Action::CursorHome => {
                    self.query_cursor = 0;
                }
                Action::CursorEnd => {
                    self.query_cursor = self.query.len();
                }
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                return true;
            }
            Action::MoveDown => self.move_cursor(1),
            Action::MoveUp => self.move_cursor(-1),
            Action::GoTop => *self.current_cursor_mut() = 0,
            Action::GoBottom => {
                let len = self.current_list_len();
                *self.current_cursor_mut() = len.saturating_sub(1);
            }
            Action::NextMode => self.set_mode(self.mode.next()),
            Action::SetMode(mode) => self.set_mode(mode),
            Action::StartQuery => {
                if self.mode.search_mode().is_some() {
                    self.input_mode = InputMode::Query;
                    self.query_cursor = self.query.len();
                }
            }
            Action::Submit => self.submit_search(),
            Action::ToggleCollect => self.toggle_collect(),
            Action::ClearCollection => {
                if self.mode == Mode::Collection && !self.collection.is_empty() {
                    self.confirm_clear = true;
                }
            }
            Action::ExportBibtex => self.export_selected(ExportFormat::Bibtex),
            Action::ExportRis => self.export_selected(ExportFormat::Ris),
            Action::ExportStyled => {
                self.export_selected(ExportFormat::Styled(Paper::STANDARD_STYLE.to_string()))
            }
            Action::ExportCollection => self.export_collection(),
            Action::ToggleHelp => self.show_help = true,
            Action::Dismiss => {
                if self.status.is_some() {
                    self.status = None;
                }
            }
            _ => {}
        }
        false
    }

    fn edit_query(&mut self, ch: char) {
        if ch == '\x08' {
            // Backspace: delete char before cursor
            if self.query_cursor > 0 {
                let prev = self.query[..self.query_cursor]
                    .char_indices()
                    .next_back()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                self.query.drain(prev..self.query_cursor);
                self.query_cursor = prev;
            }
        } else {
            self.query.insert(self.query_cursor, ch);
            self.query_cursor += ch.len_utf8();
        }
    }

    /// Run the current query against the active mode's endpoint.
    ///
    /// Empty or whitespace-only queries are a silent no-op. While the fetch
    /// is outstanding the result display is replaced by the loading
    /// indicator; the previous `last_search` is only overwritten on success.
    pub fn submit_search(&mut self) {
        let Some(search_mode) = self.mode.search_mode() else {
            return;
        };
        let query = self.query.trim().to_string();
        if query.is_empty() {
            return;
        }

        self.status = None;
        self.loading = true;
        self.results_cursor = 0;
        self.search_seq += 1;

        if let Some(tx) = &self.backend_cmd_tx {
            let _ = tx.send(BackendCommand::Search {
                seq: self.search_seq,
                mode: search_mode,
                query,
            });
        }
    }

    /// Collect or uncollect the paper under the cursor and persist the
    /// collection. The next draw reads membership from the engine, so the
    /// active view reflects the new state immediately.
    fn toggle_collect(&mut self) {
        if self.mode != Mode::Papers {
            return;
        }
        let Some(paper) = self.selected_paper().cloned() else {
            return;
        };
        self.collection.toggle(&paper);
        self.store.save_collection(&self.collection);
        self.collection_cursor = self
            .collection_cursor
            .min(self.collection.len().saturating_sub(1));
    }

    fn export_selected(&mut self, format: ExportFormat) {
        if self.mode != Mode::Papers {
            return;
        }
        let Some(paper) = self.selected_paper() else {
            return;
        };
        let content = match &format {
            ExportFormat::Bibtex => paper.bibtex.clone(),
            ExportFormat::Ris => paper.ris.clone(),
            ExportFormat::Styled(style) => paper.formatted_citation(style).map(String::from),
        };
        let Some(text) = content else {
            self.status = Some(StatusMessage::error(format!(
                "No {} available for this result",
                format_label(&format)
            )));
            return;
        };
        match export::export_citation(&self.export_dir, &format, &text) {
            Ok(path) => {
                self.status = Some(StatusMessage::info(format!("Saved {}", path.display())));
            }
            Err(e) => self.status = Some(StatusMessage::error(e)),
        }
    }

    fn export_collection(&mut self) {
        if self.mode != Mode::Collection || self.collection.is_empty() {
            return;
        }
        match export::export_collection(&self.export_dir, &self.collection) {
            Ok(path) => {
                self.status = Some(StatusMessage::info(format!("Saved {}", path.display())));
            }
            Err(e) => self.status = Some(StatusMessage::error(e)),
        }
    }
}

fn format_label(format: &ExportFormat) -> &str {
    match format {
        ExportFormat::Bibtex => "BibTeX",
        ExportFormat::Ris => "RIS",
        ExportFormat::Styled(style) => style,
    }
}
