use super::{App, StatusMessage};
use crate::tui_event::BackendEvent;

use citescout_core::LastSearch;

impl App {
    /// Process a backend event and update state.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::SearchFinished {
                seq,
                mode,
                query,
                outcome,
            } => {
                // A response from a superseded request: a newer search was
                // submitted while this one was in flight. Discard it so the
                // older result cannot stomp the newer one.
                if seq != self.search_seq {
                    tracing::debug!(seq, current = self.search_seq, "discarding stale search");
                    return;
                }

                // Guaranteed cleanup: the loading indicator clears on
                // success and failure alike.
                self.loading = false;

                match outcome {
                    Ok(results) => {
                        self.results_cursor = 0;
                        let last = LastSearch {
                            query,
                            mode,
                            results,
                        };
                        self.store.save_last_search(&last);
                        self.last_search = Some(last);
                    }
                    Err(e) => {
                        // Previous results stay rendered until the next
                        // successful search replaces them.
                        self.status = Some(StatusMessage::error(e.to_string()));
                    }
                }
            }
        }
    }
}
