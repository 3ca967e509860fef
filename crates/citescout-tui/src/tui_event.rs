use citescout_core::{SearchError, SearchMode, SearchResults};

/// Commands sent from the TUI to the backend search task.
pub enum BackendCommand {
    /// Run one search. `seq` is the monotonic request counter; responses
    /// carrying an older seq are discarded by the app.
    Search {
        seq: u64,
        mode: SearchMode,
        query: String,
    },
}

/// Events flowing from the backend search task to the TUI.
pub enum BackendEvent {
    /// A search finished, successfully or not. In-flight requests are never
    /// cancelled; staleness is decided by `seq` on arrival.
    SearchFinished {
        seq: u64,
        mode: SearchMode,
        query: String,
        outcome: Result<SearchResults, SearchError>,
    },
}
