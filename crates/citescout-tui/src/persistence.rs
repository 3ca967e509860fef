use std::path::PathBuf;

use citescout_core::{Collection, LastSearch, SessionState};

const LAST_SEARCH_FILE: &str = "last_search.json";
const COLLECTED_CITATIONS_FILE: &str = "collected_citations.json";

/// Key-value store for session state, one JSON file per key under the
/// platform data directory. Both keys are read in a single batched load at
/// startup; every write replaces one whole file (no partial updates).
///
/// Writes are best-effort: a failed write is logged and the app keeps
/// running from its in-memory state.
pub struct SessionStore {
    dir: Option<PathBuf>,
}

impl SessionStore {
    /// Store under `<data_dir>/citescout/`, created if missing.
    pub fn open_default() -> Self {
        let Some(dir) = dirs::data_dir().map(|d| d.join("citescout")) else {
            return Self::disabled();
        };
        if let Err(e) = std::fs::create_dir_all(&dir) {
            tracing::warn!(dir = %dir.display(), error = %e, "could not create session dir");
            return Self::disabled();
        }
        Self { dir: Some(dir) }
    }

    /// Store rooted at an explicit directory (tests).
    pub fn at(dir: PathBuf) -> Self {
        Self { dir: Some(dir) }
    }

    /// A store that persists nothing.
    pub fn disabled() -> Self {
        Self { dir: None }
    }

    fn path(&self, file: &str) -> Option<PathBuf> {
        self.dir.as_ref().map(|d| d.join(file))
    }

    /// Batched startup read of both persisted keys. Missing or unreadable
    /// files restore as absent/empty rather than failing.
    pub fn load_session(&self) -> SessionState {
        let last_search = self
            .path(LAST_SEARCH_FILE)
            .and_then(|p| std::fs::read(p).ok())
            .and_then(|bytes| match serde_json::from_slice::<LastSearch>(&bytes) {
                Ok(last) => Some(last),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unreadable last search");
                    None
                }
            });

        let collected_citations = self
            .path(COLLECTED_CITATIONS_FILE)
            .and_then(|p| std::fs::read(p).ok())
            .and_then(|bytes| match serde_json::from_slice(&bytes) {
                Ok(entries) => Some(entries),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unreadable collection");
                    None
                }
            })
            .unwrap_or_default();

        SessionState {
            last_search,
            collected_citations,
        }
    }

    /// Overwrite the persisted last search with the given value.
    pub fn save_last_search(&self, last: &LastSearch) {
        self.write(LAST_SEARCH_FILE, serde_json::to_vec(last));
    }

    /// Overwrite the persisted collection with the engine's current entries.
    pub fn save_collection(&self, collection: &Collection) {
        self.write(
            COLLECTED_CITATIONS_FILE,
            serde_json::to_vec(collection.entries()),
        );
    }

    fn write(&self, file: &str, payload: Result<Vec<u8>, serde_json::Error>) {
        let Some(path) = self.path(file) else {
            return;
        };
        let result = payload
            .map_err(|e| e.to_string())
            .and_then(|bytes| std::fs::write(&path, bytes).map_err(|e| e.to_string()));
        if let Err(e) = result {
            tracing::warn!(path = %path.display(), error = %e, "session write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citescout_core::{CollectedCitation, SearchMode, SearchResults};

    fn last_search() -> LastSearch {
        LastSearch {
            query: "graphene".to_string(),
            mode: SearchMode::Papers,
            results: SearchResults::Papers(vec![]),
        }
    }

    fn citation(title: &str) -> CollectedCitation {
        CollectedCitation {
            title: title.to_string(),
            standard: format!("{} (Standard)", title),
            bibtex: None,
            doi: None,
        }
    }

    #[test]
    fn empty_store_restores_default_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().to_path_buf());
        let session = store.load_session();
        assert!(session.last_search.is_none());
        assert!(session.collected_citations.is_empty());
    }

    #[test]
    fn round_trips_both_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().to_path_buf());

        store.save_last_search(&last_search());
        let collection = Collection::from_entries(vec![citation("A"), citation("B")]);
        store.save_collection(&collection);

        let session = store.load_session();
        assert_eq!(session.last_search.unwrap().query, "graphene");
        assert_eq!(session.collected_citations.len(), 2);
        assert_eq!(session.collected_citations[0].title, "A");
    }

    #[test]
    fn save_collection_overwrites_whole_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().to_path_buf());

        store.save_collection(&Collection::from_entries(vec![citation("A")]));
        store.save_collection(&Collection::new());

        assert!(store.load_session().collected_citations.is_empty());
    }

    #[test]
    fn corrupt_file_restores_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LAST_SEARCH_FILE), b"{not json").unwrap();
        let store = SessionStore::at(dir.path().to_path_buf());
        assert!(store.load_session().last_search.is_none());
    }

    #[test]
    fn disabled_store_is_inert() {
        let store = SessionStore::disabled();
        store.save_last_search(&last_search());
        assert!(store.load_session().last_search.is_none());
    }
}
