//! Persisted session state: the last executed search and the citation
//! collection, restored at startup.

use serde::{Deserialize, Serialize};

use crate::client::{SearchMode, SearchResults};
use crate::collection::CollectedCitation;

/// The most recently executed search. At most one is retained — a new
/// search fully replaces it (no history).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LastSearchWire")]
pub struct LastSearch {
    pub query: String,
    pub mode: SearchMode,
    pub results: SearchResults,
}

/// Wire shape for deserialization: `results` is parsed as papers or
/// researchers depending on `mode`, so the persisted JSON keeps the flat
/// `{query, mode, results}` layout.
#[derive(Deserialize)]
struct LastSearchWire {
    query: String,
    mode: SearchMode,
    #[serde(default)]
    results: serde_json::Value,
}

impl TryFrom<LastSearchWire> for LastSearch {
    type Error = serde_json::Error;

    fn try_from(wire: LastSearchWire) -> Result<Self, Self::Error> {
        let results = if wire.results.is_null() {
            match wire.mode {
                SearchMode::Papers => SearchResults::Papers(Vec::new()),
                SearchMode::Researchers => SearchResults::Researchers(Vec::new()),
            }
        } else {
            match wire.mode {
                SearchMode::Papers => SearchResults::Papers(serde_json::from_value(wire.results)?),
                SearchMode::Researchers => {
                    SearchResults::Researchers(serde_json::from_value(wire.results)?)
                }
            }
        };
        Ok(Self {
            query: wire.query,
            mode: wire.mode,
            results,
        })
    }
}

/// Everything restored at startup: both persisted fields, read in one
/// batched load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub last_search: Option<LastSearch>,
    pub collected_citations: Vec<CollectedCitation>,
}
