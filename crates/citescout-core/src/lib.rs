use serde::{Deserialize, Serialize};

pub mod client;
pub mod collection;
pub mod identity;
pub mod session;

// Re-export for convenience
pub use client::{SearchClient, SearchError, SearchMode, SearchResults};
pub use collection::{CollectedCitation, Collection};
pub use identity::{IdentityKey, identity_of};
pub use session::{LastSearch, SessionState};

/// An author as the search service reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

/// A link to one place a paper can be read, with an access classification.
///
/// `label` and `access_type` are free-form service strings ("Publisher Page",
/// "Open Access PDF"; "oa", "paywalled", "repository", "preprint",
/// "canonical") and are rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperSource {
    pub url: String,
    pub label: String,
    pub access_type: String,
}

/// One paper record from the search service.
///
/// Citation text fields (`bibtex`, `ris`, `formatted_citations`) arrive
/// pre-formatted from the service and are treated as opaque strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub sources: Vec<PaperSource>,
    /// The API that first discovered this record.
    #[serde(default)]
    pub source_api: Option<String>,
    #[serde(default)]
    pub citation_count: Option<u64>,
    #[serde(default)]
    pub relevance_score: Option<f64>,
    #[serde(default)]
    pub bibtex: Option<String>,
    #[serde(default)]
    pub ris: Option<String>,
    /// Pre-formatted citations keyed by style name ("Standard", "APA", ...).
    #[serde(default)]
    pub formatted_citations: Option<std::collections::BTreeMap<String, String>>,
}

impl Paper {
    /// The style name whose pre-formatted text is snapshotted on collect.
    pub const STANDARD_STYLE: &'static str = "Standard";

    /// Pre-formatted citation text for the given style, if the service sent one.
    pub fn formatted_citation(&self, style: &str) -> Option<&str> {
        self.formatted_citations
            .as_ref()
            .and_then(|m| m.get(style))
            .map(String::as_str)
    }
}

/// One researcher record from the author search endpoint.
/// Researchers have no collection semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Researcher {
    pub name: String,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub h_index: Option<u32>,
    #[serde(default)]
    pub citation_count: Option<u64>,
    #[serde(default)]
    pub paper_count: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}
