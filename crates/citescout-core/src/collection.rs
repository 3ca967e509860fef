//! The citation collection: an ordered, identity-deduplicated set of
//! citation snapshots curated by the user across searches.

use serde::{Deserialize, Serialize};

use crate::identity::{identity_of, identity_of_collected};
use crate::Paper;

/// A collected citation. This is a snapshot taken at collect time, not a
/// reference to the originating paper — later changes to the source record
/// do not affect an already-collected entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedCitation {
    pub title: String,
    /// Pre-formatted "Standard" style citation text.
    pub standard: String,
    #[serde(default)]
    pub bibtex: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
}

impl CollectedCitation {
    /// Build a snapshot from a paper record.
    pub fn snapshot(paper: &Paper) -> Self {
        let standard = paper
            .formatted_citation(Paper::STANDARD_STYLE)
            .unwrap_or(&paper.title)
            .to_string();
        Self {
            title: paper.title.clone(),
            standard,
            bibtex: paper.bibtex.clone(),
            doi: paper.doi.clone(),
        }
    }
}

/// Ordered set of collected citations, uniqueness enforced by dedup identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    entries: Vec<CollectedCitation>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted entries, dropping any duplicate identities
    /// (keeps the oldest entry, matching insertion order).
    pub fn from_entries(entries: Vec<CollectedCitation>) -> Self {
        let mut collection = Self::new();
        for entry in entries {
            let key = identity_of_collected(&entry);
            if !collection
                .entries
                .iter()
                .any(|e| identity_of_collected(e) == key)
            {
                collection.entries.push(entry);
            }
        }
        collection
    }

    /// Collect or uncollect a paper. The only mutation entry point.
    ///
    /// If an entry with the paper's identity exists it is removed; otherwise
    /// a snapshot is appended. Returns the new membership state. Removal
    /// preserves the order of remaining entries; re-collecting appends at
    /// the end rather than restoring the old position.
    pub fn toggle(&mut self, paper: &Paper) -> bool {
        let key = identity_of(paper);
        if let Some(pos) = self
            .entries
            .iter()
            .position(|e| identity_of_collected(e) == key)
        {
            self.entries.remove(pos);
            false
        } else {
            self.entries.push(CollectedCitation::snapshot(paper));
            true
        }
    }

    /// Identity lookup, no mutation.
    pub fn contains(&self, paper: &Paper) -> bool {
        let key = identity_of(paper);
        self.entries
            .iter()
            .any(|e| identity_of_collected(e) == key)
    }

    /// Entries in insertion order, oldest collected first.
    pub fn entries(&self) -> &[CollectedCitation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry (bulk clear).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(title: &str, doi: Option<&str>) -> Paper {
        Paper {
            title: title.to_string(),
            authors: vec![],
            year: None,
            journal: None,
            doi: doi.map(String::from),
            sources: vec![],
            source_api: None,
            citation_count: None,
            relevance_score: None,
            bibtex: Some(format!("@article{{{}}}", title)),
            ris: None,
            formatted_citations: Some(
                [(
                    "Standard".to_string(),
                    format!("{} (Standard)", title),
                )]
                .into_iter()
                .collect(),
            ),
        }
    }

    // =========================================================================
    // Toggle semantics
    // =========================================================================

    #[test]
    fn toggle_collects_then_uncollects() {
        let mut c = Collection::new();
        let p = paper("Graphene transport", Some("10.1/g1"));

        assert!(c.toggle(&p));
        assert!(c.contains(&p));
        assert_eq!(c.len(), 1);

        assert!(!c.toggle(&p));
        assert!(!c.contains(&p));
        assert!(c.is_empty());
    }

    #[test]
    fn double_toggle_restores_prior_state_for_title_identity() {
        let mut c = Collection::new();
        let other = paper("Kept", None);
        c.toggle(&other);

        let p = paper("No DOI here", None);
        c.toggle(&p);
        c.toggle(&p);

        assert_eq!(c.len(), 1);
        assert_eq!(c.entries()[0].title, "Kept");
    }

    #[test]
    fn distinct_dois_yield_distinct_entries_in_order() {
        let mut c = Collection::new();
        c.toggle(&paper("A", Some("10.1/a")));
        c.toggle(&paper("B", Some("10.1/b")));

        assert_eq!(c.len(), 2);
        assert_eq!(c.entries()[0].title, "A");
        assert_eq!(c.entries()[1].title, "B");
    }

    #[test]
    fn same_doi_different_title_is_one_logical_entity() {
        let mut c = Collection::new();
        c.toggle(&paper("Preprint title", Some("10.1/x")));
        // Second toggle with the same DOI uncollects, it does not add.
        let collected = c.toggle(&paper("Published title", Some("10.1/x")));

        assert!(!collected);
        assert!(c.is_empty());
    }

    #[test]
    fn removal_preserves_order_and_recollect_appends() {
        let mut c = Collection::new();
        let a = paper("A", Some("10.1/a"));
        let b = paper("B", Some("10.1/b"));
        let d = paper("D", Some("10.1/d"));
        c.toggle(&a);
        c.toggle(&b);
        c.toggle(&d);

        c.toggle(&b); // remove middle
        let titles: Vec<_> = c.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["A", "D"]);

        c.toggle(&b); // re-collect appends at the end
        let titles: Vec<_> = c.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["A", "D", "B"]);
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    #[test]
    fn snapshot_is_independent_of_source_paper() {
        let mut c = Collection::new();
        let mut p = paper("Original", Some("10.1/s"));
        c.toggle(&p);

        p.title = "Mutated".to_string();
        assert_eq!(c.entries()[0].title, "Original");
        assert_eq!(c.entries()[0].standard, "Original (Standard)");
    }

    #[test]
    fn snapshot_falls_back_to_title_without_standard_style() {
        let mut p = paper("Bare", None);
        p.formatted_citations = None;
        let snap = CollectedCitation::snapshot(&p);
        assert_eq!(snap.standard, "Bare");
    }

    // =========================================================================
    // Persisted-entry rebuild
    // =========================================================================

    #[test]
    fn from_entries_drops_duplicate_identities() {
        let dup = CollectedCitation {
            title: "T".to_string(),
            standard: "T".to_string(),
            bibtex: None,
            doi: Some("10.1/dup".to_string()),
        };
        let mut newer = dup.clone();
        newer.title = "T (later)".to_string();

        let c = Collection::from_entries(vec![dup, newer]);
        assert_eq!(c.len(), 1);
        assert_eq!(c.entries()[0].title, "T");
    }
}
