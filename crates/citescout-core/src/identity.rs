//! Dedup identity for paper records.
//!
//! Two papers refer to the same work iff their identity keys match: the DOI
//! when present and non-empty, else the exact title. Title fallback can
//! produce false positives on identically-titled works; accepted limitation.

use crate::{CollectedCitation, Paper};

/// The key used to decide whether two paper records are the same work.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    /// DOI, lowercased (DOIs are case-insensitive).
    Doi(String),
    /// Exact title, used only when no DOI is available.
    Title(String),
}

/// Compute the dedup identity of a paper.
pub fn identity_of(paper: &Paper) -> IdentityKey {
    key_from(paper.doi.as_deref(), &paper.title)
}

/// Compute the dedup identity of an already-collected citation.
pub fn identity_of_collected(entry: &CollectedCitation) -> IdentityKey {
    key_from(entry.doi.as_deref(), &entry.title)
}

fn key_from(doi: Option<&str>, title: &str) -> IdentityKey {
    match doi {
        Some(d) if !d.trim().is_empty() => IdentityKey::Doi(d.trim().to_lowercase()),
        _ => IdentityKey::Title(title.to_string()),
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
            bibtex: None,
            ris: None,
            formatted_citations: None,
        }
    }

    #[test]
    fn doi_wins_over_title() {
        let a = paper("Title A", Some("10.1/x"));
        let b = paper("Title B", Some("10.1/x"));
        assert_eq!(identity_of(&a), identity_of(&b));
    }

    #[test]
    fn doi_is_case_insensitive() {
        let a = paper("T", Some("10.1/ABC"));
        let b = paper("T", Some("10.1/abc"));
        assert_eq!(identity_of(&a), identity_of(&b));
    }

    #[test]
    fn empty_doi_falls_back_to_title() {
        let a = paper("Same Title", Some(""));
        let b = paper("Same Title", None);
        assert_eq!(identity_of(&a), identity_of(&b));
        assert_eq!(
            identity_of(&a),
            IdentityKey::Title("Same Title".to_string())
        );
    }

    #[test]
    fn whitespace_doi_falls_back_to_title() {
        let a = paper("T", Some("   "));
        assert_eq!(identity_of(&a), IdentityKey::Title("T".to_string()));
    }

    #[test]
    fn title_match_is_exact() {
        let a = paper("Graphene", None);
        let b = paper("graphene", None);
        assert_ne!(identity_of(&a), identity_of(&b));
    }
}
