//! Core data model shared across the engine.
//!
//! All boundary types derive serde so a host can move them over JSON
//! without adapters. Everything here is transient: created and discarded
//! within a single engine invocation.

use serde::{Deserialize, Serialize};

/// Category of an external entity eligible for linking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Artist,
    Show,
    Service,
}

/// Intent category used to select keyword phrases for a service candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentTag {
    Group,
    Vip,
    Corporate,
    Educational,
    Holiday,
}

impl IntentTag {
    /// Every known intent tag, in stable order.
    pub const ALL: [IntentTag; 5] = [
        IntentTag::Group,
        IntentTag::Vip,
        IntentTag::Corporate,
        IntentTag::Educational,
        IntentTag::Holiday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentTag::Group => "group",
            IntentTag::Vip => "vip",
            IntentTag::Corporate => "corporate",
            IntentTag::Educational => "educational",
            IntentTag::Holiday => "holiday",
        }
    }
}

/// A typed external entity (artist, show, or service) with a display title
/// and canonical URL. Services additionally carry intent tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub kind: CandidateKind,
    pub title: String,
    pub url: String,
    /// Intent tags; meaningful for services only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<IntentTag>,
}

impl Candidate {
    pub fn artist(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: CandidateKind::Artist,
            title: title.into(),
            url: url.into(),
            tags: Vec::new(),
        }
    }

    pub fn show(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: CandidateKind::Show,
            title: title.into(),
            url: url.into(),
            tags: Vec::new(),
        }
    }

    pub fn service(
        title: impl Into<String>,
        url: impl Into<String>,
        tags: impl Into<Vec<IntentTag>>,
    ) -> Self {
        Self {
            kind: CandidateKind::Service,
            title: title.into(),
            url: url.into(),
            tags: tags.into(),
        }
    }
}

/// A literal match phrase and its target URL, derived from a [`Candidate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub phrase: String,
    pub url: String,
}

impl KeywordEntry {
    pub fn new(phrase: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            url: url.into(),
        }
    }
}

/// One `(phrase, url)` pair actually wrapped by the match applier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AppliedLink {
    pub phrase: String,
    pub url: String,
}

/// Deduplicated record of which phrase→URL pairs were wrapped in one
/// `apply_links` run. A pair appears at most once regardless of how many
/// occurrences were linked.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InsertionSummary {
    pub applied: Vec<AppliedLink>,
}

impl InsertionSummary {
    pub fn len(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    /// Whether the summary records an insertion for the given pair.
    pub fn contains(&self, phrase: &str, url: &str) -> bool {
        self.applied
            .iter()
            .any(|a| a.phrase == phrase && a.url == url)
    }
}

/// An `(anchor text, href)` pair extracted from a document snapshot.
/// Used only for before/after diffing; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AnchorRecord {
    pub text: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_deserializes_without_tags() {
        let c: Candidate =
            serde_json::from_str(r#"{"kind":"artist","title":"Idina Menzel","url":"/artists/idina"}"#)
                .unwrap();
        assert_eq!(c.kind, CandidateKind::Artist);
        assert!(c.tags.is_empty());
    }

    #[test]
    fn intent_tags_round_trip_lowercase() {
        let json = serde_json::to_string(&IntentTag::Corporate).unwrap();
        assert_eq!(json, r#""corporate""#);
        let back: IntentTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IntentTag::Corporate);
    }

    #[test]
    fn summary_contains_checks_exact_pair() {
        let summary = InsertionSummary {
            applied: vec![AppliedLink {
                phrase: "group tickets".into(),
                url: "/services/groups".into(),
            }],
        };
        assert!(summary.contains("group tickets", "/services/groups"));
        assert!(!summary.contains("group tickets", "/other"));
        assert_eq!(summary.len(), 1);
    }
}
