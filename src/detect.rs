//! Candidate detection over plain text.
//!
//! Answers "which candidates does this text mention" without touching any
//! markup. Matching is diacritic- and case-insensitive: both sides are
//! normalized before comparison, and titles are probed with space padding
//! so `Beyonce` never fires inside `Beyonces`.

use rustc_hash::FxHashSet;
use serde::Serialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::keywords::intent_phrases;
use crate::types::{Candidate, CandidateKind, IntentTag};

/// A candidate whose title or phrases were found in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateMatch {
    pub title: String,
    pub url: String,
}

/// Detection result, grouped by candidate kind.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchReport {
    pub artists: Vec<CandidateMatch>,
    pub shows: Vec<CandidateMatch>,
    pub services: Vec<CandidateMatch>,
    /// Intent tags whose phrase list fired anywhere in the text, whether or
    /// not a service candidate carries them.
    pub matched_tags: Vec<IntentTag>,
}

impl MatchReport {
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
            && self.shows.is_empty()
            && self.services.is_empty()
            && self.matched_tags.is_empty()
    }
}

/// Fold text for containment checks: NFKD, drop combining marks,
/// lowercase, replace non-alphanumerics with spaces, collapse runs.
pub fn normalize_for_match(text: &str) -> String {
    let folded: String = text
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Detect which candidates the text mentions.
///
/// Artist and show titles match as whole space-delimited runs in the
/// normalized text. Service candidates match when any phrase from any of
/// their intent tags appears; multiple candidates sharing a URL collapse
/// to the first. `matched_tags` reports firing tags independently of the
/// candidate list.
pub fn find_matches(text: &str, candidates: &[Candidate]) -> MatchReport {
    let normalized = normalize_for_match(text);
    let padded = format!(" {normalized} ");

    let mut report = MatchReport::default();
    let mut seen_urls: FxHashSet<&str> = FxHashSet::default();

    for candidate in candidates {
        if candidate.title.trim().is_empty() || candidate.url.trim().is_empty() {
            continue;
        }
        let hit = match candidate.kind {
            CandidateKind::Artist | CandidateKind::Show => {
                title_in(&padded, &candidate.title)
            }
            CandidateKind::Service => candidate
                .tags
                .iter()
                .flat_map(|tag| intent_phrases(*tag))
                .any(|phrase| phrase_in(&normalized, phrase)),
        };
        if !hit || !seen_urls.insert(candidate.url.as_str()) {
            continue;
        }
        let matched = CandidateMatch {
            title: candidate.title.clone(),
            url: candidate.url.clone(),
        };
        match candidate.kind {
            CandidateKind::Artist => report.artists.push(matched),
            CandidateKind::Show => report.shows.push(matched),
            CandidateKind::Service => report.services.push(matched),
        }
    }

    for tag in IntentTag::ALL {
        if intent_phrases(tag)
            .iter()
            .any(|phrase| phrase_in(&normalized, phrase))
        {
            report.matched_tags.push(tag);
        }
    }

    report
}

fn title_in(padded_text: &str, title: &str) -> bool {
    let probe = normalize_for_match(title);
    !probe.is_empty() && padded_text.contains(&format!(" {probe} "))
}

fn phrase_in(normalized_text: &str, phrase: &str) -> bool {
    let probe = normalize_for_match(phrase);
    !probe.is_empty() && normalized_text.contains(&probe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_folds_case_diacritics_and_punctuation() {
        assert_eq!(normalize_for_match("Beyoncé's  TOUR!"), "beyonce s tour");
        assert_eq!(normalize_for_match("  "), "");
    }

    #[test]
    fn title_matches_across_diacritics() {
        let report = find_matches(
            "Tickets for Beyoncé go on sale Friday.",
            &[Candidate::artist("Beyonce", "/artists/beyonce")],
        );
        assert_eq!(report.artists.len(), 1);
        assert_eq!(report.artists[0].url, "/artists/beyonce");
    }

    #[test]
    fn title_requires_whole_run() {
        let report = find_matches(
            "The Wickedest party in town",
            &[Candidate::show("Wicked", "/shows/wicked")],
        );
        assert!(report.shows.is_empty());
    }

    #[test]
    fn service_fires_on_any_tag_phrase() {
        let report = find_matches(
            "Perfect for corporate outings and retreats.",
            &[Candidate::service(
                "Corporate Events",
                "/services/corporate",
                vec![IntentTag::Corporate],
            )],
        );
        assert_eq!(report.services.len(), 1);
        assert_eq!(report.matched_tags, vec![IntentTag::Corporate]);
    }

    #[test]
    fn tags_fire_without_a_matching_candidate() {
        let report = find_matches("Ask about group tickets today", &[]);
        assert_eq!(report.matched_tags, vec![IntentTag::Group]);
        assert!(report.services.is_empty());
    }

    #[test]
    fn duplicate_urls_collapse_to_first() {
        let report = find_matches(
            "Wicked is back",
            &[
                Candidate::show("Wicked", "/shows/wicked"),
                Candidate::show("Wicked (Tour)", "/shows/wicked"),
            ],
        );
        assert_eq!(report.shows.len(), 1);
        assert_eq!(report.shows[0].title, "Wicked");
    }

    #[test]
    fn empty_text_matches_nothing() {
        let report = find_matches("", &[Candidate::artist("Someone", "/a")]);
        assert!(report.is_empty());
    }
}
