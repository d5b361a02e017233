//! Keyword table construction
//!
//! Expands typed candidate records into literal match phrases. Artists and
//! shows contribute their title verbatim; services contribute a fixed
//! phrase list per intent tag. The phrase table is configuration data, not
//! computed.

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::{Candidate, CandidateKind, IntentTag, KeywordEntry};

/// Literal phrase lists keyed by intent tag.
static INTENT_PHRASES: Lazy<FxHashMap<IntentTag, &'static [&'static str]>> = Lazy::new(|| {
    let mut table: FxHashMap<IntentTag, &'static [&'static str]> = FxHashMap::default();
    table.insert(
        IntentTag::Vip,
        &[
            "vip",
            "backstage",
            "meet and greet",
            "meet & greet",
            "premium",
            "concierge",
            "exclusive",
            "red carpet",
        ][..],
    );
    table.insert(
        IntentTag::Corporate,
        &[
            "corporate",
            "team building",
            "offsite",
            "retreat",
            "client event",
            "employee event",
            "company outing",
            "incentive",
            "sponsorship",
            "brand activation",
        ][..],
    );
    table.insert(
        IntentTag::Educational,
        &[
            "education",
            "educational",
            "student",
            "school",
            "workshop",
            "master class",
            "masterclass",
            "matinee",
            "field trip",
            "curriculum",
        ][..],
    );
    table.insert(
        IntentTag::Holiday,
        &[
            "holiday",
            "christmas",
            "hanukkah",
            "new year",
            "valentine",
            "mother s day",
            "fathers day",
            "gift",
            "seasonal",
            "halloween",
            "black friday",
            "cyber monday",
        ][..],
    );
    table.insert(
        IntentTag::Group,
        &[
            "group tickets",
            "group sales",
            "group rate",
            "groups",
            "bulk tickets",
            "group reservations",
        ][..],
    );
    table
});

/// Phrase list for one intent tag.
pub fn intent_phrases(tag: IntentTag) -> &'static [&'static str] {
    INTENT_PHRASES.get(&tag).copied().unwrap_or(&[])
}

/// Expand candidates into an ordered keyword table.
///
/// - Artist/Show: one entry, title verbatim, targeting the candidate URL.
/// - Service: one entry per phrase in the union of its tags' phrase lists
///   (duplicates across tags collapsed, first occurrence wins), all
///   targeting the service URL.
/// - Candidates with an empty title or URL are dropped.
pub fn build_keyword_table(candidates: &[Candidate]) -> Vec<KeywordEntry> {
    let mut entries = Vec::new();
    for candidate in candidates {
        if candidate.title.trim().is_empty() || candidate.url.trim().is_empty() {
            continue;
        }
        match candidate.kind {
            CandidateKind::Artist | CandidateKind::Show => {
                entries.push(KeywordEntry::new(&candidate.title, &candidate.url));
            }
            CandidateKind::Service => {
                let mut seen: FxHashSet<&str> = FxHashSet::default();
                for tag in &candidate.tags {
                    for &phrase in intent_phrases(*tag) {
                        if seen.insert(phrase) {
                            entries.push(KeywordEntry::new(phrase, &candidate.url));
                        }
                    }
                }
            }
        }
    }
    entries
}
