//! Match applier — wraps phrase occurrences in hyperlinks.
//!
//! Scans eligible text segments for keyword phrases and rewrites the
//! document in place, splitting text nodes around each match and splicing
//! in an anchor. Work proceeds entry by entry in list order, so earlier
//! entries win overlapping text; within one entry, segments are consumed
//! in document order from a worklist computed up front. A node is only
//! mutated after it has been taken off the worklist, which structurally
//! rules out stale references.
//!
//! Per-phrase applied counts are scoped to a single [`apply_links`] call.

use std::collections::VecDeque;

use regex::{Regex, RegexBuilder};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::dom::{Document, NodeId};
use crate::segment;
use crate::types::{AppliedLink, InsertionSummary, KeywordEntry};

/// Enter a tracing span for one entry pass (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_pass {
    ($phrase:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("link_pass", phrase = $phrase).entered();
    };
}

/// Options for one [`apply_links`] run.
#[derive(Debug, Clone)]
pub struct LinkOptions {
    /// Maximum number of occurrences wrapped per phrase across the whole
    /// document.
    pub max_per_entry: usize,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self { max_per_entry: 1 }
    }
}

impl LinkOptions {
    pub fn with_max_per_entry(max_per_entry: usize) -> Self {
        Self { max_per_entry }
    }
}

/// Wrap matched phrases in anchor nodes, mutating `doc` in place.
///
/// Matching is case-insensitive and literal. Single-word phrases only
/// match when the adjacent characters (if any) are not alphanumeric;
/// multi-word phrases match as plain substrings. Each applied
/// `(phrase, url)` pair is recorded once in the returned summary.
///
/// Entries with no match are skipped silently; the function never fails.
pub fn apply_links(
    doc: &mut Document,
    entries: &[KeywordEntry],
    options: &LinkOptions,
) -> InsertionSummary {
    let mut summary = InsertionSummary::default();
    if options.max_per_entry == 0 {
        return summary;
    }

    // Applied counts keyed by folded phrase, so a phrase duplicated across
    // entries still respects the cap.
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    let mut recorded: FxHashSet<(String, String)> = FxHashSet::default();

    for entry in entries {
        if entry.phrase.trim().is_empty() || entry.url.trim().is_empty() {
            continue;
        }
        trace_pass!(entry.phrase.as_str());

        let key = entry.phrase.to_lowercase();
        if counts.get(&key).copied().unwrap_or(0) >= options.max_per_entry {
            continue;
        }
        let Some(pattern) = literal_pattern(&entry.phrase) else {
            continue;
        };
        let check_boundary = !entry.phrase.chars().any(char::is_whitespace);

        // Worklist of eligible text nodes, derived fresh for this entry so
        // fragments created by earlier entries are visible.
        let mut worklist: VecDeque<NodeId> =
            segment::text_segments(doc).map(|s| s.node).collect();

        while let Some(node) = worklist.pop_front() {
            if counts.get(&key).copied().unwrap_or(0) >= options.max_per_entry {
                break;
            }
            let Some(text) = doc.text(node).map(str::to_owned) else {
                continue;
            };
            let Some((start, end)) = find_occurrence(&pattern, &text, check_boundary) else {
                continue;
            };

            let after = wrap_match(doc, node, &text, start, end, &entry.url);
            *counts.entry(key.clone()).or_insert(0) += 1;
            if recorded.insert((entry.phrase.clone(), entry.url.clone())) {
                summary.applied.push(AppliedLink {
                    phrase: entry.phrase.clone(),
                    url: entry.url.clone(),
                });
            }

            // Re-enter the untouched remainder of the node, ahead of later
            // siblings, never the new anchor itself.
            if let Some(after) = after {
                worklist.push_front(after);
            }
        }
    }

    summary
}

/// Case-insensitive matcher for a literal phrase. `None` only if the
/// (escaped) pattern fails to build, which is treated as a no-match entry.
fn literal_pattern(phrase: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(phrase))
        .case_insensitive(true)
        .build()
        .ok()
}

/// First occurrence of `pattern` in `text` passing the boundary rule,
/// as byte offsets.
fn find_occurrence(pattern: &Regex, text: &str, check_boundary: bool) -> Option<(usize, usize)> {
    for m in pattern.find_iter(text) {
        if !check_boundary || boundary_ok(text, m.start(), m.end()) {
            return Some((m.start(), m.end()));
        }
    }
    None
}

/// Single-word boundary rule: characters immediately before and after the
/// match, when present, must not be alphanumeric.
fn boundary_ok(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    before.map_or(true, |c| !c.is_alphanumeric()) && after.map_or(true, |c| !c.is_alphanumeric())
}

/// Split `node` into before | anchor(matched) | after and splice the pieces
/// in place. Returns the id of the "after" text node, if any.
fn wrap_match(
    doc: &mut Document,
    node: NodeId,
    text: &str,
    start: usize,
    end: usize,
    url: &str,
) -> Option<NodeId> {
    let mut pieces: Vec<NodeId> = Vec::with_capacity(3);

    if start > 0 {
        pieces.push(doc.create_text(&text[..start]));
    }

    let anchor = doc.create_element(
        "a",
        vec![
            ("href".to_string(), url.to_string()),
            ("target".to_string(), "_blank".to_string()),
            ("rel".to_string(), "noopener noreferrer".to_string()),
        ],
    );
    let label = doc.create_text(&text[start..end]);
    doc.append_child(anchor, label);
    pieces.push(anchor);

    let mut after = None;
    if end < text.len() {
        let id = doc.create_text(&text[end..]);
        pieces.push(id);
        after = Some(id);
    }

    doc.replace_node(node, &pieces);
    after
}
