//! Anchor diff reconciliation
//!
//! Compares two snapshots of the same content and reports which anchors the
//! later snapshot added, filtered to a set of permitted target URLs. Used
//! to audit what a linking pass (or an upstream editor) actually inserted.

use rustc_hash::FxHashSet;

use crate::dom::Document;
use crate::types::AnchorRecord;

/// All `(text, href)` anchor pairs in `html`, in document order.
///
/// Anchor text is the concatenated descendant text of the `<a>` element;
/// anchors without an `href` are skipped. Nested anchors cannot occur in
/// parsed HTML, so each pair is counted once.
pub fn collect_anchors(html: &str) -> Vec<AnchorRecord> {
    let doc = Document::parse(html);
    let mut out = Vec::new();
    let mut stack: Vec<_> = doc.roots().iter().rev().copied().collect();
    while let Some(id) = stack.pop() {
        if doc.element_name(id) == Some("a") {
            if let Some(href) = doc.attr(id, "href") {
                out.push(AnchorRecord {
                    text: doc.descendant_text(id),
                    url: href.to_string(),
                });
            }
            continue;
        }
        stack.extend(doc.children(id).iter().rev());
    }
    out
}

/// Anchors present in `after` but not in `before`, restricted to
/// `allowed_urls`.
///
/// Pairs are compared exactly on `(text, href)`. The result preserves the
/// order of first appearance in `after` and contains no duplicates.
/// Reconciling a snapshot against itself yields an empty list.
pub fn reconcile(before: &str, after: &str, allowed_urls: &[String]) -> Vec<AnchorRecord> {
    let allowed: FxHashSet<&str> = allowed_urls.iter().map(String::as_str).collect();
    let existing: FxHashSet<AnchorRecord> = collect_anchors(before).into_iter().collect();

    let mut seen: FxHashSet<AnchorRecord> = FxHashSet::default();
    collect_anchors(after)
        .into_iter()
        .filter(|a| allowed.contains(a.url.as_str()))
        .filter(|a| !existing.contains(a))
        .filter(|a| seen.insert(a.clone()))
        .collect()
}
