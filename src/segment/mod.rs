//! Text segmentation
//!
//! Walks a document and yields only the text segments eligible for link
//! insertion. Text under anchors, citation markers, code, preformatted
//! blocks, and script/style content is never offered for modification.

use crate::dom::{Document, NodeId};

/// Element names whose subtrees are never eligible for insertion.
pub const EXCLUDED_ANCESTORS: [&str; 6] = ["a", "sup", "code", "pre", "script", "style"];

/// A maximal run of character data belonging to one text node.
#[derive(Debug, Clone, Copy)]
pub struct TextSegment<'a> {
    /// Position of the text node in its document.
    pub node: NodeId,
    pub text: &'a str,
}

/// Lazy, finite, restartable iterator over eligible segments in document
/// order. Each eligible text node is yielded exactly once; empty and
/// whitespace-only nodes are skipped. Never errors: an empty document
/// yields an empty sequence.
pub fn text_segments(doc: &Document) -> Segments<'_> {
    Segments {
        doc,
        stack: doc.roots().iter().rev().copied().collect(),
    }
}

/// Iterator state for [`text_segments`]. Excluded subtrees are pruned at
/// their root rather than filtered per node.
#[derive(Debug)]
pub struct Segments<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = TextSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if let Some(name) = self.doc.element_name(id) {
                if EXCLUDED_ANCESTORS.contains(&name) {
                    continue;
                }
                self.stack.extend(self.doc.children(id).iter().rev());
                continue;
            }
            if let Some(text) = self.doc.text(id) {
                if !text.trim().is_empty() {
                    return Some(TextSegment { node: id, text });
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment_texts(html: &str) -> Vec<String> {
        let doc = Document::parse(html);
        text_segments(&doc).map(|s| s.text.to_string()).collect()
    }

    #[test]
    fn yields_text_in_document_order() {
        let texts = segment_texts("<h5>First</h5><p>Second <strong>third</strong> fourth</p>");
        assert_eq!(texts, vec!["First", "Second ", "third", " fourth"]);
    }

    #[test]
    fn skips_text_inside_anchors() {
        let texts = segment_texts(r#"<p>Visit <a href="/x">the site</a> today</p>"#);
        assert_eq!(texts, vec!["Visit ", " today"]);
    }

    #[test]
    fn skips_citation_code_and_script_content() {
        let texts = segment_texts(
            r##"<p>Body <sup><a href="#1">[1]</a></sup> text</p>
               <pre>preformatted</pre>
               <code>inline()</code>
               <script>var x = 1;</script>
               <style>p { color: red }</style>"##,
        );
        // Whitespace-only inter-element nodes are skipped too.
        assert_eq!(texts, vec!["Body ", " text"]);
    }

    #[test]
    fn skips_whitespace_only_nodes() {
        let texts = segment_texts("<p>  </p><p>real</p>");
        assert_eq!(texts, vec!["real"]);
    }

    #[test]
    fn restartable_and_empty_safe() {
        let doc = Document::parse("<p>once</p>");
        assert_eq!(text_segments(&doc).count(), 1);
        assert_eq!(text_segments(&doc).count(), 1);

        let empty = Document::parse("");
        assert_eq!(text_segments(&empty).count(), 0);
    }

    #[test]
    fn exclusion_applies_to_whole_subtree() {
        let texts = segment_texts("<pre>outer <em>nested emphasis</em> tail</pre><p>ok</p>");
        assert_eq!(texts, vec!["ok"]);
    }
}
