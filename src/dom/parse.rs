//! HTML fragment parsing into the arena tree.
//!
//! Parsing delegates to `scraper` (html5ever underneath), then converts the
//! parsed tree into the engine's own owned arena. Fragment parsing wraps
//! content in an implicit `<html>` context element; that wrapper is
//! discarded and its children become the fragment roots.

use ego_tree::NodeRef;
use scraper::node::Node as HtmlNode;
use scraper::{ElementRef, Html};

use super::{Document, NodeId};

impl Document {
    /// Parse one HTML fragment into a [`Document`].
    ///
    /// Best-effort: malformed markup is repaired by the parser and never
    /// produces an error; an empty or unparsable input yields an empty
    /// document.
    pub fn parse(html: &str) -> Document {
        let fragment = Html::parse_fragment(html);
        let mut doc = Document::new();

        // Fragment parses always hang content off an <html> context node.
        let context = fragment
            .tree
            .root()
            .children()
            .find_map(ElementRef::wrap);
        if let Some(context) = context {
            for child in context.children() {
                convert(&mut doc, child, None);
            }
        }
        doc
    }
}

fn convert(doc: &mut Document, node: NodeRef<'_, HtmlNode>, parent: Option<NodeId>) {
    let id = match node.value() {
        HtmlNode::Element(el) => {
            let attrs = el
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            Some(doc.create_element(el.name(), attrs))
        }
        HtmlNode::Text(text) => Some(doc.create_text(text.text.to_string())),
        HtmlNode::Comment(comment) => Some(doc.create_comment(comment.comment.to_string())),
        // Doctype/PI nodes carry no fragment content.
        _ => None,
    };

    let Some(id) = id else { return };
    match parent {
        Some(p) => doc.append_child(p, id),
        None => doc.append_root(id),
    }

    if doc.element_name(id).is_some() {
        for child in node.children() {
            convert(doc, child, Some(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_fragment() {
        let doc = Document::parse("<p>Hello <strong>world</strong></p>");
        assert_eq!(doc.roots().len(), 1);
        let p = doc.roots()[0];
        assert_eq!(doc.element_name(p), Some("p"));
        assert_eq!(doc.text_content(), "Hello world");
    }

    #[test]
    fn parses_attributes_in_order() {
        let doc = Document::parse(r#"<a href="/x" target="_blank">x</a>"#);
        let a = doc.roots()[0];
        assert_eq!(doc.attr(a, "href"), Some("/x"));
        assert_eq!(doc.attr(a, "target"), Some("_blank"));
        assert_eq!(doc.attr(a, "rel"), None);
    }

    #[test]
    fn empty_and_garbage_inputs_never_error() {
        assert!(Document::parse("").roots().is_empty());
        // Unclosed tag is repaired, not rejected.
        let doc = Document::parse("<p>dangling");
        assert_eq!(doc.text_content(), "dangling");
    }

    #[test]
    fn decodes_entities_in_text() {
        let doc = Document::parse("<p>fish &amp; chips</p>");
        assert_eq!(doc.text_content(), "fish & chips");
    }

    #[test]
    fn keeps_bare_text_roots() {
        let doc = Document::parse("plain text, no markup");
        assert_eq!(doc.roots().len(), 1);
        assert_eq!(doc.text_content(), "plain text, no markup");
    }
}
