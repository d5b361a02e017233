//! Deterministic HTML writer for the arena tree.
//!
//! Text and attribute values are escaped on the way out (parsing decodes
//! entities, so escape-on-serialize round-trips them). `script`/`style`
//! bodies are raw text in HTML and are written unescaped. Void elements
//! get no close tag.

use super::{Document, NodeId, NodeKind};

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

impl Document {
    /// Serialize the fragment back to HTML text.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for &root in self.roots() {
            self.write_node(root, false, &mut out);
        }
        out
    }

    fn write_node(&self, id: NodeId, raw_text: bool, out: &mut String) {
        match self.kind(id) {
            NodeKind::Text(t) => {
                if raw_text {
                    out.push_str(t);
                } else {
                    escape_text(t, out);
                }
            }
            NodeKind::Comment(c) => {
                out.push_str("<!--");
                out.push_str(c);
                out.push_str("-->");
            }
            NodeKind::Element { name, attrs } => {
                out.push('<');
                out.push_str(name);
                for (k, v) in attrs {
                    out.push(' ');
                    out.push_str(k);
                    out.push_str("=\"");
                    escape_attr(v, out);
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&name.as_str()) {
                    return;
                }
                let raw = RAW_TEXT_ELEMENTS.contains(&name.as_str());
                for &child in self.children(id) {
                    self.write_node(child, raw, out);
                }
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_simple_fragments() {
        for html in [
            "<p>Hello</p>",
            "<p>Ask about group tickets!</p>",
            "<h5>Heading</h5><p>Body <strong>bold</strong> text.</p>",
            r##"<p>See <sup><a href="#1">[1]</a></sup> for details</p>"##,
        ] {
            let doc = Document::parse(html);
            assert_eq!(doc.to_html(), html);
        }
    }

    #[test]
    fn escapes_text_and_attributes() {
        let doc = Document::parse(r#"<p>fish &amp; chips</p>"#);
        assert_eq!(doc.to_html(), "<p>fish &amp; chips</p>");

        let mut doc = Document::new();
        let a = doc.create_element(
            "a",
            vec![("href".into(), "/q?a=1&b=\"2\"".into())],
        );
        doc.append_root(a);
        let t = doc.create_text("a < b");
        doc.append_child(a, t);
        assert_eq!(
            doc.to_html(),
            r#"<a href="/q?a=1&amp;b=&quot;2&quot;">a &lt; b</a>"#
        );
    }

    #[test]
    fn void_elements_have_no_close_tag() {
        let doc = Document::parse("<p>line<br>break</p>");
        assert_eq!(doc.to_html(), "<p>line<br>break</p>");
    }

    #[test]
    fn comments_survive_round_trip() {
        let doc = Document::parse("<p>a<!-- note -->b</p>");
        assert_eq!(doc.to_html(), "<p>a<!-- note -->b</p>");
    }
}
