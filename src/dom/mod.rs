//! Owned arena document tree.
//!
//! A [`Document`] is an ordered tree of element, text, and comment nodes
//! representing one HTML fragment. Nodes live in a flat arena and refer to
//! each other through [`NodeId`] indices: each node owns its child id list,
//! and carries a parent id solely so the linker can splice replacements in
//! place. There is no live cursor into the tree — operations that mutate
//! work from id worklists computed up front, so stale references cannot
//! occur.
//!
//! Parsing ([`Document::parse`]) is best-effort and never errors; malformed
//! input degrades to whatever the HTML parser recovers. Serialization
//! ([`Document::to_html`]) is deterministic: attributes in parse order,
//! escaped text, HTML void elements without close tags.

mod parse;
mod serialize;

/// Index of a node in a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

/// An ordered tree of markup and text nodes for one HTML fragment.
///
/// Mutable; owned exclusively by the operation currently processing it.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<NodeData>,
    roots: Vec<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level nodes of the fragment, in document order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Children of a node, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Tag name if the node is an element (lowercase, as parsed).
    pub fn element_name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Attribute value if the node is an element carrying that attribute.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Character data if the node is a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(text.into()))
    }

    /// Create a detached element node with the given attributes.
    pub fn create_element(
        &mut self,
        name: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> NodeId {
        self.push(NodeKind::Element {
            name: name.into(),
            attrs,
        })
    }

    pub(crate) fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Comment(text.into()))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            parent: None,
            children: Vec::new(),
            kind,
        });
        id
    }

    /// Attach a detached node as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub(crate) fn append_root(&mut self, child: NodeId) {
        self.nodes[child.0].parent = None;
        self.roots.push(child);
    }

    /// Splice `replacements` into the tree in place of `old`, preserving
    /// sibling order. `old` is detached and left orphaned in the arena.
    pub fn replace_node(&mut self, old: NodeId, replacements: &[NodeId]) {
        let parent = self.nodes[old.0].parent;
        let siblings = match parent {
            Some(p) => &mut self.nodes[p.0].children,
            None => &mut self.roots,
        };
        if let Some(pos) = siblings.iter().position(|&c| c == old) {
            siblings.splice(pos..=pos, replacements.iter().copied());
        }
        for &r in replacements {
            self.nodes[r.0].parent = parent;
        }
        self.nodes[old.0].parent = None;
    }

    /// All character data in the document, concatenated in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for &root in &self.roots {
            self.collect_text(root, &mut out);
        }
        out
    }

    /// Character data under a single node, concatenated in document order.
    pub fn descendant_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].kind {
            NodeKind::Text(t) => out.push_str(t),
            NodeKind::Element { .. } => {
                for &child in &self.nodes[id.0].children {
                    self.collect_text(child, out);
                }
            }
            NodeKind::Comment(_) => {}
        }
    }

    /// Whether some ancestor element of `id` has a name in `names`.
    pub fn has_ancestor_named(&self, id: NodeId, names: &[&str]) -> bool {
        let mut cur = self.parent(id);
        while let Some(p) = cur {
            if let Some(name) = self.element_name(p) {
                if names.contains(&name) {
                    return true;
                }
            }
            cur = self.parent(p);
        }
        false
    }

    pub(crate) fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_splices_nodes() {
        let mut doc = Document::new();
        let p = doc.create_element("p", vec![]);
        doc.append_root(p);
        let t = doc.create_text("hello world");
        doc.append_child(p, t);

        let before = doc.create_text("hello ");
        let a = doc.create_element("a", vec![("href".into(), "/w".into())]);
        let inner = doc.create_text("world");
        doc.append_child(a, inner);
        doc.replace_node(t, &[before, a]);

        assert_eq!(doc.children(p).len(), 2);
        assert_eq!(doc.parent(a), Some(p));
        assert_eq!(doc.text_content(), "hello world");
    }

    #[test]
    fn ancestor_lookup_walks_whole_chain() {
        let mut doc = Document::new();
        let sup = doc.create_element("sup", vec![]);
        doc.append_root(sup);
        let a = doc.create_element("a", vec![]);
        doc.append_child(sup, a);
        let t = doc.create_text("[1]");
        doc.append_child(a, t);

        assert!(doc.has_ancestor_named(t, &["sup"]));
        assert!(doc.has_ancestor_named(t, &["a"]));
        assert!(!doc.has_ancestor_named(t, &["code"]));
    }

    #[test]
    fn descendant_text_ignores_comments() {
        let mut doc = Document::new();
        let p = doc.create_element("p", vec![]);
        doc.append_root(p);
        let c = doc.create_comment(" note ");
        doc.append_child(p, c);
        let t = doc.create_text("visible");
        doc.append_child(p, t);

        assert_eq!(doc.descendant_text(p), "visible");
    }
}
