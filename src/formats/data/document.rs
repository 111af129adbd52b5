//! Data document structures
//!
//! An arena-backed mutable tree. Nodes refer to each other by index, which
//! keeps parent back-references cheap and lets callers collect node ids from
//! an immutable walk and mutate them afterwards without invalidation.

use indexmap::IndexMap;

/// Index of a node within its document's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single tag in a data document.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Tag name.
    pub tag: String,
    /// Attributes, in source order, unique per key.
    pub attributes: IndexMap<String, String>,
    /// Text content. Mutually exclusive with element children.
    pub text: Option<String>,
}

impl Element {
    /// Creates a new element with the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attributes: IndexMap::new(),
            text: None,
        }
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// What a node in the tree is.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// The synthetic arena root. Owns prolog comments and the root element.
    Document,
    /// A tag.
    Element(Element),
    /// A comment, stored verbatim (without the `<!--`/`-->` delimiters).
    Comment(String),
}

/// A node in a data document.
#[derive(Debug, Clone)]
pub struct Node {
    /// The node's content.
    pub kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// One parsed game-data XML document.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document (just the synthetic document node).
    #[must_use]
    pub fn new() -> Self {
        Document {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The synthetic document node at the top of every tree.
    #[must_use]
    pub fn document_node(&self) -> NodeId {
        NodeId(0)
    }

    /// The first element below the document node, if any.
    #[must_use]
    pub fn root_element(&self) -> Option<NodeId> {
        self.children(self.document_node())
            .iter()
            .copied()
            .find(|&id| self.element(id).is_some())
    }

    /// Borrow a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Borrow a node as an element, if it is one.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Mutably borrow a node as an element, if it is one.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.0].kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The node's parent, `None` for the document node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// The node's children, in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Append an element under `parent` and return its id.
    ///
    /// A parent holding text cannot also hold children; its text is dropped.
    pub fn append_element(&mut self, parent: NodeId, element: Element) -> NodeId {
        if let NodeKind::Element(parent_element) = &mut self.nodes[parent.0].kind {
            parent_element.text = None;
        }
        self.push_node(parent, NodeKind::Element(element))
    }

    /// Append a comment under `parent` and return its id.
    pub fn append_comment(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.push_node(parent, NodeKind::Comment(text.into()))
    }

    fn push_node(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Ancestor elements of a node, closest first, ending at the root element.
    /// The synthetic document node is not included.
    #[must_use]
    pub fn ancestor_elements(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if self.element(ancestor).is_some() {
                chain.push(ancestor);
            }
            current = self.parent(ancestor);
        }
        chain
    }

    /// Collect every element matching the predicate, in document order.
    pub fn find_elements<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Document, NodeId) -> bool,
    {
        let mut found = Vec::new();
        let mut stack = vec![self.document_node()];
        while let Some(id) = stack.pop() {
            if self.element(id).is_some() && predicate(self, id) {
                found.push(id);
            }
            for &child in self.children(id).iter().rev() {
                stack.push(child);
            }
        }
        found
    }

    /// 1-based position of an element among preceding siblings with the
    /// same tag name. The first of its kind is 1.
    #[must_use]
    pub fn sibling_ordinal(&self, id: NodeId) -> usize {
        let Some(element) = self.element(id) else {
            return 1;
        };
        let Some(parent) = self.parent(id) else {
            return 1;
        };
        let mut ordinal = 1;
        for &sibling in self.children(parent) {
            if sibling == id {
                break;
            }
            if self
                .element(sibling)
                .is_some_and(|other| other.tag == element.tag)
            {
                ordinal += 1;
            }
        }
        ordinal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let root = doc.append_element(doc.document_node(), Element::new("FTL"));
        let event = doc.append_element(root, Element::new("event"));
        let text = doc.append_element(event, Element::new("text"));
        (doc, root, event, text)
    }

    #[test]
    fn test_ancestor_chain_is_closest_first() {
        let (doc, root, event, text) = sample();
        assert_eq!(doc.ancestor_elements(text), vec![event, root]);
    }

    #[test]
    fn test_child_replaces_text() {
        let mut doc = Document::new();
        let root = doc.append_element(doc.document_node(), Element::new("FTL"));
        if let Some(element) = doc.element_mut(root) {
            element.text = Some("stray".to_string());
        }
        doc.append_element(root, Element::new("event"));
        assert_eq!(doc.element(root).unwrap().text, None);
    }

    #[test]
    fn test_sibling_ordinal_counts_same_tag_only() {
        let mut doc = Document::new();
        let root = doc.append_element(doc.document_node(), Element::new("FTL"));
        let event = doc.append_element(root, Element::new("event"));
        let first = doc.append_element(event, Element::new("choice"));
        doc.append_element(event, Element::new("text"));
        let second = doc.append_element(event, Element::new("choice"));
        let third = doc.append_element(event, Element::new("choice"));
        assert_eq!(doc.sibling_ordinal(first), 1);
        assert_eq!(doc.sibling_ordinal(second), 2);
        assert_eq!(doc.sibling_ordinal(third), 3);
    }

    #[test]
    fn test_find_elements_document_order() {
        let (doc, root, event, text) = sample();
        let all = doc.find_elements(|_, _| true);
        assert_eq!(all, vec![root, event, text]);
    }
}
