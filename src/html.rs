//! Arena-backed output element tree.
//!
//! Elements follow the text/tail model: `text` is the content before the
//! first child, `tail` the content after the element's closing tag. Moving
//! an element moves its tail with it.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Write;

/// Handle to an element of an [`HtmlTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(usize);

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    text: String,
    tail: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// A mutable element tree with a single root.
#[derive(Debug, Clone)]
pub struct HtmlTree {
    elements: Vec<Element>,
    root: ElementId,
}

impl HtmlTree {
    /// Create a tree whose root element has the given tag.
    pub fn new(root_tag: impl Into<String>) -> Self {
        let mut tree = Self {
            elements: Vec::new(),
            root: ElementId(0),
        };
        tree.root = tree.create_element(root_tag);
        tree
    }

    /// The root element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: impl Into<String>) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            tag: tag.into(),
            attributes: IndexMap::new(),
            text: String::new(),
            tail: String::new(),
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Number of elements ever created, attached or not.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the tree only holds its root.
    pub fn is_empty(&self) -> bool {
        self.elements.len() <= 1
    }

    /// Tag name of an element.
    pub fn tag(&self, id: ElementId) -> &str {
        &self.elements[id.0].tag
    }

    /// Text before the first child.
    pub fn text(&self, id: ElementId) -> &str {
        &self.elements[id.0].text
    }

    /// Set the text before the first child.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        self.elements[id.0].text = text.into();
    }

    /// Text after the closing tag.
    pub fn tail(&self, id: ElementId) -> &str {
        &self.elements[id.0].tail
    }

    /// Set the text after the closing tag.
    pub fn set_tail(&mut self, id: ElementId, tail: impl Into<String>) {
        self.elements[id.0].tail = tail.into();
    }

    /// Get an attribute value.
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.elements[id.0].attributes.get(name).map(String::as_str)
    }

    /// Set an attribute value.
    pub fn set_attribute(&mut self, id: ElementId, name: impl Into<String>, value: impl Into<String>) {
        self.elements[id.0].attributes.insert(name.into(), value.into());
    }

    /// Parent of an element, if attached.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements[id.0].parent
    }

    /// Children of an element, in order.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.elements[id.0].children
    }

    /// Position of `child` among the children of `parent`.
    pub fn index_of(&self, parent: ElementId, child: ElementId) -> Option<usize> {
        self.children(parent).iter().position(|c| *c == child)
    }

    /// Remove an element from its parent, keeping its subtree.
    pub fn detach(&mut self, id: ElementId) {
        if let Some(parent) = self.elements[id.0].parent.take() {
            self.elements[parent.0].children.retain(|c| *c != id);
        }
    }

    /// Append `child` as the last child of `parent`, moving it if attached.
    pub fn append(&mut self, parent: ElementId, child: ElementId) {
        let index = self.children(parent).len();
        self.insert(parent, index, child);
    }

    /// Insert `child` at `index` among the children of `parent`, moving it if attached.
    ///
    /// The index is taken relative to the children as they are before the
    /// move. Inserting an element into its own subtree is refused.
    pub fn insert(&mut self, parent: ElementId, index: usize, child: ElementId) {
        if self.is_ancestor_or_self(child, parent) {
            log::warn!("refusing to insert {:?} into its own subtree", child);
            return;
        }
        let mut index = index;
        if let Some(old) = self.elements[child.0].parent {
            if old == parent {
                if let Some(pos) = self.index_of(parent, child) {
                    if pos < index {
                        index -= 1;
                    }
                }
            }
        }
        self.detach(child);

        let siblings = &mut self.elements[parent.0].children;
        let index = index.min(siblings.len());
        siblings.insert(index, child);
        self.elements[child.0].parent = Some(parent);
    }

    fn is_ancestor_or_self(&self, candidate: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Serialize the subtree rooted at `id`, including its tail.
    pub fn to_html(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.write_element(&mut out, id);
        out
    }

    /// Serialize the whole tree.
    pub fn to_html_document(&self) -> String {
        self.to_html(self.root)
    }

    fn write_element(&self, out: &mut String, id: ElementId) {
        let element = &self.elements[id.0];
        out.push('<');
        out.push_str(&element.tag);
        for (name, value) in &element.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value, true));
        }
        out.push('>');
        out.push_str(&escape(&element.text, false));
        for child in &element.children {
            self.write_element(out, *child);
        }
        let _ = write!(out, "</{}>", element.tag);
        out.push_str(&escape(&element.tail, false));
    }
}

fn escape(text: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
