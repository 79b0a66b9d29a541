//! Owned document tree.
//!
//! Nodes live in an arena (`Vec<Node>`) addressed by [`NodeId`]; each node
//! knows its parent and its ordered children. A side index maps `id`
//! attributes to element nodes for constant-time paint-server lookup.
//!
//! The index is maintained by [`Document::set_attribute`] and
//! [`Document::remove_attribute`]. Edits made directly through
//! [`Document::element_mut`] bypass it, which is why
//! [`Document::find_by_id`] (a structural search) exists alongside
//! [`Document::get_element_by_id`].

use crate::Style;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Index of a node in its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position in the arena; also document order for freshly parsed trees.
    pub fn index(self) -> usize {
        self.0
    }
}

/// XML declaration fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// `version` pseudo-attribute.
    pub version: String,
    /// `encoding` pseudo-attribute.
    pub encoding: Option<String>,
    /// `standalone` pseudo-attribute.
    pub standalone: Option<String>,
}

/// Node payloads.
///
/// Everything except [`NodeKind::Element`] is kept only to be written back
/// unchanged; text-like payloads hold their raw, still-escaped source.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Synthetic document node; always [`Document::DOCUMENT`].
    Document,
    /// An element.
    Element(Element),
    /// Character data (raw, escaped).
    Text(String),
    /// `<![CDATA[...]]>` content.
    CData(String),
    /// `<!--...-->` content.
    Comment(String),
    /// `<?...?>` content.
    ProcessingInstruction(String),
    /// `<?xml ...?>`.
    Declaration(Declaration),
    /// `<!DOCTYPE ...>` content.
    DocType(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// An element: qualified name plus attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    pub(crate) self_closing: bool,
}

impl Element {
    /// Creates an element with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            self_closing: true,
        }
    }

    /// Qualified name as written (`svg:stop`, `linearGradient`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name.rsplit_once(':').map_or(self.name.as_str(), |(_, l)| l)
    }

    /// Attributes in source order (unescaped values).
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Styling capability of a node: attributes plus the parsed `style` map.
///
/// The flag engine is written against this trait, not against the concrete
/// tree, so it can be exercised on a bare [`Element`].
pub trait Styled {
    /// Attribute value.
    fn attr(&self, key: &str) -> Option<&str>;

    /// Sets an attribute, keeping its position if present.
    fn set_attr(&mut self, key: &str, value: &str);

    /// Removes an attribute.
    fn remove_attr(&mut self, key: &str) -> Option<String>;

    /// `true` if the attribute is present.
    fn has_attr(&self, key: &str) -> bool {
        self.attr(key).is_some()
    }

    /// The parsed `style` attribute (empty if absent).
    fn style(&self) -> Style {
        self.attr("style").map(Style::parse).unwrap_or_default()
    }

    /// Writes `style` back; an empty style removes the attribute.
    fn set_style(&mut self, style: &Style) {
        if style.is_empty() {
            self.remove_attr("style");
        } else {
            self.set_attr("style", &style.to_string());
        }
    }
}

impl Styled for Element {
    fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    fn set_attr(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_string(), value.to_string());
    }

    fn remove_attr(&mut self, key: &str) -> Option<String> {
        self.attributes.shift_remove(key)
    }
}

/// An SVG (or any XML) document.
///
/// # Example
///
/// ```
/// use printsafe_svg::{Document, Styled};
///
/// let mut doc = Document::parse(r#"<svg><rect id="r" style="fill:red"/></svg>"#).unwrap();
/// let rect = doc.get_element_by_id("r").unwrap();
/// doc.element_mut(rect).unwrap().set_attr("data-x", "1");
/// assert_eq!(doc.to_xml_string().unwrap(), r#"<svg><rect id="r" style="fill:red" data-x="1"/></svg>"#);
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) nodes: Vec<Node>,
    pub(crate) ids: HashMap<String, NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// The synthetic document node.
    pub const DOCUMENT: NodeId = NodeId(0);

    /// An empty document.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
            ids: HashMap::new(),
        }
    }

    /// Appends a node under `parent` and returns its id.
    ///
    /// Elements carrying an `id` are indexed; the first element with a given
    /// identifier wins, as in browsers.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let NodeKind::Element(el) = &kind {
            if let Some(ident) = el.id() {
                self.ids.entry(ident.to_string()).or_insert(id);
            }
        }
        if let NodeKind::Element(p) = &mut self.nodes[parent.0].kind {
            p.self_closing = false;
        }
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Node payload.
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.0).map(|n| &n.kind)
    }

    /// Element payload, if `id` is an element.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.kind(id) {
            Some(NodeKind::Element(el)) => Some(el),
            _ => None,
        }
    }

    /// Mutable element payload. Changes to `id` made here are not indexed.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match self.nodes.get_mut(id.0).map(|n| &mut n.kind) {
            Some(NodeKind::Element(el)) => Some(el),
            _ => None,
        }
    }

    /// Parent node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    /// Children in order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map_or(&[], |n| n.children.as_slice())
    }

    /// Element children in order.
    pub fn child_elements(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id).iter().copied().filter(|&c| self.element(c).is_some())
    }

    /// The root element.
    pub fn root(&self) -> Option<NodeId> {
        self.child_elements(Self::DOCUMENT).next()
    }

    /// All elements in document order (depth-first, pre-order).
    pub fn elements(&self) -> Vec<NodeId> {
        self.descendants(Self::DOCUMENT)
    }

    /// Elements below `id` (excluding `id`) in document order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            if self.element(n).is_some() {
                out.push(n);
                stack.extend(self.children(n).iter().rev().copied());
            }
        }
        out
    }

    /// Index lookup by `id` attribute.
    pub fn get_element_by_id(&self, ident: &str) -> Option<NodeId> {
        self.ids.get(ident).copied().filter(|&n| {
            self.element(n).and_then(Element::id) == Some(ident)
        })
    }

    /// Structural search by `id` attribute, in document order.
    pub fn find_by_id(&self, ident: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|&n| self.element(n).and_then(Element::id) == Some(ident))
    }

    /// Sets an attribute and keeps the identifier index current.
    pub fn set_attribute(&mut self, id: NodeId, key: &str, value: &str) {
        let Some(el) = self.element_mut(id) else {
            return;
        };
        let old = if key == "id" { el.id().map(str::to_string) } else { None };
        el.set_attr(key, value);
        if key == "id" {
            if let Some(old) = old {
                if self.ids.get(&old) == Some(&id) {
                    self.ids.remove(&old);
                }
            }
            self.ids.entry(value.to_string()).or_insert(id);
        }
    }

    /// Removes an attribute and keeps the identifier index current.
    pub fn remove_attribute(&mut self, id: NodeId, key: &str) -> Option<String> {
        let removed = self.element_mut(id)?.remove_attr(key);
        if key == "id" {
            if let Some(old) = &removed {
                if self.ids.get(old) == Some(&id) {
                    self.ids.remove(old);
                }
            }
        }
        removed
    }

    /// Rebuilds the identifier index from the tree.
    pub fn reindex(&mut self) {
        let mut ids = HashMap::new();
        for n in self.elements() {
            if let Some(ident) = self.element(n).and_then(Element::id) {
                ids.entry(ident.to_string()).or_insert(n);
            }
        }
        self.ids = ids;
    }

    /// Number of nodes, including the synthetic document node.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the document holds nothing but the document node.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let svg = doc.append(Document::DOCUMENT, NodeKind::Element(Element::new("svg")));
        let defs = doc.append(svg, NodeKind::Element(Element::new("defs")));
        let grad = doc.append(
            defs,
            NodeKind::Element(Element::new("linearGradient").with_attr("id", "g")),
        );
        doc.append(grad, NodeKind::Element(Element::new("stop")));
        let rect = doc.append(
            svg,
            NodeKind::Element(Element::new("rect").with_attr("id", "r")),
        );
        (doc, svg, grad, rect)
    }

    #[test]
    fn test_document_order() {
        let (doc, svg, grad, rect) = sample();
        let names: Vec<_> = doc
            .elements()
            .into_iter()
            .map(|n| doc.element(n).unwrap().name().to_string())
            .collect();
        assert_eq!(names, ["svg", "defs", "linearGradient", "stop", "rect"]);
        assert_eq!(doc.root(), Some(svg));
        assert_eq!(doc.parent(rect), Some(svg));
        assert_eq!(doc.child_elements(grad).count(), 1);
    }

    #[test]
    fn test_id_index() {
        let (mut doc, _, grad, rect) = sample();
        assert_eq!(doc.get_element_by_id("g"), Some(grad));
        assert_eq!(doc.get_element_by_id("missing"), None);

        doc.set_attribute(rect, "id", "renamed");
        assert_eq!(doc.get_element_by_id("r"), None);
        assert_eq!(doc.get_element_by_id("renamed"), Some(rect));

        doc.remove_attribute(rect, "id");
        assert_eq!(doc.get_element_by_id("renamed"), None);
    }

    #[test]
    fn test_stale_index_falls_back_to_search() {
        let (mut doc, _, _, rect) = sample();
        doc.element_mut(rect).unwrap().set_attr("id", "sneaky");
        assert_eq!(doc.get_element_by_id("sneaky"), None);
        assert_eq!(doc.find_by_id("sneaky"), Some(rect));
        // Stale entry no longer matches the element's attribute.
        assert_eq!(doc.get_element_by_id("r"), None);

        doc.reindex();
        assert_eq!(doc.get_element_by_id("sneaky"), Some(rect));
    }

    #[test]
    fn test_styled_element() {
        let mut el = Element::new("svg:path").with_attr("style", "fill:red;stroke:blue");
        assert_eq!(el.local_name(), "path");
        let mut style = el.style();
        style.remove("fill");
        style.remove("stroke");
        el.set_style(&style);
        assert!(!el.has_attr("style"));
    }
}
