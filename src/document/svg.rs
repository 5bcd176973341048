//! SVG document builder with a group context stack
//!
//! Nodes live in an arena and refer to their children by index. Primitives
//! are appended to the current context: the most recently opened group that
//! has not been closed, or the root `<svg>` element when none is open.
//! [`Svg::transform`] targets the last node appended to that context, or the
//! context itself when it is still empty, which lets a freshly opened group
//! receive its transform before its contents are added.

use crate::document::attributes::{Attributes, Value};
use crate::document::number::format_number;
use crate::document::transform::Transform;
use crate::io::configuration::{DEFAULT_DOCUMENT_SIZE, SVG_NAMESPACE};
use std::fmt;

/// Index of a node in the document arena
pub type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Clone, Debug)]
struct Node {
    name: &'static str,
    attributes: Attributes,
    children: Vec<NodeId>,
}

impl Node {
    const fn new(name: &'static str, attributes: Attributes) -> Self {
        Self {
            name,
            attributes,
            children: Vec::new(),
        }
    }
}

/// Read-only view of one element, yielded in document order
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    /// Tag name
    pub name: &'a str,
    /// Attributes in serialization order
    pub attributes: &'a Attributes,
    /// Nesting depth below the root element, starting at 1
    pub depth: usize,
}

impl Element<'_> {
    /// Attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }
}

/// An SVG document under construction
#[derive(Clone, Debug)]
pub struct Svg {
    nodes: Vec<Node>,
    context: Vec<NodeId>,
}

impl Default for Svg {
    fn default() -> Self {
        Self::new()
    }
}

impl Svg {
    /// Create a document with the default 100x100 size
    pub fn new() -> Self {
        let root = Attributes::new()
            .with("xmlns", SVG_NAMESPACE)
            .with("width", DEFAULT_DOCUMENT_SIZE)
            .with("height", DEFAULT_DOCUMENT_SIZE);
        Self {
            nodes: vec![Node::new("svg", root)],
            context: Vec::new(),
        }
    }

    fn current_context(&self) -> NodeId {
        self.context.last().copied().unwrap_or(ROOT)
    }

    fn current_node(&self) -> NodeId {
        let context = self.current_context();
        self.nodes
            .get(context)
            .and_then(|node| node.children.last().copied())
            .unwrap_or(context)
    }

    fn append(&mut self, name: &'static str, attributes: Attributes) -> NodeId {
        let id = self.nodes.len();
        let parent = self.current_context();
        self.nodes.push(Node::new(name, attributes));
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(id);
        }
        id
    }

    fn root_mut(&mut self) -> Option<&mut Node> {
        self.nodes.get_mut(ROOT)
    }

    /// Open a `<g>` element and make it the insertion context
    pub fn group(&mut self, attributes: &Attributes) -> &mut Self {
        let id = self.append("g", attributes.clone());
        self.context.push(id);
        self
    }

    /// Close the most recently opened group
    ///
    /// Does nothing when no group is open.
    pub fn end(&mut self) -> &mut Self {
        self.context.pop();
        self
    }

    /// Set the `transform` attribute of the current node
    pub fn transform(&mut self, transform: &Transform) -> &mut Self {
        let target = self.current_node();
        if let Some(node) = self.nodes.get_mut(target) {
            node.attributes.set("transform", transform.to_string());
        }
        self
    }

    /// Append a `<rect>`
    pub fn rect(
        &mut self,
        x: impl Into<Value>,
        y: impl Into<Value>,
        width: impl Into<Value>,
        height: impl Into<Value>,
        attributes: &Attributes,
    ) -> &mut Self {
        let mut merged = Attributes::new()
            .with("x", x)
            .with("y", y)
            .with("width", width)
            .with("height", height);
        merged.merge(attributes);
        self.append("rect", merged);
        self
    }

    /// Append one `<rect>` per `[x, y, width, height]` entry
    pub fn rects(&mut self, rects: &[[f64; 4]], attributes: &Attributes) -> &mut Self {
        for &[x, y, width, height] in rects {
            self.rect(x, y, width, height, attributes);
        }
        self
    }

    /// Append a `<circle>`
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, attributes: &Attributes) -> &mut Self {
        let mut merged = Attributes::new().with("cx", cx).with("cy", cy).with("r", r);
        merged.merge(attributes);
        self.append("circle", merged);
        self
    }

    /// Append a `<path>` with raw path data
    pub fn path(&mut self, data: &str, attributes: &Attributes) -> &mut Self {
        let mut merged = Attributes::new().with("d", data);
        merged.merge(attributes);
        self.append("path", merged);
        self
    }

    /// Append a `<polyline>`
    pub fn polyline(&mut self, points: &impl fmt::Display, attributes: &Attributes) -> &mut Self {
        let mut merged = Attributes::new().with("points", points.to_string());
        merged.merge(attributes);
        self.append("polyline", merged);
        self
    }

    /// Append one sibling `<polyline>` per entry
    pub fn polylines<P: fmt::Display>(&mut self, points: &[P], attributes: &Attributes) -> &mut Self {
        for entry in points {
            self.polyline(entry, attributes);
        }
        self
    }

    /// Set the document width, floored to whole pixels
    pub fn set_width(&mut self, width: f64) {
        if let Some(root) = self.root_mut() {
            root.attributes.set("width", format_number(width.floor()));
        }
    }

    /// Set the document height, floored to whole pixels
    pub fn set_height(&mut self, height: f64) {
        if let Some(root) = self.root_mut() {
            root.attributes.set("height", format_number(height.floor()));
        }
    }

    /// Attributes of the root `<svg>` element
    pub fn root_attributes(&self) -> Option<&Attributes> {
        self.nodes.get(ROOT).map(|node| &node.attributes)
    }

    /// Number of groups currently open
    pub const fn open_groups(&self) -> usize {
        self.context.len()
    }

    /// Number of elements below the root
    pub const fn element_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Every element below the root, depth first in document order
    pub fn elements(&self) -> Vec<Element<'_>> {
        let mut elements = Vec::with_capacity(self.element_count());
        let mut pending: Vec<(NodeId, usize)> = self
            .nodes
            .get(ROOT)
            .map(|root| root.children.iter().rev().map(|&id| (id, 1)).collect())
            .unwrap_or_default();

        while let Some((id, depth)) = pending.pop() {
            if let Some(node) = self.nodes.get(id) {
                elements.push(Element {
                    name: node.name,
                    attributes: &node.attributes,
                    depth,
                });
                pending.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
            }
        }

        elements
    }

    /// Serialize the whole document
    pub fn to_markup(&self) -> String {
        self.to_string()
    }

    fn write_node(&self, id: NodeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(node) = self.nodes.get(id) else {
            return Ok(());
        };

        write!(f, "<{}", node.name)?;
        for (name, value) in node.attributes.iter() {
            write!(f, " {name}=\"{value}\"")?;
        }
        f.write_str(">")?;
        for &child in &node.children {
            self.write_node(child, f)?;
        }
        write!(f, "</{}>", node.name)
    }
}

impl fmt::Display for Svg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(ROOT, f)
    }
}
