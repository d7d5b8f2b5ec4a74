//! Handle to a single node produced by one query call.

use crate::helpers::node as node_helper;
use libxml::tree::{Document, Node, NodeType};
use std::collections::HashMap;
use std::fmt;

/// A node together with its owning document, so it can be serialized and
/// inspected after the query that produced it has returned.
///
/// Both fields are reference-counted engine handles; cloning an `Element`
/// does not copy the underlying tree.
#[derive(Clone)]
pub struct Element {
    node: Node,
    document: Document,
}

impl Element {
    pub(crate) fn new(node: Node, document: Document) -> Self {
        Self { node, document }
    }

    /// Tag name for element hits, attribute name for attribute hits.
    pub fn name(&self) -> String {
        self.node.get_name()
    }

    /// String-value: concatenated descendant text for elements, the value
    /// for attributes and text nodes.
    pub fn text(&self) -> String {
        self.node.get_content()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.node.get_attribute(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.node.get_attribute(name).is_some()
    }

    pub fn attributes(&self) -> HashMap<String, String> {
        self.node.get_attributes()
    }

    /// Markup of the node's children.
    pub fn inner_markup(&self) -> String {
        node_helper::inner_markup(&self.document, &self.node)
    }

    /// Markup of the node itself.
    pub fn outer_markup(&self) -> String {
        node_helper::outer_markup(&self.document, &self.node)
    }

    pub fn is_element(&self) -> bool {
        self.node.get_type() == Some(NodeType::ElementNode)
    }

    pub fn is_attribute(&self) -> bool {
        self.node.get_type() == Some(NodeType::AttributeNode)
    }

    /// Raw engine node, for callers that need the full engine API.
    pub fn node(&self) -> &Node {
        &self.node
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}
