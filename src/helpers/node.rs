//! Node serialization through the engine.

use libxml::tree::{Document, Node, NodeType};

/// Serialize the node itself, tags included.
pub fn outer_markup(document: &Document, node: &Node) -> String {
    if node.get_type() == Some(NodeType::AttributeNode) {
        return node.get_content();
    }
    document.node_to_string(node)
}

/// Serialize the node's children, dropping the node's own tags.
///
/// For attribute nodes this is the attribute value; for a document node it
/// is the full document markup.
pub fn inner_markup(document: &Document, node: &Node) -> String {
    if node.get_type() == Some(NodeType::AttributeNode) {
        return node.get_content();
    }
    node.get_child_nodes()
        .iter()
        .map(|child| document.node_to_string(child))
        .collect()
}
