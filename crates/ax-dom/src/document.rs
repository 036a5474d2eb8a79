//! Document - High-level document API

use crate::{DomTree, Node, NodeId};

/// A document owning an element tree
pub struct Document {
    tree: DomTree,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            tree: DomTree::new(),
        }
    }

    /// The document root
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.tree.create_text(content)
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.tree.append_child(parent, child);
    }

    /// Get an attribute value
    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.tree.attribute(node, name)
    }

    /// Set an attribute
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.tree.set_attribute(node, name, value);
    }

    /// Remove an attribute
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        self.tree.remove_attribute(node, name);
    }

    /// Attribute names on a node, insertion order
    pub fn attribute_names(&self, node: NodeId) -> Vec<&str> {
        self.tree
            .get(node)
            .and_then(Node::as_element)
            .map(|e| e.attrs.names())
            .unwrap_or_default()
    }

    /// A node's id attribute
    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.tree.get(node).and_then(Node::as_element)?.id()
    }

    /// Assign a node's id attribute
    pub fn set_id(&mut self, node: NodeId, id: &str) {
        self.tree.set_attribute(node, "id", id);
    }

    /// Get element by ID (document-order walk from the root)
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_element_with_id(self.root(), id)
    }

    fn find_element_with_id(&self, start: NodeId, target_id: &str) -> Option<NodeId> {
        for (node_id, node) in self.tree.children(start) {
            if let Some(elem) = node.as_element() {
                if elem.id() == Some(target_id) {
                    return Some(node_id);
                }
            }
            // Recurse into children
            if let Some(found) = self.find_element_with_id(node_id, target_id) {
                return Some(found);
            }
        }
        None
    }

    /// Find the nearest ancestor-or-self satisfying `predicate`
    pub fn closest(
        &self,
        node: NodeId,
        predicate: impl Fn(NodeId, &Node) -> bool,
    ) -> Option<NodeId> {
        let self_node = self.tree.get(node)?;
        if predicate(node, self_node) {
            return Some(node);
        }
        self.tree
            .ancestors(node)
            .find(|&(id, n)| predicate(id, n))
            .map(|(id, _)| id)
    }

    /// Access the tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_element_by_id() {
        let mut doc = Document::new();
        let root = doc.root();
        let outer = doc.create_element("div");
        let inner = doc.create_element("span");
        doc.append_child(root, outer);
        doc.append_child(outer, inner);
        doc.set_id(inner, "target");

        assert_eq!(doc.get_element_by_id("target"), Some(inner));
        assert_eq!(doc.get_element_by_id("missing"), None);
    }

    #[test]
    fn test_detached_nodes_not_found_by_id() {
        let mut doc = Document::new();
        let loose = doc.create_element("div");
        doc.set_id(loose, "loose");

        assert_eq!(doc.get_element_by_id("loose"), None);
    }

    #[test]
    fn test_closest_includes_self() {
        let mut doc = Document::new();
        let root = doc.root();
        let outer = doc.create_element("div");
        let inner = doc.create_element("span");
        doc.append_child(root, outer);
        doc.append_child(outer, inner);
        doc.set_attribute(outer, "aria-live", "polite");
        doc.set_attribute(inner, "aria-live", "assertive");

        let has_live = |_: NodeId, n: &Node| {
            n.as_element().is_some_and(|e| e.get_attr("aria-live").is_some())
        };
        assert_eq!(doc.closest(inner, has_live), Some(inner));

        doc.remove_attribute(inner, "aria-live");
        assert_eq!(doc.closest(inner, has_live), Some(outer));
    }
}
