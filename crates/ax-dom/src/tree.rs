//! DOM Tree (arena-based allocation)

use crate::{Node, NodeId};

/// Arena-based tree for memory efficiency
///
/// Node 0 is always the document root. Newly created nodes are
/// detached until appended.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree containing only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document root
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree holds only the root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element node
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content))
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let prev_last = match self.get(parent) {
            Some(p) => p.last_child,
            None => return,
        };

        if let Some(c) = self.get_mut(child) {
            c.parent = parent;
            c.prev_sibling = prev_last;
            c.next_sibling = NodeId::NONE;
        }
        if let Some(prev) = self.get_mut(prev_last) {
            prev.next_sibling = child;
        }
        if let Some(p) = self.get_mut(parent) {
            if !p.first_child.is_valid() {
                p.first_child = child;
            }
            p.last_child = child;
        }
    }

    /// Iterate over the direct children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            cur: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Iterate over the ancestors of a node, nearest first (excludes `id`)
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            cur: self.get(id).map_or(NodeId::NONE, |n| n.parent),
        }
    }

    /// Get an attribute value on an element node
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.get_attr(name)
    }

    /// Set an attribute on an element node (no-op for non-elements)
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.get_mut(id).and_then(Node::as_element_mut) {
            tracing::trace!(node = id.0, name, value, "set attribute");
            elem.set_attr(name, value);
        }
    }

    /// Remove an attribute from an element node
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let Some(elem) = self.get_mut(id).and_then(Node::as_element_mut) {
            tracing::trace!(node = id.0, name, "remove attribute");
            elem.remove_attr(name);
        }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    cur: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur;
        let node = self.tree.get(id)?;
        self.cur = node.next_sibling;
        Some((id, node))
    }
}

/// Iterator over a node's ancestors, nearest first
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    cur: NodeId,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur;
        let node = self.tree.get(id)?;
        self.cur = node.parent;
        Some((id, node))
    }
}
