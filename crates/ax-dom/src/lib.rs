//! AX DOM - element tree and attribute store
//!
//! Memory-efficient arena tree with named string attributes.
//!
//! Features:
//! - Arena allocation, `NodeId` indices instead of pointers
//! - Ordered attribute maps with cached `id` lookup
//! - Ancestor / child traversal
//! - Simple CSS-style selector matching

mod attrs;
mod document;
mod node;
mod selector;
mod tree;

pub use attrs::{Attr, AttrMap};
pub use document::Document;
pub use node::{ElementData, Node, NodeData, TextData};
pub use selector::SimpleSelector;
pub use tree::{Ancestors, Children, DomTree};

/// Node identifier (index into the tree arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this id refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}
