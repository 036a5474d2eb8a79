//! Tree Node
//!
//! Sibling-linked node records stored in the arena. Uses `NodeId`
//! (4 bytes) instead of pointers.

use crate::{AttrMap, NodeId};

/// Tree node
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn detached(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(name: impl Into<String>) -> Self {
        Self::detached(NodeData::Element(ElementData::new(name)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::detached(NodeData::Text(TextData {
            content: content.into(),
        }))
    }

    /// Create a document root node
    pub fn document() -> Self {
        Self::detached(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(TextData),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name
    pub name: String,
    /// Attributes
    pub attrs: AttrMap,
    /// Cached id attribute (very common lookup)
    id: Option<String>,
}

impl ElementData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: AttrMap::new(),
            id: None,
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Set an attribute, keeping the id cache in sync
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if name == "id" {
            self.id = Some(value.to_string());
        }
        self.attrs.set(name, value);
    }

    /// Remove an attribute, keeping the id cache in sync
    pub fn remove_attr(&mut self, name: &str) {
        if name == "id" {
            self.id = None;
        }
        self.attrs.remove(name);
    }

    /// Cached id attribute
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Check if the element carries a class token
    pub fn has_class(&self, class: &str) -> bool {
        self.attrs
            .get("class")
            .is_some_and(|v| v.split_whitespace().any(|c| c == class))
    }
}

/// Text node data
#[derive(Debug)]
pub struct TextData {
    pub content: String,
}
