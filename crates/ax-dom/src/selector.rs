//! Element Query
//!
//! Simple CSS-style selector parsing and matching.

use crate::{Document, Node, NodeId};

/// Simple selector for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Universal,
}

impl SimpleSelector {
    /// Parse a simple selector string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s == "*" {
            Some(Self::Universal)
        } else if let Some(id) = s.strip_prefix('#') {
            Some(Self::Id(id.to_string()))
        } else if let Some(class) = s.strip_prefix('.') {
            Some(Self::Class(class.to_string()))
        } else {
            Some(Self::Tag(s.to_lowercase()))
        }
    }

    /// Check if an element node matches this selector
    ///
    /// Non-element nodes never match.
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some(elem) = doc.tree().get(node).and_then(Node::as_element) else {
            return false;
        };
        match self {
            Self::Universal => true,
            Self::Tag(tag) => elem.name.eq_ignore_ascii_case(tag),
            Self::Id(id) => elem.id() == Some(id.as_str()),
            Self::Class(class) => elem.has_class(class),
        }
    }
}
