//! Related-Id Minting
//!
//! Assigns collision-free ids to anonymous relation targets so they
//! can be referenced from id-list attributes.

use ax_dom::{Document, Node, NodeId};

/// Prefix used when no ancestor carries an id
pub const FALLBACK_PREFIX: &str = "aria-related-item";

/// Mints ids of the form `<prefix>_<n>` for anonymous nodes
///
/// The counter only increments, so two mints never produce the same
/// candidate; each candidate is additionally checked against every id
/// in the document before it is assigned.
#[derive(Debug, Default)]
pub struct RelatedIdGenerator {
    counter: u64,
}

impl RelatedIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the counter at `seed` (deterministic tests)
    pub fn starting_at(seed: u64) -> Self {
        Self { counter: seed }
    }

    /// Return the node's id, minting one if it has none
    ///
    /// The prefix is the id of the nearest ancestor that has one, or
    /// [`FALLBACK_PREFIX`]. Returns `None` for non-element nodes, which
    /// cannot carry an id.
    pub fn ensure_id(&mut self, doc: &mut Document, node: NodeId) -> Option<String> {
        if let Some(id) = doc.id(node) {
            return Some(id.to_string());
        }
        if !doc.tree().get(node).is_some_and(Node::is_element) {
            return None;
        }

        let prefix = doc
            .tree()
            .ancestors(node)
            .find_map(|(_, n)| n.as_element().and_then(|e| e.id()))
            .unwrap_or(FALLBACK_PREFIX)
            .to_string();

        loop {
            self.counter += 1;
            let candidate = format!("{prefix}_{}", self.counter);
            if doc.get_element_by_id(&candidate).is_none() {
                tracing::debug!(node = ?node, id = %candidate, "minted related id");
                doc.set_id(node, &candidate);
                return Some(candidate);
            }
        }
    }
}
