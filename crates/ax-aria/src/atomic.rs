//! Atomic Ancestors
//!
//! Resolves the element that should be presented as one change unit,
//! per the `aria-atomic` live-region semantics:
//!
//! 1. No ancestor sets `aria-atomic` explicitly: only the changed node
//!    is presented.
//! 2. The nearest explicit `aria-atomic` is `"false"`: the upward
//!    search stops and only the changed node is presented.
//! 3. Any other explicit value: that ancestor is presented whole.

use ax_dom::{Document, Node, NodeId};

use crate::NodeSet;

/// Resolve the atomic scope for each node
///
/// One result per input node, order preserved; the input set stays
/// reachable through [`NodeSet::origin`].
pub fn atomic(doc: &Document, nodes: &[NodeId]) -> NodeSet {
    let mut out = Vec::with_capacity(nodes.len());
    for &node in nodes {
        let found = doc.closest(node, |_, n: &Node| {
            n.as_element()
                .is_some_and(|e| e.get_attr("aria-atomic").is_some())
        });
        let result = match found {
            Some(scope) if doc.get_attribute(scope, "aria-atomic") != Some("false") => scope,
            _ => node,
        };
        out.push(result);
    }
    NodeSet::new(out, nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let grandparent = doc.create_element("section");
        let parent = doc.create_element("div");
        let leaf = doc.create_element("span");
        doc.append_child(root, grandparent);
        doc.append_child(grandparent, parent);
        doc.append_child(parent, leaf);
        (doc, grandparent, parent, leaf)
    }

    #[test]
    fn test_explicit_true_on_grandparent() {
        let (mut doc, grandparent, _, leaf) = chain();
        doc.set_attribute(grandparent, "aria-atomic", "true");

        let set = atomic(&doc, &[leaf]);
        assert_eq!(set.nodes(), &[grandparent]);
        assert_eq!(set.origin(), &[leaf]);
    }

    #[test]
    fn test_no_explicit_attribute_yields_self() {
        let (doc, _, _, leaf) = chain();
        assert_eq!(atomic(&doc, &[leaf]).nodes(), &[leaf]);
    }

    #[test]
    fn test_explicit_false_yields_self() {
        let (mut doc, grandparent, _, leaf) = chain();
        // The nearer "false" wins over the farther "true"
        doc.set_attribute(grandparent, "aria-atomic", "true");
        doc.set_attribute(leaf, "aria-atomic", "false");

        assert_eq!(atomic(&doc, &[leaf]).nodes(), &[leaf]);
    }

    #[test]
    fn test_empty_value_is_explicit() {
        let (mut doc, _, parent, leaf) = chain();
        doc.set_attribute(parent, "aria-atomic", "");

        assert_eq!(atomic(&doc, &[leaf]).nodes(), &[parent]);
    }

    #[test]
    fn test_self_can_be_the_atomic_scope() {
        let (mut doc, _, _, leaf) = chain();
        doc.set_attribute(leaf, "aria-atomic", "true");

        assert_eq!(atomic(&doc, &[leaf]).nodes(), &[leaf]);
    }

    #[test]
    fn test_one_result_per_input_without_dedup() {
        let (mut doc, grandparent, parent, leaf) = chain();
        doc.set_attribute(grandparent, "aria-atomic", "true");

        let set = atomic(&doc, &[leaf, parent]);
        assert_eq!(set.nodes(), &[grandparent, grandparent]);
    }
}
