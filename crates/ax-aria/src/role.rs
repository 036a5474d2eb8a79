//! Role Editing
//!
//! Token-list editing for the `role` attribute. Same algebra as the
//! relation id lists, without id generation or cross-node lookups.
//! Role names are not validated.

use ax_dom::{Document, NodeId};

use crate::token_list;

/// Role tokens for add/remove operations
pub enum RoleSpec<'a> {
    /// Space-separated role tokens
    Tokens(&'a str),
    /// Evaluated per node with `(index, current roles)`; the result is
    /// re-dispatched for that node alone
    PerNode(Box<dyn Fn(usize, Option<&str>) -> String + 'a>),
}

impl<'a> RoleSpec<'a> {
    pub fn per_node(f: impl Fn(usize, Option<&str>) -> String + 'a) -> Self {
        Self::PerNode(Box::new(f))
    }
}

/// Raw `role` attribute of a node
pub fn roles(doc: &Document, node: NodeId) -> Option<&str> {
    doc.get_attribute(node, "role")
}

/// Replace the `role` attribute on every node
pub fn set_roles(doc: &mut Document, nodes: &[NodeId], value: &str) {
    for &node in nodes {
        doc.set_attribute(node, "role", value);
    }
}

/// Union role tokens onto every node
pub fn add_roles(doc: &mut Document, nodes: &[NodeId], spec: &RoleSpec) {
    match spec {
        RoleSpec::Tokens(value) => {
            let tokens: Vec<&str> = value.split_whitespace().collect();
            if tokens.is_empty() {
                return;
            }
            for &node in nodes {
                let current = doc.get_attribute(node, "role").map(str::to_string);
                let next = token_list::add(current.as_deref(), &tokens);
                doc.set_attribute(node, "role", &next);
            }
        }
        RoleSpec::PerNode(f) => {
            for (i, &node) in nodes.iter().enumerate() {
                let value = f(i, doc.get_attribute(node, "role"));
                add_roles(doc, std::slice::from_ref(&node), &RoleSpec::Tokens(&value));
            }
        }
    }
}

/// True if any node carries the role token
pub fn has_role(doc: &Document, nodes: &[NodeId], name: &str) -> bool {
    nodes
        .iter()
        .any(|&n| token_list::contains(doc.get_attribute(n, "role"), name))
}

/// Empty the `role` attribute on every node
///
/// The attribute is set to `""`, not deleted.
pub fn clear_roles(doc: &mut Document, nodes: &[NodeId]) {
    for &node in nodes {
        doc.set_attribute(node, "role", "");
    }
}

/// Delete role tokens from every node
///
/// Nodes without a `role` attribute are left untouched.
pub fn remove_roles(doc: &mut Document, nodes: &[NodeId], spec: &RoleSpec) {
    match spec {
        RoleSpec::Tokens(value) => {
            let tokens: Vec<&str> = value.split_whitespace().collect();
            if tokens.is_empty() {
                return;
            }
            for &node in nodes {
                let current = doc.get_attribute(node, "role").map(str::to_string);
                if let Some(next) = token_list::remove(current.as_deref(), &tokens) {
                    doc.set_attribute(node, "role", &next);
                }
            }
        }
        RoleSpec::PerNode(f) => {
            for (i, &node) in nodes.iter().enumerate() {
                let value = f(i, doc.get_attribute(node, "role"));
                remove_roles(doc, std::slice::from_ref(&node), &RoleSpec::Tokens(&value));
            }
        }
    }
}

/// Add or remove role tokens
///
/// `force` works like the DOM `toggleAttribute` force flag: `Some(true)`
/// always adds, `Some(false)` always removes, `None` toggles each token
/// per node.
pub fn toggle_roles(doc: &mut Document, nodes: &[NodeId], value: &str, force: Option<bool>) {
    match force {
        Some(true) => add_roles(doc, nodes, &RoleSpec::Tokens(value)),
        Some(false) => remove_roles(doc, nodes, &RoleSpec::Tokens(value)),
        None => {
            for &node in nodes {
                for token in value.split_whitespace() {
                    let present = token_list::contains(doc.get_attribute(node, "role"), token);
                    let spec = RoleSpec::Tokens(token);
                    if present {
                        remove_roles(doc, std::slice::from_ref(&node), &spec);
                    } else {
                        add_roles(doc, std::slice::from_ref(&node), &spec);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_node() -> (Document, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let el = doc.create_element("div");
        doc.append_child(root, el);
        (doc, el)
    }

    #[test]
    fn test_add_and_has_role() {
        let (mut doc, el) = doc_with_node();

        add_roles(&mut doc, &[el], &RoleSpec::Tokens("menu navigation"));
        assert_eq!(roles(&doc, el), Some("menu navigation"));
        assert!(has_role(&doc, &[el], "menu"));
        assert!(!has_role(&doc, &[el], "tree"));

        // Adding an existing role is a no-op
        add_roles(&mut doc, &[el], &RoleSpec::Tokens("menu"));
        assert_eq!(roles(&doc, el), Some("menu navigation"));
    }

    #[test]
    fn test_remove_roles() {
        let (mut doc, el) = doc_with_node();
        set_roles(&mut doc, &[el], "menu navigation link");

        remove_roles(&mut doc, &[el], &RoleSpec::Tokens("navigation"));
        assert_eq!(roles(&doc, el), Some("menu link"));

        // Removing from a role-less node does not create the attribute
        let other = doc.create_element("span");
        remove_roles(&mut doc, &[other], &RoleSpec::Tokens("menu"));
        assert_eq!(roles(&doc, other), None);
    }

    #[test]
    fn test_clear_roles_empties_but_keeps() {
        let (mut doc, el) = doc_with_node();
        set_roles(&mut doc, &[el], "menu");

        clear_roles(&mut doc, &[el]);
        assert_eq!(roles(&doc, el), Some(""));
    }

    #[test]
    fn test_per_node_role_function() {
        let (mut doc, el) = doc_with_node();
        let other = doc.create_element("div");
        let root = doc.root();
        doc.append_child(root, other);

        add_roles(
            &mut doc,
            &[el, other],
            &RoleSpec::per_node(|i, _| if i == 0 { "menu".into() } else { "tree".into() }),
        );
        assert_eq!(roles(&doc, el), Some("menu"));
        assert_eq!(roles(&doc, other), Some("tree"));
    }

    #[test]
    fn test_toggle_roles() {
        let (mut doc, el) = doc_with_node();
        set_roles(&mut doc, &[el], "menu");

        toggle_roles(&mut doc, &[el], "menu navigation", None);
        assert_eq!(roles(&doc, el), Some("navigation"));

        toggle_roles(&mut doc, &[el], "menu", Some(true));
        toggle_roles(&mut doc, &[el], "menu", Some(true));
        assert_eq!(roles(&doc, el), Some("navigation menu"));

        toggle_roles(&mut doc, &[el], "menu navigation", Some(false));
        assert_eq!(roles(&doc, el), Some(""));
    }
}
