//! ARIA Attributes
//!
//! Get/set helpers for `aria-*` attributes.

use ax_dom::{Document, NodeId};

fn aria_name(key: &str) -> String {
    format!("aria-{key}")
}

/// Read `aria-<key>` on a node
pub fn get<'d>(doc: &'d Document, node: NodeId, key: &str) -> Option<&'d str> {
    doc.get_attribute(node, &aria_name(key))
}

/// Write `aria-<key>` on every node
pub fn set(doc: &mut Document, nodes: &[NodeId], key: &str, value: &str) {
    let name = aria_name(key);
    for &node in nodes {
        doc.set_attribute(node, &name, value);
    }
}

/// Every `aria-*` attribute on a node, prefix stripped, in insertion
/// order
pub fn all(doc: &Document, node: NodeId) -> Vec<(String, String)> {
    doc.attribute_names(node)
        .into_iter()
        .filter_map(|name| {
            let key = name.strip_prefix("aria-")?;
            let value = doc.get_attribute(node, name)?;
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Remove ARIA attributes from every node
///
/// `keys` is a whitespace-separated key list; `None` removes every
/// `aria-*` attribute.
pub fn remove(doc: &mut Document, nodes: &[NodeId], keys: Option<&str>) {
    for &node in nodes {
        let names: Vec<String> = match keys {
            Some(list) => list.split_whitespace().map(aria_name).collect(),
            None => doc
                .attribute_names(node)
                .into_iter()
                .filter(|n| n.starts_with("aria-"))
                .map(str::to_string)
                .collect(),
        };
        for name in names {
            doc.remove_attribute(node, &name);
        }
    }
}

/// True if the node carries any `aria-*` attribute
pub fn has(doc: &Document, node: NodeId) -> bool {
    doc.attribute_names(node)
        .iter()
        .any(|n| n.starts_with("aria-"))
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
    fn test_get_set() {
        let (mut doc, el) = doc_with_node();

        set(&mut doc, &[el], "expanded", "true");
        assert_eq!(get(&doc, el, "expanded"), Some("true"));
        assert_eq!(doc.get_attribute(el, "aria-expanded"), Some("true"));
    }

    #[test]
    fn test_all_strips_prefix() {
        let (mut doc, el) = doc_with_node();
        doc.set_attribute(el, "class", "menu");
        set(&mut doc, &[el], "owns", "a b");
        set(&mut doc, &[el], "label", "Main");

        assert_eq!(
            all(&doc, el),
            vec![
                ("owns".to_string(), "a b".to_string()),
                ("label".to_string(), "Main".to_string()),
            ]
        );
    }

    #[test]
    fn test_remove_listed_keys() {
        let (mut doc, el) = doc_with_node();
        set(&mut doc, &[el], "owns", "a");
        set(&mut doc, &[el], "label", "Main");

        remove(&mut doc, &[el], Some("owns"));
        assert_eq!(get(&doc, el, "owns"), None);
        assert_eq!(get(&doc, el, "label"), Some("Main"));
    }

    #[test]
    fn test_remove_all_and_has() {
        let (mut doc, el) = doc_with_node();
        doc.set_attribute(el, "class", "menu");
        set(&mut doc, &[el], "owns", "a");
        set(&mut doc, &[el], "live", "polite");
        assert!(has(&doc, el));

        remove(&mut doc, &[el], None);
        assert!(!has(&doc, el));
        // Non-ARIA attributes survive
        assert_eq!(doc.get_attribute(el, "class"), Some("menu"));
    }
}
