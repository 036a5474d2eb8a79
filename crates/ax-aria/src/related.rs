//! Relation Graph
//!
//! Cross-element relations stored as whitespace-separated id lists in
//! `aria-*` (or `data-*`) attributes: query the referenced elements,
//! link new targets, unlink or drop them again.

use ax_dom::{Document, NodeId, SimpleSelector};

use crate::{token_list, AriaError, RelatedIdGenerator, RelationSpec};

/// Resolved node set with provenance
///
/// `origin` is the node set the traversal started from, kept so callers
/// can step back to it after chaining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSet {
    nodes: Vec<NodeId>,
    origin: Vec<NodeId>,
}

impl NodeSet {
    pub(crate) fn new(nodes: Vec<NodeId>, origin: &[NodeId]) -> Self {
        Self {
            nodes,
            origin: origin.to_vec(),
        }
    }

    /// Resolved nodes, in discovery order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The node set the traversal started from
    pub fn origin(&self) -> &[NodeId] {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }
}

/// Target elements for linking
pub enum Targets<'a> {
    /// Whitespace-separated id list, written as-is (no liveness check)
    Ids(String),
    /// Ids resolved to live nodes first; unknown ids are skipped
    IdList(Vec<String>),
    /// Live nodes; anonymous elements get a minted id
    Nodes(Vec<NodeId>),
    /// Invoked once per linking node; the result is re-dispatched for
    /// that node alone
    PerNode(Box<dyn Fn(NodeId, &Document) -> Targets<'a> + 'a>),
}

impl<'a> Targets<'a> {
    pub fn ids(ids: impl Into<String>) -> Self {
        Self::Ids(ids.into())
    }

    pub fn node(node: NodeId) -> Self {
        Self::Nodes(vec![node])
    }

    pub fn per_node(f: impl Fn(NodeId, &Document) -> Targets<'a> + 'a) -> Self {
        Self::PerNode(Box::new(f))
    }
}

/// What to unlink
pub enum Removal<'a> {
    /// Delete the relation attribute entirely
    All,
    /// Remove the listed targets' ids from the value
    Targets(Targets<'a>),
    /// Per-token predicate `(token, token_index, node_index)`;
    /// `true` removes the token
    Predicate(Box<dyn Fn(&str, usize, usize) -> bool + 'a>),
}

impl<'a> Removal<'a> {
    pub fn ids(ids: impl Into<String>) -> Self {
        Self::Targets(Targets::Ids(ids.into()))
    }

    pub fn predicate(f: impl Fn(&str, usize, usize) -> bool + 'a) -> Self {
        Self::Predicate(Box::new(f))
    }
}

/// Filter applied to each source node's local result before union
pub enum RelatedFilter<'a> {
    /// Simple selector (`#id`, `.class`, `tag`, `*`) or the positional
    /// `:first`, applied within each source node's own related set
    Selector(&'a str),
    /// Keep nodes for which the callback returns true
    Predicate(Box<dyn Fn(NodeId, &Document) -> bool + 'a>),
}

impl<'a> RelatedFilter<'a> {
    pub fn predicate(f: impl Fn(NodeId, &Document) -> bool + 'a) -> Self {
        Self::Predicate(Box::new(f))
    }
}

enum ParsedFilter<'f> {
    None,
    First,
    Selector(SimpleSelector),
    Predicate(&'f dyn Fn(NodeId, &Document) -> bool),
}

fn parse_filter<'f>(filter: Option<&'f RelatedFilter<'_>>) -> ParsedFilter<'f> {
    match filter {
        None => ParsedFilter::None,
        Some(RelatedFilter::Selector(s)) => {
            if *s == ":first" {
                ParsedFilter::First
            } else {
                match SimpleSelector::parse(s) {
                    Some(sel) => ParsedFilter::Selector(sel),
                    None => ParsedFilter::None,
                }
            }
        }
        Some(RelatedFilter::Predicate(f)) => ParsedFilter::Predicate(f.as_ref()),
    }
}

/// Relation graph editor
///
/// Owns the id generator so anonymous targets minted across calls never
/// reuse a candidate id.
#[derive(Debug, Default)]
pub struct RelationEditor {
    idgen: RelatedIdGenerator,
}

impl RelationEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a pre-seeded id generator
    pub fn with_generator(idgen: RelatedIdGenerator) -> Self {
        Self { idgen }
    }

    /// Resolve the elements referenced from `nodes` via `rel`
    ///
    /// Each node's id list resolves against the document; unknown ids
    /// contribute nothing. `filter` applies within each node's own
    /// related set, before the per-node results are unioned and
    /// de-duplicated. Never mutates.
    pub fn related(
        &self,
        doc: &Document,
        nodes: &[NodeId],
        rel: &RelationSpec,
        filter: Option<&RelatedFilter>,
    ) -> Result<NodeSet, AriaError> {
        let fixed = rel.fixed_attribute()?;
        let parsed = parse_filter(filter);

        let mut out: Vec<NodeId> = Vec::new();
        for &node in nodes {
            let attr_name = match &fixed {
                Some(name) => name.clone(),
                None => rel.attribute_for(doc, node)?,
            };
            let Some(list) = doc.get_attribute(node, &attr_name) else {
                continue;
            };

            let mut local: Vec<NodeId> = Vec::new();
            for token in list.split_whitespace() {
                match doc.get_element_by_id(token) {
                    Some(found) => local.push(found),
                    None => tracing::debug!(token, "related id not in document"),
                }
            }

            let local: Vec<NodeId> = match &parsed {
                ParsedFilter::None => local,
                ParsedFilter::First => local.into_iter().take(1).collect(),
                ParsedFilter::Selector(sel) => local
                    .into_iter()
                    .filter(|&n| sel.matches(doc, n))
                    .collect(),
                ParsedFilter::Predicate(f) => {
                    local.into_iter().filter(|&n| f(n, doc)).collect()
                }
            };

            for id in local {
                if !out.contains(&id) {
                    out.push(id);
                }
            }
        }

        Ok(NodeSet::new(out, nodes))
    }

    /// Link `targets` from every node in `nodes` via `rel`
    ///
    /// Id-string targets are written verbatim; node targets get an id
    /// minted when they have none. Linking an already-listed id leaves
    /// the value unchanged. Application order follows input order.
    pub fn add_related(
        &mut self,
        doc: &mut Document,
        nodes: &[NodeId],
        rel: &RelationSpec,
        targets: &Targets,
    ) -> Result<(), AriaError> {
        // Fixed relation names fail before any attribute is touched
        rel.fixed_attribute()?;
        self.add_targets(doc, nodes, rel, targets)
    }

    fn add_targets(
        &mut self,
        doc: &mut Document,
        nodes: &[NodeId],
        rel: &RelationSpec,
        targets: &Targets,
    ) -> Result<(), AriaError> {
        match targets {
            Targets::Ids(ids) => {
                let tokens: Vec<&str> = ids.split_whitespace().collect();
                if tokens.is_empty() {
                    return Ok(());
                }
                for &node in nodes {
                    let attr_name = rel.attribute_for(doc, node)?;
                    let current = doc.get_attribute(node, &attr_name).map(str::to_string);
                    let next = token_list::add(current.as_deref(), &tokens);
                    doc.set_attribute(node, &attr_name, &next);
                }
                Ok(())
            }
            Targets::IdList(ids) => {
                let mut found: Vec<NodeId> = Vec::new();
                for id in ids {
                    match doc.get_element_by_id(id) {
                        Some(n) => found.push(n),
                        None => tracing::debug!(id = %id, "target id not in document, skipping"),
                    }
                }
                self.add_targets(doc, nodes, rel, &Targets::Nodes(found))
            }
            Targets::Nodes(list) => {
                for &target in list {
                    let Some(id) = self.idgen.ensure_id(doc, target) else {
                        continue;
                    };
                    self.add_targets(doc, nodes, rel, &Targets::Ids(id))?;
                }
                Ok(())
            }
            Targets::PerNode(f) => {
                for &node in nodes {
                    let resolved = f(node, doc);
                    self.add_targets(doc, std::slice::from_ref(&node), rel, &resolved)?;
                }
                Ok(())
            }
        }
    }

    /// Unlink targets from every node in `nodes` via `rel`
    ///
    /// [`Removal::All`] deletes the attribute; the other forms rewrite
    /// it in place, even when no token survives. Ids not currently
    /// listed are ignored, so repeated removals are idempotent.
    pub fn remove_related(
        &mut self,
        doc: &mut Document,
        nodes: &[NodeId],
        rel: &RelationSpec,
        removal: &Removal,
    ) -> Result<(), AriaError> {
        rel.fixed_attribute()?;
        match removal {
            Removal::All => {
                for &node in nodes {
                    let attr_name = rel.attribute_for(doc, node)?;
                    doc.remove_attribute(node, &attr_name);
                }
            }
            Removal::Targets(targets) => {
                for &node in nodes {
                    let attr_name = rel.attribute_for(doc, node)?;
                    let ids = self.removal_ids(doc, node, targets);
                    let tokens: Vec<&str> = ids.iter().map(String::as_str).collect();
                    let current = doc.get_attribute(node, &attr_name).map(str::to_string);
                    if let Some(next) = token_list::remove(current.as_deref(), &tokens) {
                        doc.set_attribute(node, &attr_name, &next);
                    }
                }
            }
            Removal::Predicate(pred) => {
                for (node_index, &node) in nodes.iter().enumerate() {
                    let attr_name = rel.attribute_for(doc, node)?;
                    let Some(current) = doc.get_attribute(node, &attr_name).map(str::to_string)
                    else {
                        continue;
                    };
                    let kept: Vec<&str> = current
                        .split_whitespace()
                        .enumerate()
                        .filter(|(i, t)| !pred(t, *i, node_index))
                        .map(|(_, t)| t)
                        .collect();
                    doc.set_attribute(node, &attr_name, &kept.join(" "));
                }
            }
        }
        Ok(())
    }

    /// Normalize removal targets to bare ids for one unlinking node
    ///
    /// Nodes without an id contribute nothing removable; no id is ever
    /// minted on the removal path.
    fn removal_ids(&self, doc: &Document, node: NodeId, targets: &Targets) -> Vec<String> {
        match targets {
            Targets::Ids(ids) => ids.split_whitespace().map(str::to_string).collect(),
            Targets::IdList(ids) => ids.clone(),
            Targets::Nodes(list) => list
                .iter()
                .filter_map(|&n| doc.id(n).map(str::to_string))
                .collect(),
            Targets::PerNode(f) => {
                let resolved = f(node, doc);
                self.removal_ids(doc, node, &resolved)
            }
        }
    }
}
