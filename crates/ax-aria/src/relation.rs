//! Relation Names
//!
//! Maps caller-supplied relation tokens to concrete attribute names.
//! `label`, `desc` and `description` alias the standard relation
//! attributes; `$`-prefixed names address `data-*` attributes verbatim.

use ax_dom::{Document, NodeId};

use crate::AriaError;

/// Relation-name specifier accepted by the graph editor
///
/// The per-node form is evaluated lazily against each visited node, so
/// one call can touch different attributes on different nodes.
pub enum RelationSpec<'a> {
    /// The default relation, `aria-owns`
    Default,
    /// A relation token: aliased (`label`, `desc`, `description`),
    /// `$`-prefixed for `data-*`, or used verbatim
    Name(&'a str),
    /// Resolved per node; the returned token re-enters name resolution
    PerNode(Box<dyn Fn(NodeId, &Document) -> String + 'a>),
}

impl<'a> RelationSpec<'a> {
    /// Wrap a per-node relation function
    pub fn per_node(f: impl Fn(NodeId, &Document) -> String + 'a) -> Self {
        Self::PerNode(Box::new(f))
    }

    /// Resolve to the attribute name used for `node`
    pub fn attribute_for(&self, doc: &Document, node: NodeId) -> Result<String, AriaError> {
        match self {
            Self::Default => Ok("aria-owns".to_string()),
            Self::Name(name) => resolve_relation(name),
            Self::PerNode(f) => resolve_relation(&f(node, doc)),
        }
    }

    /// Attribute name when it does not vary per node
    ///
    /// Validates fixed names up front so mutating operations can fail
    /// before touching any attribute.
    pub(crate) fn fixed_attribute(&self) -> Result<Option<String>, AriaError> {
        match self {
            Self::Default => Ok(Some("aria-owns".to_string())),
            Self::Name(name) => resolve_relation(name).map(Some),
            Self::PerNode(_) => Ok(None),
        }
    }
}

impl Default for RelationSpec<'_> {
    fn default() -> Self {
        Self::Default
    }
}

impl std::fmt::Debug for RelationSpec<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => f.write_str("RelationSpec::Default"),
            Self::Name(name) => f.debug_tuple("RelationSpec::Name").field(name).finish(),
            Self::PerNode(_) => f.write_str("RelationSpec::PerNode(..)"),
        }
    }
}

/// Resolve a relation token to the attribute name it lives in
///
/// An empty token resolves to `aria-owns`. Tokens that cannot name a
/// single attribute (embedded whitespace, a bare `$`) are rejected.
pub fn resolve_relation(name: &str) -> Result<String, AriaError> {
    if name.is_empty() {
        return Ok("aria-owns".to_string());
    }
    if name.chars().any(char::is_whitespace) {
        return Err(AriaError::UnsupportedRelation(name.to_string()));
    }
    if let Some(rest) = name.strip_prefix('$') {
        // No aliasing for data attributes
        if rest.is_empty() {
            return Err(AriaError::UnsupportedRelation(name.to_string()));
        }
        return Ok(format!("data-{rest}"));
    }
    let name = match name.to_lowercase().as_str() {
        "label" => "labelledby",
        "desc" | "description" => "describedby",
        _ => name,
    };
    Ok(format!("aria-{name}"))
}
