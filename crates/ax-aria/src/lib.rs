//! AX ARIA
//!
//! ARIA semantics for the AX element tree.
//!
//! Features:
//! - `aria-*` attribute helpers
//! - Role token-list editing
//! - Cross-element relation graph (`aria-owns`, `aria-controls`, ...)
//! - Collision-free id minting for anonymous relation targets
//! - Atomic-ancestor resolution for change notifications

pub mod atomic;
pub mod attr;
pub mod idgen;
pub mod related;
pub mod relation;
pub mod role;
pub mod token_list;

pub use atomic::atomic;
pub use idgen::RelatedIdGenerator;
pub use related::{NodeSet, RelatedFilter, RelationEditor, Removal, Targets};
pub use relation::{resolve_relation, RelationSpec};
pub use role::RoleSpec;

/// ARIA error
#[derive(Debug, thiserror::Error)]
pub enum AriaError {
    #[error("Unsupported relation specifier: {0:?}")]
    UnsupportedRelation(String),
}
