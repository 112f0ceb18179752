//! Options controlling the transformation pipeline.

use serde::{Deserialize, Serialize};

/// Which end of a bootstrapped relationship the contextual entity occupies.
/// The entity being created takes the other end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextRole {
    Source,
    Target,
}

/// Relationship synthesized when an entity is created in the context of a
/// related entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapRule {
    pub relationship_type_id: i64,
    pub context_role: ContextRole,
}

impl BootstrapRule {
    pub const fn new(relationship_type_id: i64, context_role: ContextRole) -> Self {
        Self {
            relationship_type_id,
            context_role,
        }
    }
}

/// Bootstrap rules for each contextual entity accepted on the creation
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// `<Publisher> published <Edition>`.
    pub publisher: BootstrapRule,
    /// `<Edition> is an edition of <EditionGroup>`.
    pub edition_group: BootstrapRule,
    /// `<Edition> contains <Work>`.
    pub work: BootstrapRule,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            publisher: BootstrapRule::new(4, ContextRole::Source),
            edition_group: BootstrapRule::new(3, ContextRole::Target),
            work: BootstrapRule::new(10, ContextRole::Target),
        }
    }
}
