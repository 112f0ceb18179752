//! Initial relationships for an entity created in context.
//!
//! When an Edition is created from a publisher, edition group or work page,
//! the editor starts with a relationship to that entity already in place.
//! [`BootstrapDraft`] threads the initial form state through each contextual
//! branch; every step consumes the draft and hands back the updated one.

use bbz_model::{
    EditionSection, EntityOption, EntityType, Field, FormState, NameSection,
    RelationshipEndpoint, RelationshipRow, RelationshipType, RowKey,
};
use tracing::{debug, warn};

use crate::options::{BootstrapRule, ContextRole, TransformOptions};

/// Contextual entities supplied on the creation path, already projected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextualOptions {
    pub publisher: Option<EntityOption>,
    pub edition_group: Option<EntityOption>,
    pub work: Option<EntityOption>,
}

impl ContextualOptions {
    pub fn is_empty(&self) -> bool {
        self.publisher.is_none() && self.edition_group.is_none() && self.work.is_none()
    }
}

/// Initial form state under construction.
#[derive(Debug)]
pub struct BootstrapDraft<'a> {
    state: FormState,
    entity_type: EntityType,
    relationship_types: &'a [RelationshipType],
    options: &'a TransformOptions,
    next_index: u32,
}

impl<'a> BootstrapDraft<'a> {
    pub fn new(
        state: FormState,
        entity_type: EntityType,
        relationship_types: &'a [RelationshipType],
        options: &'a TransformOptions,
    ) -> Self {
        Self {
            state,
            entity_type,
            relationship_types,
            options,
            next_index: 0,
        }
    }

    /// Make sure the entity-specific section exists.
    #[must_use]
    pub fn with_edition_section(mut self) -> Self {
        self.state
            .edition_section
            .get_or_insert_with(EditionSection::default);
        self
    }

    /// Select the publisher and relate it to the new edition.
    #[must_use]
    pub fn with_publisher(mut self, publisher: &EntityOption) -> Self {
        self.section().publisher = Field::Value(publisher.clone());
        let rule = self.options.publisher;
        self.push_relationship(rule, publisher);
        self
    }

    /// Select the edition group and relate the new edition to it.
    #[must_use]
    pub fn with_edition_group(mut self, edition_group: &EntityOption) -> Self {
        self.section().edition_group = Field::Value(edition_group.clone());
        let rule = self.options.edition_group;
        self.push_relationship(rule, edition_group);
        self
    }

    /// Name the new edition after the work and relate it to the work.
    #[must_use]
    pub fn with_work(mut self, work: &EntityOption) -> Self {
        self.state.name_section = initial_name_section(work);
        let rule = self.options.work;
        self.push_relationship(rule, work);
        self
    }

    pub fn finish(self) -> FormState {
        self.state
    }

    fn section(&mut self) -> &mut EditionSection {
        self.state
            .edition_section
            .get_or_insert_with(EditionSection::default)
    }

    fn push_relationship(&mut self, rule: BootstrapRule, context: &EntityOption) {
        let relationship_type = self
            .relationship_types
            .iter()
            .find(|kind| kind.id == rule.relationship_type_id)
            .cloned()
            .unwrap_or_else(|| {
                warn!(
                    relationship_type_id = rule.relationship_type_id,
                    "relationship type missing from reference data"
                );
                RelationshipType::with_id(rule.relationship_type_id)
            });

        let row_id = RowKey::New(self.next_index);
        self.next_index += 1;

        let context_end = RelationshipEndpoint::from(context);
        let new_end = RelationshipEndpoint::unsaved(self.entity_type);
        let (source_entity, target_entity) = match rule.context_role {
            ContextRole::Source => (context_end, new_end),
            ContextRole::Target => (new_end, context_end),
        };

        debug!(
            row_id = %row_id,
            relationship_type_id = relationship_type.id,
            context = %context.id,
            "added initial relationship"
        );
        self.state.relationship_section.relationships.insert(
            row_id,
            RelationshipRow {
                attribute_set_id: None,
                relationship_type,
                row_id,
                source_entity,
                target_entity,
            },
        );
    }
}

/// Name section derived from the work's full default alias.
fn initial_name_section(work: &EntityOption) -> NameSection {
    match &work.default_alias {
        Some(alias) => NameSection {
            id: None,
            name: alias.name.clone(),
            sort_name: alias.sort_name.clone(),
            language: alias.language_key(),
            language_id: alias.language_key(),
            primary: Some(alias.primary),
            default: None,
            disambiguation: work.disambiguation.clone(),
        },
        None => NameSection {
            disambiguation: work.disambiguation.clone(),
            ..NameSection::blank()
        },
    }
}

/// Apply the contextual entities to `state` in the fixed order publisher,
/// edition group, work.
///
/// Relationship rows are keyed `n0`, `n1`, ... in that order no matter which
/// contextual entities are present.
pub fn bootstrap_relationships(
    state: FormState,
    contextual: &ContextualOptions,
    relationship_types: &[RelationshipType],
    options: &TransformOptions,
) -> FormState {
    let mut draft = BootstrapDraft::new(state, EntityType::Edition, relationship_types, options);
    if contextual.is_empty() {
        return draft.finish();
    }
    draft = draft.with_edition_section();
    if let Some(publisher) = &contextual.publisher {
        draft = draft.with_publisher(publisher);
    }
    if let Some(edition_group) = &contextual.edition_group {
        draft = draft.with_edition_group(edition_group);
    }
    if let Some(work) = &contextual.work {
        draft = draft.with_work(work);
    }
    draft.finish()
}
