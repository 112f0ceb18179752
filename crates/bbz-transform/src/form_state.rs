//! Persisted Edition to editor form state.

use std::collections::BTreeMap;

use bbz_model::{
    Alias, AliasRow, ButtonBar, Edition, EditionSection, Field, FormScalar, FormState,
    IdentifierRow, LanguageOption, NameSection, RelationshipEndpoint, RelationshipRow,
    RelationshipSection, RowKey, SubmissionSection,
};
use tracing::debug;

use crate::alias::split_default_alias;
use crate::date::iso_date_to_parts;
use crate::option::entity_to_option;

/// Build the editor form state for a loaded Edition.
///
/// Unloaded relations are treated as empty. Optional values keep the
/// difference between "not loaded" (absent) and "loaded but empty" (`null`)
/// where the editor relies on it: the publisher is absent when the publisher
/// set was not loaded and `null` when it has no publishers.
pub fn edition_to_form_state(edition: &Edition) -> FormState {
    let aliases: Vec<&Alias> = edition
        .alias_set
        .as_ref()
        .map(|set| set.aliases.iter().collect())
        .unwrap_or_default();
    let (default_alias, other_aliases) = split_default_alias(aliases);

    let alias_editor: BTreeMap<RowKey, AliasRow> = other_aliases
        .into_iter()
        .map(|alias| (RowKey::Persisted(alias.id), AliasRow::from(alias)))
        .collect();

    let mut name_section = default_alias.map_or_else(NameSection::blank, name_section_from_alias);
    name_section.disambiguation = edition
        .disambiguation
        .as_ref()
        .map(|disambiguation| disambiguation.comment.clone());

    let identifier_editor: BTreeMap<RowKey, IdentifierRow> = edition
        .identifier_set
        .iter()
        .flat_map(|set| set.identifiers.iter())
        .map(|identifier| {
            (
                RowKey::Persisted(identifier.id),
                IdentifierRow {
                    id: Some(identifier.id),
                    identifier_type: identifier.type_key(),
                    value: identifier.value.clone(),
                },
            )
        })
        .collect();

    let button_bar = ButtonBar {
        alias_editor_visible: false,
        disambiguation_visible: edition.disambiguation.is_some(),
        identifier_editor_visible: false,
    };

    let relationship_section = RelationshipSection {
        last_relationships: None,
        relationship_editor_visible: false,
        relationships: edition
            .relationships
            .iter()
            .map(|relationship| {
                let row_id = RowKey::Persisted(relationship.id);
                (
                    row_id,
                    RelationshipRow {
                        attribute_set_id: relationship.attribute_set_id,
                        relationship_type: relationship.relationship_type.clone(),
                        row_id,
                        source_entity: RelationshipEndpoint::from(&relationship.source),
                        target_entity: RelationshipEndpoint::from(&relationship.target),
                    },
                )
            })
            .collect(),
    };

    debug!(
        bbid = %edition.bbid,
        aliases = alias_editor.len(),
        identifiers = identifier_editor.len(),
        relationships = relationship_section.relationships.len(),
        "built edition form state"
    );

    FormState {
        alias_editor,
        button_bar,
        edition_section: Some(edition_section(edition)),
        identifier_editor,
        name_section,
        relationship_section,
        submission_section: Some(SubmissionSection::default()),
    }
}

fn name_section_from_alias(alias: &Alias) -> NameSection {
    NameSection {
        language_id: alias.language_id,
        ..NameSection::from_alias_row(AliasRow::from(alias))
    }
}

fn edition_section(edition: &Edition) -> EditionSection {
    let physical_visible = [
        edition.depth,
        edition.height,
        edition.pages,
        edition.weight,
        edition.width,
    ]
    .iter()
    .any(Option::is_some);

    // Only the first release event is represented in the editor.
    let release_date = edition
        .release_event_set
        .as_ref()
        .and_then(|set| set.release_events.first())
        .and_then(|event| event.date.as_deref())
        .map(iso_date_to_parts)
        .unwrap_or_default();

    let publisher = match &edition.publisher_set {
        None => Field::Absent,
        Some(set) => Field::from_option_null(entity_to_option(set.publishers.first())),
    };

    let languages = edition
        .language_set
        .iter()
        .flat_map(|set| set.languages.iter())
        .map(|language| LanguageOption {
            label: language.name.clone(),
            value: language.id,
        })
        .collect();

    EditionSection {
        depth: integer_field(edition.depth),
        edition_group: Field::from_option_null(entity_to_option(edition.edition_group.as_ref())),
        edition_group_required: Some(true),
        edition_group_visible: Some(true),
        format: integer_field(edition.edition_format.as_ref().map(|format| format.id)),
        height: integer_field(edition.height),
        languages: Some(languages),
        pages: integer_field(edition.pages),
        physical_visible: Some(physical_visible),
        publisher,
        release_date: Some(release_date),
        status: integer_field(edition.edition_status.as_ref().map(|status| status.id)),
        weight: integer_field(edition.weight),
        width: integer_field(edition.width),
    }
}

fn integer_field(value: Option<i64>) -> Field<FormScalar> {
    Field::from_option_null(value.map(FormScalar::Integer))
}
