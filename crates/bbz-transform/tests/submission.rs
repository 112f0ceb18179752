//! Tests for the submission transformer.

mod common;

use std::collections::{BTreeMap, BTreeSet};

use bbz_model::{
    AliasPayload, AliasRow, Coerced, DateParts, EditionSection, Field, FormScalar, FormState,
    IdentifierPayload, IdentifierRow, NameSection, RelationshipPayload, RelationshipSection,
    RowKey, SubmissionSection,
};
use bbz_transform::{
    PayloadConstructors, StandardConstructors, TransformError, additional_props,
    edition_to_form_state, transform_new_form,
};

use common::loaded_edition;

fn form_with_date(release_date: DateParts) -> FormState {
    FormState {
        edition_section: Some(EditionSection {
            release_date: Some(release_date),
            ..EditionSection::default()
        }),
        submission_section: Some(SubmissionSection::default()),
        ..FormState::default()
    }
}

#[test]
fn empty_release_date_gives_no_events() {
    let payload = transform_new_form(&form_with_date(DateParts::default()), &StandardConstructors)
        .expect("transform");
    assert!(payload.release_events.is_empty());
}

#[test]
fn day_and_month_without_year_are_dropped() {
    let payload = transform_new_form(
        &form_with_date(DateParts::new("", "08", "01")),
        &StandardConstructors,
    )
    .expect("transform");
    assert!(payload.release_events.is_empty());
}

#[test]
fn year_only_release_date() {
    let payload = transform_new_form(
        &form_with_date(DateParts::new("2020", "", "")),
        &StandardConstructors,
    )
    .expect("transform");
    insta::assert_json_snapshot!(payload.release_events, @r#"
    [
      {
        "date": "2020"
      }
    ]
    "#);
}

#[test]
fn whitespace_year_still_produces_an_event() {
    let payload = transform_new_form(
        &form_with_date(DateParts::new("  ", "", "")),
        &StandardConstructors,
    )
    .expect("transform");
    assert_eq!(payload.release_events.len(), 1);
    assert_eq!(payload.release_events[0].date, "  ");
}

#[test]
fn numeric_fields_are_coerced() {
    let mut form = form_with_date(DateParts::default());
    if let Some(section) = form.edition_section.as_mut() {
        section.pages = Field::Value(FormScalar::Text("412".to_string()));
        section.depth = Field::Value(FormScalar::Text(String::new()));
        section.height = Field::Null;
        section.width = Field::Value(FormScalar::Text("wide".to_string()));
        section.format = Field::Value(FormScalar::Integer(2));
    }

    let payload = transform_new_form(&form, &StandardConstructors).expect("transform");
    assert_eq!(payload.pages, Field::Value(Coerced::Integer(412)));
    assert_eq!(
        payload.depth,
        Field::Value(Coerced::Falsy(FormScalar::Text(String::new())))
    );
    assert_eq!(payload.height, Field::Null);
    assert!(payload.weight.is_absent());
    assert_eq!(
        payload.width,
        Field::Value(Coerced::NotANumber("wide".to_string()))
    );
    assert_eq!(payload.format_id, Field::Value(Coerced::Integer(2)));
    assert!(payload.status_id.is_absent());
}

#[test]
fn missing_sections_are_reported() {
    let error = transform_new_form(&FormState::default(), &StandardConstructors)
        .expect_err("missing edition section");
    assert!(matches!(error, TransformError::MissingSection("editionSection")));

    let form = FormState {
        edition_section: Some(EditionSection::default()),
        ..FormState::default()
    };
    let error = transform_new_form(&form, &StandardConstructors)
        .expect_err("missing submission section");
    assert!(matches!(error, TransformError::MissingSection("submissionSection")));
}

#[test]
fn note_passes_through() {
    let mut form = form_with_date(DateParts::default());
    form.submission_section = Some(SubmissionSection {
        note: Field::Value("added ISBN".to_string()),
    });
    let payload = transform_new_form(&form, &StandardConstructors).expect("transform");
    assert_eq!(payload.note, Field::Value("added ISBN".to_string()));
}

#[test]
fn unmodified_form_reproduces_edition() {
    let edition = loaded_edition();
    let state = edition_to_form_state(&edition);
    let payload = transform_new_form(&state, &StandardConstructors).expect("transform");

    let persisted_aliases: BTreeSet<(String, String, Option<i64>)> = edition
        .alias_set
        .iter()
        .flat_map(|set| set.aliases.iter())
        .map(|alias| (alias.name.clone(), alias.sort_name.clone(), alias.language_key()))
        .collect();
    let submitted_aliases: BTreeSet<(String, String, Option<i64>)> = payload
        .aliases
        .iter()
        .map(|alias| (alias.name.clone(), alias.sort_name.clone(), alias.language_id))
        .collect();
    assert_eq!(persisted_aliases, submitted_aliases);

    let default_aliases: Vec<_> = payload.aliases.iter().filter(|alias| alias.default).collect();
    assert_eq!(default_aliases.len(), 1);
    assert_eq!(default_aliases[0].name, "Dune");

    assert_eq!(payload.identifiers.len(), 1);
    assert_eq!(payload.identifiers[0].id, RowKey::Persisted(21));
    assert_eq!(payload.identifiers[0].type_id, Some(1));
    assert_eq!(payload.identifiers[0].value, "9780801950773");

    assert_eq!(payload.relationships.len(), 1);
    let relationship = &payload.relationships[0];
    assert_eq!(relationship.id, RowKey::Persisted(31));
    assert_eq!(relationship.type_id, 10);
    assert_eq!(relationship.source_bbid.as_deref(), Some("ed-1"));
    assert_eq!(relationship.target_bbid.as_deref(), Some("wk-1"));

    assert_eq!(payload.release_events.len(), 1);
    assert_eq!(payload.release_events[0].date, "1965-08-01");

    assert_eq!(payload.disambiguation.as_deref(), Some("first edition"));
    assert_eq!(payload.edition_group_bbid, Field::Value("eg-1".to_string()));
    assert_eq!(payload.publishers, Field::Value(vec!["pub-1".to_string()]));
    assert_eq!(payload.languages, vec![120]);
    assert_eq!(payload.pages, Field::Value(Coerced::Integer(412)));
    assert_eq!(payload.weight, Field::Null);
    assert_eq!(payload.format_id, Field::Value(Coerced::Integer(2)));
    assert_eq!(payload.status_id, Field::Value(Coerced::Integer(1)));
}

#[test]
fn additional_props_lists_present_fields() {
    let edition = loaded_edition();
    let state = edition_to_form_state(&edition);
    let payload = transform_new_form(&state, &StandardConstructors).expect("transform");

    let props = additional_props(&payload).expect("additional props");
    assert_eq!(props["editionGroupBbid"], "eg-1");
    assert_eq!(props["pages"], 412);
    assert!(props["weight"].is_null());
    assert!(!props.contains_key("aliases"));
    assert!(!props.contains_key("note"));
}

/// Constructors that reject identifiers without a type.
struct TypedIdentifiersOnly;

impl PayloadConstructors for TypedIdentifiersOnly {
    fn construct_aliases(
        &self,
        alias_editor: &BTreeMap<RowKey, AliasRow>,
        name_section: &NameSection,
    ) -> Result<Vec<AliasPayload>, TransformError> {
        StandardConstructors.construct_aliases(alias_editor, name_section)
    }

    fn construct_identifiers(
        &self,
        identifier_editor: &BTreeMap<RowKey, IdentifierRow>,
    ) -> Result<Vec<IdentifierPayload>, TransformError> {
        if let Some((key, _)) = identifier_editor
            .iter()
            .find(|(_, row)| row.identifier_type.is_none())
        {
            return Err(TransformError::Construct {
                kind: "identifier",
                message: format!("row {key} has no type"),
            });
        }
        StandardConstructors.construct_identifiers(identifier_editor)
    }

    fn construct_relationships(
        &self,
        relationship_section: &RelationshipSection,
    ) -> Result<Vec<RelationshipPayload>, TransformError> {
        StandardConstructors.construct_relationships(relationship_section)
    }
}

#[test]
fn constructor_failure_is_propagated() {
    let mut form = form_with_date(DateParts::default());
    form.identifier_editor.insert(
        RowKey::New(0),
        IdentifierRow {
            id: None,
            identifier_type: None,
            value: "0441013597".to_string(),
        },
    );

    let error = transform_new_form(&form, &TypedIdentifiersOnly).expect_err("untyped identifier");
    assert_eq!(error.to_string(), "failed to construct identifier: row n0 has no type");

    let payload = transform_new_form(&form, &StandardConstructors).expect("standard constructors");
    assert_eq!(payload.identifiers[0].id, RowKey::New(0));
}
