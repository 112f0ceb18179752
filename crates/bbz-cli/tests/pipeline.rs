//! Tests for the file-backed pipeline entry points.

use std::fs;
use std::path::Path;

use bbz_cli::fixtures::FixtureStore;
use bbz_cli::pipeline::{create_props, form_state_from_file, submission_from_file};
use bbz_editor::CreationContext;
use bbz_model::{Field, RowKey};
use bbz_transform::TransformOptions;
use serde_json::{Value, json};

fn write_json(dir: &Path, name: &str, value: &Value) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).expect("serialize")).expect("write");
    path
}

fn edition_json() -> Value {
    json!({
        "bbid": "ed-1",
        "defaultAlias": {"id": 11, "name": "Dune", "sortName": "Dune", "languageId": 120, "primary": true, "default": true},
        "aliasSet": {"aliases": [
            {"id": 11, "name": "Dune", "sortName": "Dune", "languageId": 120, "primary": true, "default": true}
        ]},
        "pages": 412,
        "releaseEventSet": {"releaseEvents": [{"date": "1965"}]}
    })
}

#[test]
fn form_state_then_submission_from_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let edition_path = write_json(dir.path(), "edition.json", &edition_json());

    let (edition, state) = form_state_from_file(&edition_path).expect("form state");
    assert_eq!(edition.bbid, "ed-1");
    assert_eq!(state.name_section.name, "Dune");

    let form_path = write_json(
        dir.path(),
        "form.json",
        &serde_json::to_value(&state).expect("serialize state"),
    );
    let payload = submission_from_file(&form_path).expect("payload");
    assert_eq!(payload.aliases.len(), 1);
    assert_eq!(payload.release_events[0].date, "1965");
    assert_eq!(payload.pages.value().and_then(|pages| pages.as_integer()), Some(412));
    assert_eq!(payload.publishers, Field::Absent);
}

#[test]
fn form_without_edition_section_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let form_path = write_json(dir.path(), "form.json", &json!({}));
    let error = submission_from_file(&form_path).expect_err("missing section");
    assert!(format!("{error:#}").contains("editionSection"));
}

#[test]
fn unreadable_input_names_the_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_json(dir.path(), "broken.json", &json!({"bbid": 5}));
    let error = form_state_from_file(&path).expect_err("bad edition");
    assert!(format!("{error:#}").contains("broken.json"));
}

#[test]
fn create_props_from_fixtures() {
    let dir = tempfile::tempdir().expect("temp dir");
    let fixtures_path = write_json(
        dir.path(),
        "fixtures.json",
        &json!({
            "entities": [
                {"bbid": "w-1", "type": "Work", "defaultAlias": {"id": 1, "name": "Dune", "sortName": "Dune", "languageId": 120, "primary": true, "default": true}},
                {"bbid": "p-1", "type": "Publisher"}
            ],
            "relationshipTypes": [
                {"id": 4, "label": "Publisher"},
                {"id": 10, "label": "Contains"}
            ]
        }),
    );

    let fixtures = FixtureStore::load(&fixtures_path).expect("fixtures");
    assert_eq!(fixtures.len(), 2);
    assert_eq!(fixtures.reference().relationship_types.len(), 2);

    let context = CreationContext::from_query([("publisher", "p-1"), ("work", "w-1")]);
    let props = create_props(&fixtures, &context, &TransformOptions::default()).expect("props");

    let relationships = &props.initial_state.relationship_section.relationships;
    assert_eq!(relationships.len(), 2);
    assert_eq!(relationships[&RowKey::New(0)].relationship_type.label, "Publisher");
    assert_eq!(relationships[&RowKey::New(1)].relationship_type.label, "Contains");

    let section = props.initial_state.edition_section.expect("edition section");
    assert_eq!(
        section.publisher.value().map(|publisher| publisher.text.as_str()),
        Some("(unnamed)")
    );
    assert_eq!(props.initial_state.name_section.name, "Dune");
}
