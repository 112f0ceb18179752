#![allow(dead_code)]

use bbz_model::{Alias, Edition, EntityOption, EntityType, RelationshipType};
use serde_json::json;

pub fn loaded_edition() -> Edition {
    serde_json::from_value(json!({
        "bbid": "ed-1",
        "defaultAlias": {"id": 11, "name": "Dune", "sortName": "Dune", "languageId": 120, "primary": true, "default": true},
        "disambiguation": {"comment": "first edition"},
        "aliasSet": {"aliases": [
            {"id": 11, "name": "Dune", "sortName": "Dune", "language": {"id": 120, "name": "English"}, "languageId": 120, "primary": true, "default": true},
            {"id": 12, "name": "Duna", "sortName": "Duna", "language": {"id": 153, "name": "Spanish"}, "languageId": 153, "primary": false, "default": false}
        ]},
        "identifierSet": {"identifiers": [
            {"id": 21, "type": {"id": 1, "label": "ISBN-13"}, "typeId": 1, "value": "9780801950773"}
        ]},
        "relationships": [
            {
                "id": 31,
                "type": {"id": 10, "label": "Contains", "linkPhrase": "contains", "sourceEntityType": "Edition", "targetEntityType": "Work"},
                "source": {"bbid": "ed-1", "type": "Edition"},
                "target": {"bbid": "wk-1", "type": "Work", "defaultAlias": {"id": 41, "name": "Dune", "sortName": "Dune", "languageId": 120, "primary": true, "default": true}}
            }
        ],
        "depth": 40,
        "height": 240,
        "pages": 412,
        "weight": null,
        "width": 160,
        "editionFormat": {"id": 2, "label": "Hardcover"},
        "editionStatus": {"id": 1, "label": "Official"},
        "languageSet": {"languages": [{"id": 120, "name": "English"}]},
        "releaseEventSet": {"releaseEvents": [{"date": "1965-08-01"}]},
        "publisherSet": {"publishers": [
            {"bbid": "pub-1", "type": "Publisher", "defaultAlias": {"id": 51, "name": "Chilton Books", "sortName": "Chilton Books", "languageId": 120, "primary": true, "default": true}}
        ]},
        "editionGroup": {"bbid": "eg-1", "type": "EditionGroup", "defaultAlias": {"id": 61, "name": "Dune", "sortName": "Dune", "languageId": 120, "primary": true, "default": true}}
    }))
    .expect("edition fixture")
}

pub fn relationship_types() -> Vec<RelationshipType> {
    serde_json::from_value(json!([
        {"id": 3, "label": "Edition", "linkPhrase": "is an edition of", "sourceEntityType": "Edition", "targetEntityType": "EditionGroup"},
        {"id": 4, "label": "Publisher", "linkPhrase": "published", "sourceEntityType": "Publisher", "targetEntityType": "Edition"},
        {"id": 10, "label": "Contains", "linkPhrase": "contains", "sourceEntityType": "Edition", "targetEntityType": "Work"}
    ]))
    .expect("relationship types fixture")
}

pub fn option(id: &str, entity_type: EntityType, name: &str) -> EntityOption {
    EntityOption {
        id: id.to_string(),
        text: name.to_string(),
        entity_type,
        disambiguation: None,
        default_alias: Some(Alias {
            id: 900,
            name: name.to_string(),
            sort_name: name.to_string(),
            language: None,
            language_id: Some(120),
            primary: true,
            default: true,
        }),
    }
}
