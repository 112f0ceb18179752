//! Editor form state.
//!
//! The flat, UI-facing shape the entity editor reads and writes. Field names
//! serialize in camelCase because the editor consumes this state as JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::{Alias, EntityType, RelatedEntity, RelationshipType};
use crate::{Field, RowKey};

/// A scalar as typed into the editor: numbers may arrive as JSON numbers or
/// as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormScalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FormScalar {
    /// `0`, `0.0`, NaN and the empty string are falsy; everything else is
    /// truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            FormScalar::Integer(value) => *value != 0,
            FormScalar::Float(value) => *value != 0.0 && !value.is_nan(),
            FormScalar::Text(value) => !value.is_empty(),
        }
    }
}

/// Display-ready projection of a related entity, used by entity pickers and
/// bootstrapped relationships. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityOption {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub disambiguation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_alias: Option<Alias>,
}

/// Alias row inside the alias editor, with the language reduced to its id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub sort_name: String,
    #[serde(default)]
    pub language: Option<i64>,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub default: bool,
}

impl From<&Alias> for AliasRow {
    fn from(alias: &Alias) -> Self {
        Self {
            id: Some(alias.id),
            name: alias.name.clone(),
            sort_name: alias.sort_name.clone(),
            language: alias.language_key(),
            primary: alias.primary,
            default: alias.default,
        }
    }
}

/// Name and disambiguation of the entity under edit.
///
/// A blank section has an empty name, an empty sort name and a `null`
/// language. When built from an alias the alias fields are carried over
/// whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub sort_name: String,
    #[serde(default)]
    pub language: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<String>,
}

impl NameSection {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn from_alias_row(row: AliasRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            sort_name: row.sort_name,
            language: row.language,
            language_id: None,
            primary: Some(row.primary),
            default: Some(row.default),
            disambiguation: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type", default)]
    pub identifier_type: Option<i64>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub label: String,
    pub value: i64,
}

/// Day, month and year as entered in the editor. Blank parts are empty
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub year: String,
}

impl DateParts {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    /// True when anything at all was entered as the year, whitespace
    /// included.
    pub fn has_year(&self) -> bool {
        !self.year.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonBar {
    pub alias_editor_visible: bool,
    pub disambiguation_visible: bool,
    pub identifier_editor_visible: bool,
}

/// Edition-specific part of the form.
///
/// On the edit path every field is populated. On the creation path only the
/// values supplied by the creation context are set; the rest stay absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditionSection {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub depth: Field<FormScalar>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub edition_group: Field<EntityOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition_group_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition_group_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub format: Field<FormScalar>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub height: Field<FormScalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<LanguageOption>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub pages: Field<FormScalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub publisher: Field<EntityOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateParts>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub status: Field<FormScalar>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub weight: Field<FormScalar>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub width: Field<FormScalar>,
}

/// One end of a relationship row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipEndpoint {
    /// `None` for the entity that is still being created.
    pub bbid: Option<String>,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_alias: Option<Alias>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<String>,
}

impl RelationshipEndpoint {
    /// Endpoint standing in for an entity that has no bbid yet.
    pub fn unsaved(entity_type: EntityType) -> Self {
        Self {
            bbid: None,
            entity_type,
            default_alias: None,
            disambiguation: None,
        }
    }

    pub fn is_unsaved(&self) -> bool {
        self.bbid.is_none()
    }
}

impl From<&RelatedEntity> for RelationshipEndpoint {
    fn from(entity: &RelatedEntity) -> Self {
        Self {
            bbid: Some(entity.bbid.clone()),
            entity_type: entity.entity_type,
            default_alias: entity.default_alias.clone(),
            disambiguation: entity
                .disambiguation
                .as_ref()
                .map(|disambiguation| disambiguation.comment.clone()),
        }
    }
}

impl From<&EntityOption> for RelationshipEndpoint {
    fn from(option: &EntityOption) -> Self {
        Self {
            bbid: Some(option.id.clone()),
            entity_type: option.entity_type,
            default_alias: option.default_alias.clone(),
            disambiguation: option.disambiguation.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipRow {
    #[serde(default)]
    pub attribute_set_id: Option<i64>,
    pub relationship_type: RelationshipType,
    #[serde(rename = "rowID")]
    pub row_id: RowKey,
    pub source_entity: RelationshipEndpoint,
    pub target_entity: RelationshipEndpoint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipSection {
    #[serde(default)]
    pub last_relationships: Option<Vec<RelationshipRow>>,
    #[serde(default)]
    pub relationship_editor_visible: bool,
    #[serde(default)]
    pub relationships: BTreeMap<RowKey, RelationshipRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionSection {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub note: Field<String>,
}

/// The whole editor state for one Edition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    #[serde(default)]
    pub alias_editor: BTreeMap<RowKey, AliasRow>,
    #[serde(default)]
    pub button_bar: ButtonBar,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition_section: Option<EditionSection>,
    #[serde(default)]
    pub identifier_editor: BTreeMap<RowKey, IdentifierRow>,
    #[serde(default)]
    pub name_section: NameSection,
    #[serde(default)]
    pub relationship_section: RelationshipSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_section: Option<SubmissionSection>,
}
