//! Submission payload handed to the create-or-edit handler.
//!
//! Numeric fields carry a [`Coerced`] value. The persistence layer is the
//! one that rejects [`Coerced::NotANumber`]; nothing upstream validates it.

use serde::{Deserialize, Serialize};

use crate::form::FormScalar;
use crate::{Field, RowKey};

/// Outcome of integer coercion for one numeric form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coerced {
    /// Parsed as a base-10 integer.
    Integer(i64),
    /// Truthy input with no leading digits; holds the raw input.
    NotANumber(String),
    /// Falsy input (`0`, `""`), passed through unchanged.
    Falsy(FormScalar),
}

impl Coerced {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Coerced::Integer(value) => Some(*value),
            Coerced::NotANumber(_) | Coerced::Falsy(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RowKey>,
    pub default: bool,
    pub language_id: Option<i64>,
    pub name: String,
    pub primary: bool,
    pub sort_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierPayload {
    pub id: RowKey,
    pub type_id: Option<i64>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipPayload {
    pub id: RowKey,
    pub type_id: i64,
    pub source_bbid: Option<String>,
    pub target_bbid: Option<String>,
    pub attribute_set_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseEventPayload {
    pub date: String,
}

/// Normalized Edition payload for a create or an edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub aliases: Vec<AliasPayload>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub depth: Field<Coerced>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub edition_group_bbid: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub format_id: Field<Coerced>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub height: Field<Coerced>,
    pub identifiers: Vec<IdentifierPayload>,
    pub languages: Vec<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub note: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub pages: Field<Coerced>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub publishers: Field<Vec<String>>,
    pub relationships: Vec<RelationshipPayload>,
    pub release_events: Vec<ReleaseEventPayload>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub status_id: Field<Coerced>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub weight: Field<Coerced>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub width: Field<Coerced>,
}
