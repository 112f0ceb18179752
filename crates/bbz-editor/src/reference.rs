//! Reference data shown by the editor alongside the form state.

use bbz_model::{EditionFormat, EditionStatus, IdentifierType, Language, RelationshipType};
use serde::{Deserialize, Serialize};

/// Lookup tables loaded by the caller before the page is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceData {
    pub identifier_types: Vec<IdentifierType>,
    pub edition_statuses: Vec<EditionStatus>,
    pub edition_formats: Vec<EditionFormat>,
    pub languages: Vec<Language>,
    pub relationship_types: Vec<RelationshipType>,
}
