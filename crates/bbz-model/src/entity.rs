//! Persisted entity shapes.
//!
//! These mirror what the entity loader hands over once every requested
//! relation has been fetched. A relation that was not loaded is `None`; a
//! loaded relation with no rows is an empty collection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Entity type tag carried by every catalogued record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityType {
    Author,
    Edition,
    EditionGroup,
    Publisher,
    Series,
    Work,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Author => "Author",
            EntityType::Edition => "Edition",
            EntityType::EditionGroup => "EditionGroup",
            EntityType::Publisher => "Publisher",
            EntityType::Series => "Series",
            EntityType::Work => "Work",
        }
    }

    /// Lowercase, hyphenated form used in URLs and query parameters.
    pub fn slug(&self) -> &'static str {
        match self {
            EntityType::Author => "author",
            EntityType::Edition => "edition",
            EntityType::EditionGroup => "edition-group",
            EntityType::Publisher => "publisher",
            EntityType::Series => "series",
            EntityType::Work => "work",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = ModelError;

    /// Accepts the tag (`EditionGroup`) or the slug (`edition-group`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "author" => Ok(EntityType::Author),
            "edition" => Ok(EntityType::Edition),
            "editiongroup" => Ok(EntityType::EditionGroup),
            "publisher" => Ok(EntityType::Publisher),
            "series" => Ok(EntityType::Series),
            "work" => Ok(EntityType::Work),
            _ => Err(ModelError::UnknownEntityType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alias {
    pub id: i64,
    pub name: String,
    pub sort_name: String,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub language_id: Option<i64>,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub default: bool,
}

impl Alias {
    /// Language id, preferring the loaded language record over the bare
    /// foreign key.
    pub fn language_key(&self) -> Option<i64> {
        self.language
            .as_ref()
            .map(|language| language.id)
            .or(self.language_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disambiguation {
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierType {
    pub id: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub identifier_type: Option<IdentifierType>,
    #[serde(default)]
    pub type_id: Option<i64>,
    pub value: String,
}

impl Identifier {
    pub fn type_key(&self) -> Option<i64> {
        self.identifier_type
            .as_ref()
            .map(|kind| kind.id)
            .or(self.type_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipType {
    pub id: i64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub link_phrase: String,
    #[serde(default)]
    pub reverse_link_phrase: String,
    #[serde(default)]
    pub source_entity_type: Option<EntityType>,
    #[serde(default)]
    pub target_entity_type: Option<EntityType>,
}

impl RelationshipType {
    /// Placeholder used when the reference data lacks the requested type.
    pub fn with_id(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// A related entity loaded together with its default alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedEntity {
    pub bbid: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    #[serde(default)]
    pub default_alias: Option<Alias>,
    #[serde(default)]
    pub disambiguation: Option<Disambiguation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: i64,
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
    pub source: RelatedEntity,
    pub target: RelatedEntity,
    #[serde(default)]
    pub attribute_set_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionFormat {
    pub id: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionStatus {
    pub id: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseEvent {
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasSet {
    #[serde(default)]
    pub aliases: Vec<Alias>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierSet {
    #[serde(default)]
    pub identifiers: Vec<Identifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSet {
    #[serde(default)]
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseEventSet {
    #[serde(default)]
    pub release_events: Vec<ReleaseEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherSet {
    #[serde(default)]
    pub publishers: Vec<RelatedEntity>,
}

/// A fully loaded Edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edition {
    pub bbid: String,
    #[serde(default)]
    pub default_alias: Option<Alias>,
    #[serde(default)]
    pub disambiguation: Option<Disambiguation>,
    #[serde(default)]
    pub alias_set: Option<AliasSet>,
    #[serde(default)]
    pub identifier_set: Option<IdentifierSet>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub depth: Option<i64>,
    #[serde(default)]
    pub height: Option<i64>,
    #[serde(default)]
    pub pages: Option<i64>,
    #[serde(default)]
    pub weight: Option<i64>,
    #[serde(default)]
    pub width: Option<i64>,
    #[serde(default)]
    pub edition_format: Option<EditionFormat>,
    #[serde(default)]
    pub edition_status: Option<EditionStatus>,
    #[serde(default)]
    pub language_set: Option<LanguageSet>,
    #[serde(default)]
    pub release_event_set: Option<ReleaseEventSet>,
    #[serde(default)]
    pub publisher_set: Option<PublisherSet>,
    #[serde(default)]
    pub edition_group: Option<RelatedEntity>,
}

impl Edition {
    /// Name of the default alias, if one is loaded.
    pub fn display_name(&self) -> Option<&str> {
        self.default_alias.as_ref().map(|alias| alias.name.as_str())
    }
}
