pub mod entity;
pub mod error;
pub mod field;
pub mod form;
pub mod ids;
pub mod payload;

pub use entity::{
    Alias, AliasSet, Disambiguation, Edition, EditionFormat, EditionStatus, EntityType,
    Identifier, IdentifierSet, IdentifierType, Language, LanguageSet, PublisherSet,
    RelatedEntity, Relationship, RelationshipType, ReleaseEvent, ReleaseEventSet,
};
pub use error::{ModelError, Result};
pub use field::Field;
pub use form::{
    AliasRow, ButtonBar, DateParts, EditionSection, EntityOption, FormScalar, FormState,
    IdentifierRow, LanguageOption, NameSection, RelationshipEndpoint, RelationshipRow,
    RelationshipSection, SubmissionSection,
};
pub use ids::RowKey;
pub use payload::{
    AliasPayload, Coerced, IdentifierPayload, RelationshipPayload, ReleaseEventPayload,
    SubmissionPayload,
};
