//! Construction of the nested alias, identifier and relationship payloads.
//!
//! The submission transformer hands the raw editor maps to a
//! [`PayloadConstructors`] implementation. [`StandardConstructors`] is the
//! stock implementation shared by every entity type.

use std::collections::BTreeMap;

use bbz_model::{
    AliasPayload, AliasRow, IdentifierPayload, IdentifierRow, NameSection, RelationshipPayload,
    RelationshipSection, RowKey,
};

use crate::TransformError;

pub trait PayloadConstructors {
    fn construct_aliases(
        &self,
        alias_editor: &BTreeMap<RowKey, AliasRow>,
        name_section: &NameSection,
    ) -> Result<Vec<AliasPayload>, TransformError>;

    fn construct_identifiers(
        &self,
        identifier_editor: &BTreeMap<RowKey, IdentifierRow>,
    ) -> Result<Vec<IdentifierPayload>, TransformError>;

    fn construct_relationships(
        &self,
        relationship_section: &RelationshipSection,
    ) -> Result<Vec<RelationshipPayload>, TransformError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardConstructors;

impl PayloadConstructors for StandardConstructors {
    /// The name section becomes the default, primary alias and comes first.
    fn construct_aliases(
        &self,
        alias_editor: &BTreeMap<RowKey, AliasRow>,
        name_section: &NameSection,
    ) -> Result<Vec<AliasPayload>, TransformError> {
        let default_alias = AliasPayload {
            id: None,
            default: true,
            language_id: name_section.language,
            name: name_section.name.clone(),
            primary: true,
            sort_name: name_section.sort_name.clone(),
        };
        let others = alias_editor.iter().map(|(key, row)| AliasPayload {
            id: Some(*key),
            default: false,
            language_id: row.language,
            name: row.name.clone(),
            primary: row.primary,
            sort_name: row.sort_name.clone(),
        });
        Ok(std::iter::once(default_alias).chain(others).collect())
    }

    fn construct_identifiers(
        &self,
        identifier_editor: &BTreeMap<RowKey, IdentifierRow>,
    ) -> Result<Vec<IdentifierPayload>, TransformError> {
        Ok(identifier_editor
            .iter()
            .map(|(key, row)| IdentifierPayload {
                id: *key,
                type_id: row.identifier_type,
                value: row.value.clone(),
            })
            .collect())
    }

    fn construct_relationships(
        &self,
        relationship_section: &RelationshipSection,
    ) -> Result<Vec<RelationshipPayload>, TransformError> {
        Ok(relationship_section
            .relationships
            .values()
            .map(|row| RelationshipPayload {
                id: row.row_id,
                type_id: row.relationship_type.id,
                source_bbid: row.source_entity.bbid.clone(),
                target_bbid: row.target_entity.bbid.clone(),
                attribute_set_id: row.attribute_set_id,
            })
            .collect())
    }
}
